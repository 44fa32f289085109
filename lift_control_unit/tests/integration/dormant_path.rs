//! The closed-loop positioning path: resolvable and drivable on its own,
//! and verifiably absent from the active cycle.

use super::{rig, rig_mid_travel};

#[test]
fn active_cycle_never_touches_the_target() {
    let mut rig = rig_mid_travel();
    rig.operator.set_presets(true, true, true);
    rig.operator.set_lift_axis(0.3);

    for _ in 0..5 {
        rig.system.run();
    }

    assert_eq!(rig.system.target_position(), 0.0);
}

#[test]
fn preset_request_sets_the_target_when_axis_is_centered() {
    let mut rig = rig_mid_travel();
    rig.operator.set_presets(false, false, true);

    rig.system.update_target();

    assert_eq!(rig.system.target_position(), 3.0);
}

#[test]
fn seek_drives_bang_bang_until_exact_arrival() {
    let mut rig = rig_mid_travel();
    rig.operator.set_presets(false, false, true);
    rig.system.update_target();

    assert!(!rig.system.seek_target());
    assert!((rig.sim.commanded() - 0.8).abs() < 1e-12);

    // Teleport onto the target: exact match stops the motor.
    rig.sim.set_position(3.0);
    assert!(rig.system.seek_target());
    assert_eq!(rig.sim.commanded(), 0.0);
}

#[test]
fn seek_commands_downward_when_above_the_target() {
    let mut rig = rig_mid_travel();
    rig.sim.set_position(2.5);
    rig.operator.set_presets(true, false, false);
    rig.system.update_target();
    assert_eq!(rig.system.target_position(), 1.0);

    assert!(!rig.system.seek_target());
    assert!((rig.sim.commanded() - (-0.8)).abs() < 1e-12);
}

#[test]
fn nudge_above_ceiling_is_refused_while_upper_is_active() {
    let mut rig = rig();
    rig.sim.set_position(3.0);
    rig.sim.force_upper(Some(true));
    rig.operator.set_lift_axis(1.0);

    rig.system.update_target();

    // Raw target 3.0 + 1.0 * 0.5 exceeds the level-three height.
    assert_eq!(rig.system.target_position(), 0.0);
}

#[test]
fn override_accepts_the_same_refused_target() {
    let mut rig = rig();
    rig.sim.set_position(3.0);
    rig.sim.force_upper(Some(true));
    rig.operator.set_lift_axis(1.0);
    rig.operator.set_ignore_limit_switches(true);

    rig.system.update_target();

    assert_eq!(rig.system.target_position(), 3.5);
}

#[test]
fn nudge_below_floor_is_refused_while_lower_is_active() {
    let mut rig = rig();
    rig.sim.set_position(1.0);
    rig.sim.force_lower(Some(true));
    rig.operator.set_lift_axis(-1.0);

    rig.system.update_target();

    // Raw target 0.5 sits below the level-one height.
    assert_eq!(rig.system.target_position(), 0.0);
}

#[test]
fn refusal_keeps_the_previous_target_not_zero() {
    let mut rig = rig_mid_travel();
    rig.operator.set_presets(false, true, false);
    rig.system.update_target();
    assert_eq!(rig.system.target_position(), 2.0);

    // Now request something the interlocks refuse.
    rig.sim.set_position(3.0);
    rig.sim.force_upper(Some(true));
    rig.operator.set_presets(false, false, false);
    rig.operator.set_lift_axis(1.0);
    rig.system.update_target();

    assert_eq!(rig.system.target_position(), 2.0);
}
