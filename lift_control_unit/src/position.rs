//! Dormant closed-loop positioning path.
//!
//! Resolves operator intent into a target position in revolutions and
//! drives toward it with a bang-bang command. Implemented and tested, but
//! not called from the active cycle: restoring the call changes observable
//! behavior and needs an explicit decision (see DESIGN.md).

use lift_common::config::LiftTuning;
use lift_common::hal::InterlockState;
use lift_common::input::OperatorIntent;

/// Resolve the raw desired target position for this cycle.
///
/// Manual nudge wins over presets: any non-zero axis deflection moves the
/// target relative to the current encoder position, scaled by
/// `nudge_scale`. With the axis centered, the first requested preset in
/// order level-one, level-two, level-three supplies the target. With
/// nothing requested the target is the zero position.
pub fn raw_target(intent: &OperatorIntent, encoder_position: f64, tuning: &LiftTuning) -> f64 {
    if intent.lift_axis.abs() > 0.0 {
        return encoder_position + intent.lift_axis * tuning.nudge_scale;
    }
    if intent.level_one {
        return tuning.level_one_height;
    }
    if intent.level_two {
        return tuning.level_two_height;
    }
    if intent.level_three {
        return tuning.level_three_height;
    }
    0.0
}

/// Whether a raw target is acceptable given the interlock readings.
///
/// A target is refused when the upper limit is active and the target lies
/// above the level-three height, or the lower limit is active and the
/// target lies below the level-one height. The override flag bypasses this
/// check entirely (handled by the caller).
pub fn clears_interlocks(raw: f64, interlocks: InterlockState, tuning: &LiftTuning) -> bool {
    if interlocks.upper_active && raw > tuning.level_three_height {
        return false;
    }
    if interlocks.lower_active && raw < tuning.level_one_height {
        return false;
    }
    true
}

/// Bang-bang command toward `target` from `position`.
///
/// Returns the duty to apply and whether the target is reached. Full
/// magnitude in the direction of the error, zero on an exact position
/// match. Known limitation: no damping, so a real axis will overshoot and
/// chatter around the target; kept as-is rather than silently replaced
/// with a tuned controller.
pub fn seek_command(target: f64, position: f64, max_lift_speed: f64) -> (f64, bool) {
    if target != position {
        let duty = if target - position > 0.0 {
            max_lift_speed
        } else {
            -max_lift_speed
        };
        (duty, false)
    } else {
        (0.0, true)
    }
}
