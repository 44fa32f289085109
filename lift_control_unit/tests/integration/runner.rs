//! Paced cycle runner against the simulated plant.

use lift_common::config::LiftConfig;
use lift_common::telemetry::MemorySink;
use lift_control_unit::cycle::CycleRunner;
use lift_control_unit::system::LiftSystem;
use lift_control_unit::telemetry::POSITION;
use lift_hal::{ManualOperator, SimLift};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

fn runner_parts() -> (SimLift, ManualOperator, MemorySink, LiftSystem) {
    let config = LiftConfig::default();
    let mut sim = SimLift::new(config.sim);
    let operator = ManualOperator::new();
    let telemetry = MemorySink::new();
    let system = LiftSystem::init(
        &config,
        &mut sim,
        Box::new(operator.clone()),
        Box::new(telemetry.clone()),
    )
    .expect("sim handles always acquire");
    (sim, operator, telemetry, system)
}

#[test]
fn step_runs_one_cycle_without_pacing() {
    let (_sim, _operator, telemetry, system) = runner_parts();
    let mut runner = CycleRunner::new(system, Duration::from_millis(20));

    runner.step();

    assert_eq!(telemetry.write_count(POSITION), 1);
}

#[test]
fn run_counts_cycles_and_stops_on_the_flag() {
    let (_sim, _operator, telemetry, system) = runner_parts();
    let runner = CycleRunner::new(system, Duration::from_millis(1));
    let running = runner.running_flag();

    let cycles = Arc::new(AtomicU64::new(0));
    let seen = Arc::clone(&cycles);
    let mut runner = runner.with_hook(Box::new(move |_dt| {
        if seen.fetch_add(1, Ordering::SeqCst) + 1 >= 5 {
            running.store(false, Ordering::SeqCst);
        }
    }));

    runner.run();

    assert_eq!(runner.stats().cycle_count, 5);
    assert_eq!(cycles.load(Ordering::SeqCst), 5);
    assert_eq!(telemetry.write_count(POSITION), 5);
}

#[test]
fn override_raise_moves_the_simulated_carriage() {
    let (sim, operator, _telemetry, system) = runner_parts();
    operator.set_lift_axis(0.7);
    operator.set_ignore_limit_switches(true);

    let runner = CycleRunner::new(system, Duration::from_millis(1));
    let running = runner.running_flag();

    let start = sim.position();
    let cycles = Arc::new(AtomicU64::new(0));
    let seen = Arc::clone(&cycles);
    let plant = sim.clone();
    let mut runner = runner.with_hook(Box::new(move |dt| {
        plant.step(dt);
        if seen.fetch_add(1, Ordering::SeqCst) + 1 >= 50 {
            running.store(false, Ordering::SeqCst);
        }
    }));

    runner.run();

    assert_eq!(runner.stats().cycle_count, 50);
    // 0.7 axis * 0.8 duty * 2 rev/s over 50 ms of plant time.
    let expected = start + 0.7 * 0.8 * 2.0 * 0.050;
    assert!(
        (sim.position() - expected).abs() < 1e-9,
        "position={} expected={expected}",
        sim.position()
    );
}
