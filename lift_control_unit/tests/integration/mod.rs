//! Shared test rig: simulated plant + manual operator + recording sink.

mod dormant_path;
mod runner;
mod telemetry;

use lift_common::config::LiftConfig;
use lift_common::telemetry::MemorySink;
use lift_control_unit::system::LiftSystem;
use lift_hal::{ManualOperator, SimLift};

pub struct Rig {
    pub sim: SimLift,
    pub operator: ManualOperator,
    pub telemetry: MemorySink,
    pub system: LiftSystem,
}

/// Build a ready system on stock tuning. The plant rests at the lower
/// bound, so the lower switch starts active.
pub fn rig() -> Rig {
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
    Rig {
        sim,
        operator,
        telemetry,
        system,
    }
}

/// Rig with the carriage mid-travel (both switches inactive).
pub fn rig_mid_travel() -> Rig {
    let rig = rig();
    rig.sim.set_position(2.0);
    rig
}
