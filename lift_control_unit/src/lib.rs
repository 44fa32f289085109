//! # Lift Control Unit
//!
//! Periodic control loop for the robot's vertical lift subsystem.
//! Arbitrates between raw operator commands, the travel-limit interlocks,
//! and (dormant) discrete preset targets, producing one bounded duty-cycle
//! command per control cycle plus a telemetry snapshot.
//!
//! ## Cycle
//!
//! scheduler → [`system::LiftSystem::run`] → sample input + interlocks →
//! [`speed::desired_lift_speed`] → motor write → telemetry writes.
//!
//! The closed-loop positioning path ([`position`]) is implemented and
//! tested but deliberately not called from the active cycle; wiring it in
//! changes observable behavior and needs an explicit decision.

pub mod cycle;
pub mod position;
pub mod speed;
pub mod system;
pub mod telemetry;
