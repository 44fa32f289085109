//! Lift HAL - simulation backend.
//!
//! Software-emulated lift hardware for development and testing without a
//! robot: a one-axis plant with travel-limit switches behind the
//! `lift_common::hal` traits, plus operator input sources that can be
//! driven from tests or a script.

pub mod operators;
pub mod sim;

pub use operators::{ManualOperator, ScriptStep, ScriptedOperator};
pub use sim::SimLift;
