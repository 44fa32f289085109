//! Hardware seam traits and error types.
//!
//! This module defines:
//! - `MotorController` / `LimitSwitch` / `Encoder` - single-device traits
//! - `LiftHardware` trait - handle provider backing `LiftSystem::init`
//! - `InterlockState` - per-cycle snapshot of both limit switches
//! - `HalError` enum - fatal startup failures
//!
//! Handles are acquired once during initialization and exclusively owned by
//! the control component for its lifetime. There is no retry path: a failed
//! acquisition surfaces as a fatal startup error in the host.

use thiserror::Error;

/// Error types for hardware operations.
#[derive(Debug, Clone, Error)]
pub enum HalError {
    /// A device handle could not be acquired during initialization.
    #[error("handle acquisition failed for {device}: {reason}")]
    Acquisition {
        /// Device that failed (e.g. "lift motor", "upper limit switch").
        device: &'static str,
        /// Backend-specific failure description.
        reason: String,
    },

    /// Backend-level initialization failure.
    #[error("hardware backend init failed: {0}")]
    InitFailed(String),
}

/// Single signed duty-cycle actuator.
///
/// Commands are in [-1.0, 1.0]. The wire sign convention is inverted
/// relative to raw encoder direction; the control component corrects this
/// once via [`MotorController::set_inverted`] during initialization.
pub trait MotorController {
    /// Write one duty-cycle command, range [-1.0, 1.0].
    fn set_output(&mut self, duty: f64);

    /// Set polarity inversion. Applied once at init, before any command.
    fn set_inverted(&mut self, inverted: bool);
}

/// Binary travel-limit sensor. `true` means the physical extreme is reached.
pub trait LimitSwitch {
    /// Read the switch. Infallible by contract: the host hardware layer
    /// owns wiring faults.
    fn at_limit(&self) -> bool;
}

/// Rotary position sensor, reporting revolutions.
pub trait Encoder {
    /// Current position in revolutions.
    fn position(&self) -> f64;
}

/// Handle provider for one lift subsystem.
///
/// `LiftSystem::init` pulls each handle exactly once. Providers hand out
/// exclusively-owned boxed handles; sharing, if a backend needs it
/// internally, is the backend's concern.
pub trait LiftHardware {
    /// Acquire the lift motor.
    fn motor(&mut self) -> Result<Box<dyn MotorController>, HalError>;

    /// Acquire the upper travel-limit switch.
    fn upper_limit(&mut self) -> Result<Box<dyn LimitSwitch>, HalError>;

    /// Acquire the lower travel-limit switch.
    fn lower_limit(&mut self) -> Result<Box<dyn LimitSwitch>, HalError>;

    /// Acquire the lift encoder.
    fn encoder(&mut self) -> Result<Box<dyn Encoder>, HalError>;
}

/// Per-cycle snapshot of both travel interlocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterlockState {
    /// Upper travel limit reached.
    pub upper_active: bool,
    /// Lower travel limit reached.
    pub lower_active: bool,
}

impl InterlockState {
    /// Sample both switches once for the current cycle.
    pub fn sample(upper: &dyn LimitSwitch, lower: &dyn LimitSwitch) -> Self {
        Self {
            upper_active: upper.at_limit(),
            lower_active: lower.at_limit(),
        }
    }
}
