//! Simulated lift plant.
//!
//! `SimLift` emulates one vertical axis: commanded duty integrates into
//! encoder position, and the limit switches trip automatically at the travel
//! bounds. The plant is wired the way the real lift is: raw positive motor
//! direction opposes positive encoder direction, so the control layer's
//! polarity inversion (set once at init) makes a positive command raise the
//! carriage.
//!
//! All handles share one plant state, so a test can keep the `SimLift`
//! around to force switch states, teleport the encoder, or read back the
//! last commanded duty while the control component owns the handles.

use lift_common::config::SimConfig;
use lift_common::hal::{Encoder, HalError, LiftHardware, LimitSwitch, MotorController};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::trace;

#[derive(Debug)]
struct PlantState {
    /// Last duty written by the control component (pre-inversion).
    commanded: f64,
    /// Polarity inversion, as set through the motor handle.
    inverted: bool,
    /// Carriage position [revolutions].
    position: f64,
    /// Forced upper switch reading; `None` means derive from position.
    forced_upper: Option<bool>,
    /// Forced lower switch reading; `None` means derive from position.
    forced_lower: Option<bool>,
}

/// Software lift plant implementing the hardware seam traits.
///
/// Clones share the same plant state, like the handles do.
#[derive(Clone)]
pub struct SimLift {
    state: Arc<Mutex<PlantState>>,
    config: SimConfig,
}

impl SimLift {
    /// Create a plant resting at the lower travel bound.
    pub fn new(config: SimConfig) -> Self {
        Self {
            state: Arc::new(Mutex::new(PlantState {
                commanded: 0.0,
                inverted: false,
                position: config.lower_bound,
                forced_upper: None,
                forced_lower: None,
            })),
            config,
        }
    }

    /// Advance the plant by `dt`: integrate the applied duty into position
    /// and clamp to the travel bounds.
    pub fn step(&self, dt: Duration) {
        let mut state = self.lock();
        // Raw wire direction opposes encoder direction; inversion flips it
        // back so that, when enabled, positive commands raise the carriage.
        let applied = if state.inverted {
            state.commanded
        } else {
            -state.commanded
        };
        let velocity = applied * self.config.revs_per_sec_at_full;
        state.position = (state.position + velocity * dt.as_secs_f64())
            .clamp(self.config.lower_bound, self.config.upper_bound);
        trace!(
            position = state.position,
            commanded = state.commanded,
            "sim plant step"
        );
    }

    /// Carriage position [revolutions].
    pub fn position(&self) -> f64 {
        self.lock().position
    }

    /// Teleport the carriage (sets the encoder reading).
    pub fn set_position(&self, position: f64) {
        self.lock().position = position;
    }

    /// Duty last written by the control component, before inversion.
    pub fn commanded(&self) -> f64 {
        self.lock().commanded
    }

    /// Upper switch reading the handles currently report.
    pub fn upper_active(&self) -> bool {
        let state = self.lock();
        state
            .forced_upper
            .unwrap_or(state.position >= self.config.upper_bound)
    }

    /// Lower switch reading the handles currently report.
    pub fn lower_active(&self) -> bool {
        let state = self.lock();
        state
            .forced_lower
            .unwrap_or(state.position <= self.config.lower_bound)
    }

    /// Force the upper switch reading; `None` returns it to the plant.
    pub fn force_upper(&self, reading: Option<bool>) {
        self.lock().forced_upper = reading;
    }

    /// Force the lower switch reading; `None` returns it to the plant.
    pub fn force_lower(&self, reading: Option<bool>) {
        self.lock().forced_lower = reading;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PlantState> {
        self.state.lock().expect("sim plant state poisoned")
    }
}

impl LiftHardware for SimLift {
    fn motor(&mut self) -> Result<Box<dyn MotorController>, HalError> {
        Ok(Box::new(SimMotor {
            state: Arc::clone(&self.state),
        }))
    }

    fn upper_limit(&mut self) -> Result<Box<dyn LimitSwitch>, HalError> {
        Ok(Box::new(SimSwitch {
            state: Arc::clone(&self.state),
            upper: true,
            bound: self.config.upper_bound,
        }))
    }

    fn lower_limit(&mut self) -> Result<Box<dyn LimitSwitch>, HalError> {
        Ok(Box::new(SimSwitch {
            state: Arc::clone(&self.state),
            upper: false,
            bound: self.config.lower_bound,
        }))
    }

    fn encoder(&mut self) -> Result<Box<dyn Encoder>, HalError> {
        Ok(Box::new(SimEncoder {
            state: Arc::clone(&self.state),
        }))
    }
}

struct SimMotor {
    state: Arc<Mutex<PlantState>>,
}

impl MotorController for SimMotor {
    fn set_output(&mut self, duty: f64) {
        self.state.lock().expect("sim plant state poisoned").commanded = duty;
    }

    fn set_inverted(&mut self, inverted: bool) {
        self.state.lock().expect("sim plant state poisoned").inverted = inverted;
    }
}

struct SimSwitch {
    state: Arc<Mutex<PlantState>>,
    upper: bool,
    bound: f64,
}

impl LimitSwitch for SimSwitch {
    fn at_limit(&self) -> bool {
        let state = self.state.lock().expect("sim plant state poisoned");
        if self.upper {
            state.forced_upper.unwrap_or(state.position >= self.bound)
        } else {
            state.forced_lower.unwrap_or(state.position <= self.bound)
        }
    }
}

struct SimEncoder {
    state: Arc<Mutex<PlantState>>,
}

impl Encoder for SimEncoder {
    fn position(&self) -> f64 {
        self.state.lock().expect("sim plant state poisoned").position
    }
}
