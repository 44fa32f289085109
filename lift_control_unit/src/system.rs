//! The lift control component.
//!
//! `LiftSystem` owns the hardware handles for one vertical lift axis and
//! turns operator intent into a safe duty command once per control cycle.
//! Construction goes through [`LiftSystem::init`], which acquires the
//! handles and applies one-time setup; a system that failed to initialize
//! never exists, so there is no run-before-init state to defend against.

use crate::position::{clears_interlocks, raw_target, seek_command};
use crate::speed::desired_lift_speed;
use crate::telemetry::{LIFT_SPEED, LOWER_LIMIT, POSITION, TARGET_LIFT_SPEED, UPPER_LIMIT};
use lift_common::config::{LiftConfig, LiftTuning};
use lift_common::hal::{
    Encoder, HalError, InterlockState, LiftHardware, LimitSwitch, MotorController,
};
use lift_common::input::{OperatorInput, OperatorIntent};
use lift_common::telemetry::TelemetrySink;
use tracing::{info, trace};

/// Control component for the vertical lift.
pub struct LiftSystem {
    tuning: LiftTuning,
    motor: Box<dyn MotorController>,
    upper_limit: Box<dyn LimitSwitch>,
    lower_limit: Box<dyn LimitSwitch>,
    encoder: Box<dyn Encoder>,
    input: Box<dyn OperatorInput>,
    telemetry: Box<dyn TelemetrySink>,
    /// Closed-loop target [revolutions]. Touched only by the dormant
    /// positioning path; the active cycle never reads it.
    target_position: f64,
}

impl LiftSystem {
    /// Acquire hardware handles and build a ready system.
    ///
    /// Pulls the motor, both limit switches, and the encoder from the
    /// provider, applies motor polarity inversion, and zeroes the
    /// closed-loop target. A handle-acquisition failure is fatal for
    /// startup; there is no retry.
    pub fn init(
        config: &LiftConfig,
        hardware: &mut dyn LiftHardware,
        input: Box<dyn OperatorInput>,
        telemetry: Box<dyn TelemetrySink>,
    ) -> Result<Self, HalError> {
        let mut motor = hardware.motor()?;
        let upper_limit = hardware.upper_limit()?;
        let lower_limit = hardware.lower_limit()?;
        let encoder = hardware.encoder()?;

        motor.set_inverted(config.lift.motor_inverted);
        info!(
            motor_inverted = config.lift.motor_inverted,
            max_lift_speed = config.lift.max_lift_speed,
            "lift system initialized"
        );

        Ok(Self {
            tuning: config.lift,
            motor,
            upper_limit,
            lower_limit,
            encoder,
            input,
            telemetry,
            target_position: 0.0,
        })
    }

    /// Execute one control cycle.
    ///
    /// Samples input and interlocks once, computes the arbitrated duty,
    /// writes it to the motor, then publishes the five dashboard values.
    /// Completes without blocking; must be called once per cycle by the
    /// scheduler.
    pub fn run(&mut self) {
        let intent = OperatorIntent::sample(self.input.as_ref());
        let interlocks =
            InterlockState::sample(self.upper_limit.as_ref(), self.lower_limit.as_ref());

        let lift_speed = desired_lift_speed(&intent, interlocks, self.tuning.max_lift_speed);
        self.motor.set_output(lift_speed);
        trace!(
            axis = intent.lift_axis,
            lift_speed,
            upper = interlocks.upper_active,
            lower = interlocks.lower_active,
            "cycle"
        );

        self.telemetry.put_number(TARGET_LIFT_SPEED, intent.lift_axis);
        self.telemetry.put_number(LIFT_SPEED, lift_speed);
        self.telemetry.put_bool(UPPER_LIMIT, interlocks.upper_active);
        self.telemetry.put_bool(LOWER_LIMIT, interlocks.lower_active);
        self.telemetry.put_number(POSITION, self.encoder.position());
    }

    /// Dormant: resolve operator intent into a new closed-loop target.
    ///
    /// Accepts the raw target unconditionally under override; otherwise
    /// leaves the stored target unchanged when the raw target would move
    /// past an active interlock (above the level-three height with the
    /// upper switch active, below the level-one height with the lower
    /// switch active).
    pub fn update_target(&mut self) {
        let intent = OperatorIntent::sample(self.input.as_ref());
        let raw = raw_target(&intent, self.encoder.position(), &self.tuning);

        if intent.ignore_limit_switches {
            self.target_position = raw;
            return;
        }
        let interlocks =
            InterlockState::sample(self.upper_limit.as_ref(), self.lower_limit.as_ref());
        if clears_interlocks(raw, interlocks, &self.tuning) {
            self.target_position = raw;
        }
    }

    /// Dormant: drive one bang-bang step toward the stored target.
    ///
    /// Commands full duty in the direction of the error and returns `true`
    /// once the encoder matches the target exactly.
    pub fn seek_target(&mut self) -> bool {
        let (duty, reached) =
            seek_command(self.target_position, self.encoder.position(), self.tuning.max_lift_speed);
        self.motor.set_output(duty);
        reached
    }

    /// Current closed-loop target [revolutions].
    pub fn target_position(&self) -> f64 {
        self.target_position
    }
}
