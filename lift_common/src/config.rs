//! Lift configuration loading and validation.
//!
//! All tuning numbers live here as named values rather than inline literals:
//! maximum duty, nudge calibration, preset heights, cycle period, and the
//! simulation plant parameters. Every field has a default so an empty TOML
//! file yields the stock tuning.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path that was attempted.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// Config file is not valid TOML for [`LiftConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config parsed but the values are unusable.
    #[error("invalid config: {0}")]
    Validation(String),
}

/// Top-level lift configuration.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LiftConfig {
    /// Control cycle settings.
    pub cycle: CycleConfig,
    /// Lift tuning values.
    pub lift: LiftTuning,
    /// Simulation plant settings (ignored on real hardware).
    pub sim: SimConfig,
}

/// Control cycle settings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CycleConfig {
    /// Cycle period [ms].
    pub period_ms: u64,
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self { period_ms: 20 }
    }
}

/// Lift tuning values.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct LiftTuning {
    /// Maximum commanded duty magnitude.
    pub max_lift_speed: f64,
    /// Scale applied to the axis when nudging the closed-loop target
    /// [revolutions per full deflection].
    pub nudge_scale: f64,
    /// Level-one preset height [revolutions].
    pub level_one_height: f64,
    /// Level-two preset height [revolutions].
    pub level_two_height: f64,
    /// Level-three preset height [revolutions].
    pub level_three_height: f64,
    /// Motor polarity inversion, applied once at init. The motor wire
    /// direction is inverted relative to raw encoder direction.
    pub motor_inverted: bool,
}

impl Default for LiftTuning {
    fn default() -> Self {
        Self {
            max_lift_speed: 0.8,
            nudge_scale: 0.5,
            level_one_height: 1.0,
            level_two_height: 2.0,
            level_three_height: 3.0,
            motor_inverted: true,
        }
    }
}

/// Simulation plant settings.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Lower travel bound [revolutions]; the lower switch trips at or below.
    pub lower_bound: f64,
    /// Upper travel bound [revolutions]; the upper switch trips at or above.
    pub upper_bound: f64,
    /// Plant speed at full duty [revolutions/s].
    pub revs_per_sec_at_full: f64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            lower_bound: 0.0,
            upper_bound: 4.0,
            revs_per_sec_at_full: 2.0,
        }
    }
}

impl LiftConfig {
    /// Parse a config from a TOML string and validate it.
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        let config: LiftConfig = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the tuning values are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let lift = &self.lift;
        if !(lift.max_lift_speed > 0.0 && lift.max_lift_speed <= 1.0) {
            return Err(ConfigError::Validation(format!(
                "max_lift_speed must be in (0, 1], got {}",
                lift.max_lift_speed
            )));
        }
        if lift.nudge_scale <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "nudge_scale must be positive, got {}",
                lift.nudge_scale
            )));
        }
        if !(lift.level_one_height < lift.level_two_height
            && lift.level_two_height < lift.level_three_height)
        {
            return Err(ConfigError::Validation(format!(
                "preset heights must be strictly increasing, got {} / {} / {}",
                lift.level_one_height, lift.level_two_height, lift.level_three_height
            )));
        }
        if self.cycle.period_ms == 0 {
            return Err(ConfigError::Validation(
                "cycle period_ms must be positive".into(),
            ));
        }
        if self.sim.lower_bound >= self.sim.upper_bound {
            return Err(ConfigError::Validation(format!(
                "sim travel bounds must be ordered, got [{}, {}]",
                self.sim.lower_bound, self.sim.upper_bound
            )));
        }
        if self.sim.revs_per_sec_at_full <= 0.0 {
            return Err(ConfigError::Validation(format!(
                "sim revs_per_sec_at_full must be positive, got {}",
                self.sim.revs_per_sec_at_full
            )));
        }
        Ok(())
    }
}

/// Load and validate a config file.
pub fn load_config(path: &Path) -> Result<LiftConfig, ConfigError> {
    let toml_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    LiftConfig::from_toml_str(&toml_str)
}
