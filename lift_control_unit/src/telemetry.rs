//! Dashboard keys and the tracing-backed sink.
//!
//! Key strings are fixed: the drive-station dashboard looks values up by
//! exact name, so they are kept verbatim, odd casing included.

use lift_common::telemetry::TelemetrySink;
use tracing::debug;

/// Raw operator axis for this cycle.
pub const TARGET_LIFT_SPEED: &str = "TARGET LIFT SPEED";
/// Computed duty command for this cycle.
pub const LIFT_SPEED: &str = "LIFTSPEED";
/// Upper travel-limit switch reading.
pub const UPPER_LIMIT: &str = "UPPER ELEVATOR LIMIT";
/// Lower travel-limit switch reading.
pub const LOWER_LIMIT: &str = "LOWER ELEVATOR LIMIT";
/// Encoder position [revolutions].
pub const POSITION: &str = "Elevator Position";

/// Telemetry sink that forwards every write to the tracing subscriber.
///
/// Used by the demo binary; a real deployment would put a dashboard client
/// behind the same trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceSink;

impl TelemetrySink for TraceSink {
    fn put_number(&mut self, key: &str, value: f64) {
        debug!(key, value, "telemetry");
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        debug!(key, value, "telemetry");
    }
}
