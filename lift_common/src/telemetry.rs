//! Write-only telemetry sink contract.
//!
//! The control component publishes a handful of key/value diagnostics every
//! cycle. There is no read path and no schema versioning; a sink is free to
//! forward, log, or drop values.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// A single telemetry value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TelemetryValue {
    /// Numeric reading (speeds, positions).
    Number(f64),
    /// Boolean reading (switch states).
    Bool(bool),
}

/// Write-only key/value telemetry output.
pub trait TelemetrySink {
    /// Publish a numeric value under `key`.
    fn put_number(&mut self, key: &str, value: f64);

    /// Publish a boolean value under `key`.
    fn put_bool(&mut self, key: &str, value: bool);
}

/// In-memory recording sink.
///
/// Keeps the full write history per key, in order. Cloning yields another
/// view onto the same records, so a test can hand one clone to the control
/// component and inspect the other after cycles have run.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    records: Arc<Mutex<HashMap<String, Vec<TelemetryValue>>>>,
}

impl MemorySink {
    /// Create an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes recorded under `key`.
    pub fn write_count(&self, key: &str) -> usize {
        self.records
            .lock()
            .expect("telemetry records poisoned")
            .get(key)
            .map_or(0, Vec::len)
    }

    /// Full write history for `key`, oldest first.
    pub fn history(&self, key: &str) -> Vec<TelemetryValue> {
        self.records
            .lock()
            .expect("telemetry records poisoned")
            .get(key)
            .cloned()
            .unwrap_or_default()
    }

    /// Most recent numeric value for `key`, if any numeric value was written.
    pub fn last_number(&self, key: &str) -> Option<f64> {
        self.history(key).iter().rev().find_map(|v| match v {
            TelemetryValue::Number(n) => Some(*n),
            TelemetryValue::Bool(_) => None,
        })
    }

    /// Most recent boolean value for `key`, if any boolean value was written.
    pub fn last_bool(&self, key: &str) -> Option<bool> {
        self.history(key).iter().rev().find_map(|v| match v {
            TelemetryValue::Bool(b) => Some(*b),
            TelemetryValue::Number(_) => None,
        })
    }

    fn record(&self, key: &str, value: TelemetryValue) {
        self.records
            .lock()
            .expect("telemetry records poisoned")
            .entry(key.to_string())
            .or_default()
            .push(value);
    }
}

impl TelemetrySink for MemorySink {
    fn put_number(&mut self, key: &str, value: f64) {
        self.record(key, TelemetryValue::Number(value));
    }

    fn put_bool(&mut self, key: &str, value: bool) {
        self.record(key, TelemetryValue::Bool(value));
    }
}
