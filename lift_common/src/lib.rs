//! Lift Common Library
//!
//! Shared types and contracts for the robot lift workspace crates.
//!
//! # Module Structure
//!
//! - [`config`] - Lift configuration loading and validation
//! - [`hal`] - Hardware seam traits (motor, limit switches, encoder)
//! - [`input`] - Operator input capability trait and per-cycle snapshot
//! - [`telemetry`] - Write-only telemetry sink contract

pub mod config;
pub mod hal;
pub mod input;
pub mod telemetry;
