//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, limits, request defaults)
//! - CLI option types and parsing
//! - Settings handed to the inspection pipelines

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Command, Config, InspectorSettings, LogFormat, LogLevel};
