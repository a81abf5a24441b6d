//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, sentinels, env var names)
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
