//! Application configuration and constants.
//!
//! This module provides:
//! - Output labels and record prefixes
//! - CLI option types and parsing

mod constants;
mod types;

pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
