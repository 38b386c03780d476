//! Main application modules.
//!
//! This module provides the end-of-run statistics used by the driver.

pub mod statistics;

// Re-export public API
pub use statistics::{log_run_summary, print_error_statistics};
