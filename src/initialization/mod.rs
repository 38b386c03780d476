//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - Logger (`env_logger` with plain or pretty formatting)
//! - DNS resolver (system configuration with a built-in fallback)

mod logger;
mod resolver;

// Re-export public API
pub use logger::{format_plain, init_logger_with};
pub use resolver::init_resolver;
