//! Per-domain email authentication checks.
//!
//! Each domain gets three independent lookups (MX, SPF, DMARC) that run
//! concurrently and are joined before the result is assembled. A failed
//! lookup is logged and counted, and its check reports "not present".

mod domain;
mod types;

// Re-export public API
pub use domain::check_domain;
pub use types::{CheckOptions, DomainResult};
