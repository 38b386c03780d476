//! Error handling and lookup-failure statistics.
//!
//! This module provides:
//! - Initialization error types
//! - Lookup error types and categorization
//! - Lookup-failure statistics tracking
//!
//! Failed lookups are never fatal: they are logged, counted here, and the
//! affected check reports "no record".

mod stats;
mod types;

// Re-export public API
pub use stats::ErrorStats;
pub use types::{ErrorType, InitializationError, LookupError};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_error_stats_initialization() {
        let stats = ErrorStats::new();
        for error_type in ErrorType::iter() {
            assert_eq!(stats.get_error_count(error_type), 0);
        }
        assert_eq!(stats.total_errors(), 0);
    }

    #[test]
    fn test_error_stats_increment() {
        let stats = ErrorStats::new();
        stats.increment_error(ErrorType::DnsMxLookupError);
        assert_eq!(stats.get_error_count(ErrorType::DnsMxLookupError), 1);
        assert_eq!(stats.get_error_count(ErrorType::DnsSpfLookupError), 0);
    }

    #[test]
    fn test_error_stats_totals() {
        let stats = ErrorStats::new();
        stats.increment_error(ErrorType::DnsMxLookupError);
        stats.increment_error(ErrorType::DnsDmarcLookupError);
        stats.increment_error(ErrorType::DnsDmarcLookupError);
        stats.increment_error(ErrorType::DnsLookupTimeout);
        assert_eq!(stats.get_error_count(ErrorType::DnsDmarcLookupError), 2);
        assert_eq!(stats.total_errors(), 4);
    }

    #[test]
    fn test_timeout_is_categorized_separately() {
        let timeout = anyhow::Error::new(LookupError::Timeout(std::time::Duration::from_secs(2)));
        assert_eq!(
            ErrorType::categorize(&timeout, ErrorType::DnsMxLookupError),
            ErrorType::DnsLookupTimeout
        );

        let other = anyhow::anyhow!("no record found for Query");
        assert_eq!(
            ErrorType::categorize(&other, ErrorType::DnsSpfLookupError),
            ErrorType::DnsSpfLookupError
        );
    }
}
