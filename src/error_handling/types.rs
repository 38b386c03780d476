//! Error type definitions.

use std::time::Duration;

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Errors raised around a lookup rather than by the resolver itself.
#[derive(Error, Debug)]
pub enum LookupError {
    /// The per-lookup deadline elapsed before the resolver answered.
    #[error("lookup timed out after {0:?}")]
    Timeout(Duration),
}

/// Kinds of lookup failure, used for end-of-run statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum ErrorType {
    DnsMxLookupError,
    DnsSpfLookupError,
    DnsDmarcLookupError,
    DnsLookupTimeout,
}

impl ErrorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::DnsMxLookupError => "DNS MX lookup error",
            ErrorType::DnsSpfLookupError => "DNS TXT (SPF) lookup error",
            ErrorType::DnsDmarcLookupError => "DNS TXT (DMARC) lookup error",
            ErrorType::DnsLookupTimeout => "DNS lookup timeout",
        }
    }

    /// Picks the counter for a failed lookup: timeouts are tracked on their
    /// own, everything else under the check that issued the query.
    pub fn categorize(error: &anyhow::Error, check: ErrorType) -> ErrorType {
        match error.downcast_ref::<LookupError>() {
            Some(LookupError::Timeout(_)) => ErrorType::DnsLookupTimeout,
            None => check,
        }
    }
}
