//! Configuration types and CLI options.
//!
//! Every option is optional. Running without arguments checks domains with the
//! resolver's own timeouts and prints diagnostics in the plain format.

use std::str::FromStr;
use std::time::Duration;

use structopt::StructOpt;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Only error messages (failed lookups)
    Error,
    /// Error and warning messages
    Warn,
    /// Adds the end-of-run summary
    Info,
    /// Adds per-domain lookup details
    Debug,
    /// All messages including trace
    Trace,
}

impl LogLevel {
    /// Accepted `--log-level` values.
    pub const VARIANTS: &'static [&'static str] = &["error", "warn", "info", "debug", "trace"];
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            "trace" => Ok(LogLevel::Trace),
            other => Err(format!("unknown log level: {other}")),
        }
    }
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: `<Level>: <message>`, e.g. `Error: no record found for ...` (default)
/// - `Pretty`: timestamp, colored level, emoji and target
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Bare level label and message
    Plain,
    /// Human-readable format with colors
    Pretty,
}

impl LogFormat {
    /// Accepted `--log-format` values.
    pub const VARIANTS: &'static [&'static str] = &["plain", "pretty"];
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(LogFormat::Plain),
            "pretty" => Ok(LogFormat::Pretty),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Command-line configuration.
///
/// Domains are always read from standard input, one per line.
#[derive(Debug, Clone, StructOpt)]
#[structopt(
    name = "email_setup_check",
    about = "Reports MX, SPF and DMARC presence for domains read from stdin"
)]
pub struct Config {
    /// Log level: error, warn, info, debug, trace
    #[structopt(long, default_value = "warn", possible_values = LogLevel::VARIANTS, case_insensitive = true)]
    pub log_level: LogLevel,

    /// Log format: plain or pretty
    #[structopt(long, default_value = "plain", possible_values = LogFormat::VARIANTS, case_insensitive = true)]
    pub log_format: LogFormat,

    /// Per-lookup timeout in seconds (default: resolver's own timeouts)
    #[structopt(long = "timeout")]
    pub timeout_seconds: Option<u64>,
}

impl Config {
    /// Per-lookup deadline, if one was requested.
    pub fn lookup_timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            timeout_seconds: None,
        }
    }
}
