//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.

use std::io::{self, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use log::{Level, LevelFilter, Record};

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` (writing to stderr) with custom formatting.
///
/// The logger reads from the `RUST_LOG` environment variable by default, but
/// the provided `level` parameter will override it.
///
/// # Arguments
///
/// * `level` - Minimum log level to display (overrides `RUST_LOG` if set)
/// * `format` - Log format (Plain or Pretty)
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Failed lookups only, as "Error: <message>" lines
/// email_setup_check < domains.txt
///
/// # Per-domain lookup details with timestamps and colors
/// email_setup_check --log-level debug --log-format pretty < domains.txt
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    let mut builder = env_logger::Builder::from_default_env();

    // Override with CLI-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    // Resolver internals log malformed/truncated responses they already recover from
    builder.filter_module("trust_dns_proto", LevelFilter::Error);
    builder.filter_module("trust_dns_resolver", LevelFilter::Error);
    builder.filter_module("email_setup_check", level);

    match format {
        LogFormat::Plain => {
            builder.format(|buf, record| format_plain(buf, record));
        }
        LogFormat::Pretty => {
            colored::control::set_override(true);
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    Level::Error => level.to_string().red(),
                    Level::Warn => level.to_string().yellow(),
                    Level::Info => level.to_string().green(),
                    Level::Debug => level.to_string().blue(),
                    Level::Trace => level.to_string().purple(),
                };

                let emoji = match level {
                    Level::Error => "❌",
                    Level::Warn => "⚠️",
                    Level::Info => "✔️",
                    Level::Debug => "🔍",
                    Level::Trace => "🔬",
                };

                writeln!(
                    buf,
                    "{} {} {} [{}] {}",
                    chrono::Local::now().format("%Y/%m/%d %H:%M:%S"),
                    emoji,
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    // try_init() rather than init(): tests may initialize the logger more than once
    builder.try_init().map_err(InitializationError::from)?;

    Ok(())
}

/// Writes `record` in the plain format: `<Level>: <message>` and a newline.
///
/// A failed lookup is logged at error level with the resolver's message, so it
/// renders as `Error: <message>`.
pub fn format_plain<W: Write + ?Sized>(buf: &mut W, record: &Record) -> io::Result<()> {
    writeln!(buf, "{}: {}", plain_label(record.level()), record.args())
}

fn plain_label(level: Level) -> &'static str {
    match level {
        Level::Error => "Error",
        Level::Warn => "Warning",
        Level::Info => "Info",
        Level::Debug => "Debug",
        Level::Trace => "Trace",
    }
}
