//! email_setup_check library: MX, SPF and DMARC presence checks
//!
//! This library reads domain names line by line and reports, for each one,
//! whether it publishes mail exchangers, an SPF policy and a DMARC policy.
//!
//! # Example
//!
//! ```no_run
//! use email_setup_check::{check_stream, CheckOptions};
//! use email_setup_check::initialization::init_resolver;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let resolver = init_resolver();
//! let input: &[u8] = b"example.com\nrust-lang.org\n";
//! let mut output = Vec::new();
//!
//! let report = check_stream(&resolver, input, &mut output, &CheckOptions::default()).await?;
//! println!("{} of {} domains are set up", report.valid_setups, report.domains_checked);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

mod app;
#[allow(missing_docs)]
pub mod check;
#[allow(missing_docs)]
pub mod config;
#[allow(missing_docs)]
pub mod dns;
#[allow(missing_docs)]
pub mod error_handling;
pub mod initialization;

// Re-export public API
pub use check::{check_domain, CheckOptions, DomainResult};
pub use config::{Config, LogFormat, LogLevel};
pub use dns::DnsLookup;
pub use run::{check_stream, run_check, CheckReport};

// Internal run module (contains the line reader / driver)
mod run {
    use std::io::Write;

    use anyhow::{Context, Result};
    use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

    use crate::app::{log_run_summary, print_error_statistics};
    use crate::check::{check_domain, CheckOptions};
    use crate::config::{Config, HEADER_LINE};
    use crate::dns::DnsLookup;
    use crate::error_handling::ErrorStats;
    use crate::initialization::init_resolver;

    /// Results of a checking run.
    #[derive(Debug, Clone, PartialEq)]
    pub struct CheckReport {
        /// Number of domains checked
        pub domains_checked: usize,
        /// Number of domains with MX, SPF and DMARC all present
        pub valid_setups: usize,
        /// Number of lookups that failed (across all checks)
        pub lookup_failures: usize,
        /// Elapsed time in seconds
        pub elapsed_seconds: f64,
    }

    /// Checks every domain read from stdin and writes the report to stdout.
    ///
    /// Uses the system DNS resolver. See [`check_stream`] for the line handling
    /// and output format.
    ///
    /// # Errors
    ///
    /// Fails if stdin cannot be read (the error chain starts with
    /// `could not read from input`) or stdout cannot be written.
    pub async fn run_check(config: Config) -> Result<CheckReport> {
        let resolver = init_resolver();
        let options = CheckOptions {
            lookup_timeout: config.lookup_timeout(),
        };
        if let Some(limit) = options.lookup_timeout {
            log::debug!("Per-lookup timeout: {limit:?}");
        }

        let input = BufReader::new(tokio::io::stdin());
        let mut output = std::io::stdout().lock();

        let report = check_stream(&resolver, input, &mut output, &options).await?;
        log_run_summary(&report);
        Ok(report)
    }

    /// Checks each domain in `input` and writes the report to `output`.
    ///
    /// Writes the header line first, then reads one line at a time. Each line
    /// is trimmed; empty lines are skipped, anything else is checked as a
    /// domain name. The driver waits for a domain's three lookups
    /// and writes its block (a blank line, then the labeled lines) before it
    /// reads the next line, so blocks appear in input order.
    ///
    /// Failed lookups are not errors here; they only show up as `false` in the
    /// block and as `Error:` lines in the log.
    ///
    /// # Errors
    ///
    /// Returns an error if a line cannot be read (e.g. invalid UTF-8) or the
    /// output cannot be written. Blocks already written stay written.
    pub async fn check_stream<L, R, W>(
        lookup: &L,
        input: R,
        output: &mut W,
        options: &CheckOptions,
    ) -> Result<CheckReport>
    where
        L: DnsLookup,
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let start_time = std::time::Instant::now();
        let error_stats = ErrorStats::new();
        let mut domains_checked = 0usize;
        let mut valid_setups = 0usize;

        writeln!(output, "{HEADER_LINE}").context("could not write to output")?;
        output.flush().context("could not write to output")?;

        let mut lines = input.lines();
        while let Some(line) = lines
            .next_line()
            .await
            .context("could not read from input")?
        {
            let domain = line.trim();
            if domain.is_empty() {
                continue;
            }

            let result = check_domain(lookup, domain, options, &error_stats).await;
            domains_checked += 1;
            if result.is_valid_email_setup() {
                valid_setups += 1;
            }

            write!(output, "\n{result}").context("could not write to output")?;
            output.flush().context("could not write to output")?;
        }

        print_error_statistics(&error_stats);

        Ok(CheckReport {
            domains_checked,
            valid_setups,
            lookup_failures: error_stats.total_errors(),
            elapsed_seconds: start_time.elapsed().as_secs_f64(),
        })
    }
}
