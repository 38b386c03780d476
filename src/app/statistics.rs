//! End-of-run statistics.
//!
//! Everything here logs at info level, so it stays on stderr and is hidden at
//! the default `warn` level.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{ErrorStats, ErrorType};
use crate::CheckReport;

/// Logs the number of failed lookups per category, if there were any.
pub fn print_error_statistics(error_stats: &ErrorStats) {
    let total_errors = error_stats.total_errors();
    if total_errors == 0 {
        return;
    }

    info!("Lookup failures ({} total):", total_errors);
    for error_type in ErrorType::iter() {
        let count = error_stats.get_error_count(error_type);
        if count > 0 {
            info!("   {}: {}", error_type.as_str(), count);
        }
    }
}

/// Logs a one-line summary of a completed run.
pub fn log_run_summary(report: &CheckReport) {
    info!(
        "Checked {} domain{} in {:.1}s: {} with a valid email setup, {} failed lookup{}",
        report.domains_checked,
        if report.domains_checked == 1 { "" } else { "s" },
        report.elapsed_seconds,
        report.valid_setups,
        report.lookup_failures,
        if report.lookup_failures == 1 { "" } else { "s" },
    );
}
