//! The MX, SPF and DMARC checks and their fan-out/join.

use std::future::Future;
use std::time::Duration;

use anyhow::Result;

use crate::check::types::{CheckOptions, DomainResult};
use crate::dns::{dmarc_domain, extract_dmarc_record, extract_spf_record, DnsLookup};
use crate::error_handling::{ErrorStats, ErrorType, LookupError};

/// Checks one domain for MX, SPF and DMARC records.
///
/// The three lookups are polled concurrently on the current task and the
/// result is only assembled once all of them have finished. Each check
/// produces its own slice of the result, so nothing is shared between them
/// except the atomic failure counters.
///
/// Never fails: lookup errors are logged at error level with the resolver's
/// message, counted in `stats`, and leave the affected fields false/empty.
pub async fn check_domain<L: DnsLookup>(
    lookup: &L,
    domain: &str,
    options: &CheckOptions,
    stats: &ErrorStats,
) -> DomainResult {
    let (has_mx, spf_record, dmarc_record) = tokio::join!(
        check_mx(lookup, domain, options, stats),
        check_spf(lookup, domain, options, stats),
        check_dmarc(lookup, domain, options, stats),
    );

    DomainResult::new(domain, has_mx, spf_record, dmarc_record)
}

async fn check_mx<L: DnsLookup>(
    lookup: &L,
    domain: &str,
    options: &CheckOptions,
    stats: &ErrorStats,
) -> bool {
    match with_timeout(options.lookup_timeout, lookup.lookup_mx(domain)).await {
        Ok(records) => !records.is_empty(),
        Err(e) => {
            record_failure(stats, ErrorType::DnsMxLookupError, &e);
            false
        }
    }
}

async fn check_spf<L: DnsLookup>(
    lookup: &L,
    domain: &str,
    options: &CheckOptions,
    stats: &ErrorStats,
) -> Option<String> {
    match with_timeout(options.lookup_timeout, lookup.lookup_txt(domain)).await {
        Ok(records) => extract_spf_record(&records).map(str::to_string),
        Err(e) => {
            record_failure(stats, ErrorType::DnsSpfLookupError, &e);
            None
        }
    }
}

async fn check_dmarc<L: DnsLookup>(
    lookup: &L,
    domain: &str,
    options: &CheckOptions,
    stats: &ErrorStats,
) -> Option<String> {
    let name = dmarc_domain(domain);
    match with_timeout(options.lookup_timeout, lookup.lookup_txt(&name)).await {
        Ok(records) => extract_dmarc_record(&records).map(str::to_string),
        Err(e) => {
            record_failure(stats, ErrorType::DnsDmarcLookupError, &e);
            None
        }
    }
}

async fn with_timeout<T>(
    limit: Option<Duration>,
    lookup: impl Future<Output = Result<T>>,
) -> Result<T> {
    match limit {
        Some(limit) => tokio::time::timeout(limit, lookup)
            .await
            .unwrap_or_else(|_| Err(LookupError::Timeout(limit).into())),
        None => lookup.await,
    }
}

fn record_failure(stats: &ErrorStats, check: ErrorType, error: &anyhow::Error) {
    log::error!("{error}");
    stats.increment_error(ErrorType::categorize(error, check));
}
