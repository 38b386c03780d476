//! DNS record queries (TXT, MX).
//!
//! Every resolver failure is returned as an error, including "no records
//! found" and NXDOMAIN. The checker treats all of them the same way: log the
//! message and report the record as absent.

use anyhow::{Error, Result};
use trust_dns_resolver::TokioAsyncResolver;

/// Queries TXT (text) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// One string per TXT record, in resolver order. A record split into several
/// character strings is joined back together without separators.
pub async fn lookup_txt_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, Error> {
    let lookup = resolver.txt_lookup(domain).await.map_err(Error::new)?;
    let txt_records: Vec<String> = lookup
        .iter()
        .map(|txt| {
            txt.iter()
                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                .collect::<Vec<String>>()
                .join("")
        })
        .collect();
    log::debug!("{} TXT record(s) for {domain}", txt_records.len());
    Ok(txt_records)
}

/// Queries MX (mail exchanger) records for a domain.
///
/// # Arguments
///
/// * `domain` - The domain to query
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of (priority, hostname) tuples, sorted by priority (lower = higher priority).
pub async fn lookup_mx_records(
    domain: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<(u16, String)>, Error> {
    let lookup = resolver.mx_lookup(domain).await.map_err(Error::new)?;
    let mut mx_records: Vec<(u16, String)> = lookup
        .iter()
        .map(|mx| (mx.preference(), mx.exchange().to_utf8()))
        .collect();
    mx_records.sort_by_key(|(priority, _)| *priority);
    log::debug!("MX records for {domain}: {mx_records:?}");
    Ok(mx_records)
}
