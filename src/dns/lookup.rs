//! The name-resolution seam used by the checker.

use std::future::Future;

use anyhow::Result;
use trust_dns_resolver::TokioAsyncResolver;

use super::records::{lookup_mx_records, lookup_txt_records};

/// Resolves the two record types the checker needs.
///
/// Errors carry the resolver's own message; callers log it verbatim.
pub trait DnsLookup {
    /// MX records as `(preference, exchange)` pairs.
    fn lookup_mx(&self, domain: &str) -> impl Future<Output = Result<Vec<(u16, String)>>>;

    /// TXT records in the order the resolver returned them.
    fn lookup_txt(&self, domain: &str) -> impl Future<Output = Result<Vec<String>>>;
}

impl DnsLookup for TokioAsyncResolver {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<(u16, String)>> {
        lookup_mx_records(domain, self).await
    }

    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        lookup_txt_records(domain, self).await
    }
}
