//! DNS resolver initialization.

use trust_dns_resolver::config::{ResolverConfig, ResolverOpts};
use trust_dns_resolver::TokioAsyncResolver;

/// Initializes the DNS resolver used for MX and TXT lookups.
///
/// Uses the operating system's resolver configuration (`/etc/resolv.conf` on
/// Unix) with its timeouts and retry counts left untouched. If the system
/// configuration cannot be read, falls back to the resolver crate's default
/// upstream servers and logs a warning.
pub fn init_resolver() -> TokioAsyncResolver {
    match TokioAsyncResolver::tokio_from_system_conf() {
        Ok(resolver) => resolver,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration ({e}); using default resolvers");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        }
    }
}
