//! Check options and the per-domain result.

use std::fmt;
use std::time::Duration;

/// Options shared by every domain in a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckOptions {
    /// Deadline for each individual lookup. `None` leaves timing entirely to
    /// the resolver, so a lookup that never answers stalls the run.
    pub lookup_timeout: Option<Duration>,
}

/// Outcome of checking one domain.
///
/// `spf_record` is non-empty exactly when `has_spf` is set, and likewise for
/// `dmarc_record`/`has_dmarc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainResult {
    pub domain: String,
    pub has_mx: bool,
    pub has_spf: bool,
    pub spf_record: String,
    pub has_dmarc: bool,
    pub dmarc_record: String,
}

impl DomainResult {
    /// Builds a result from the three independent check outcomes.
    pub fn new(
        domain: &str,
        has_mx: bool,
        spf_record: Option<String>,
        dmarc_record: Option<String>,
    ) -> Self {
        Self {
            domain: domain.to_string(),
            has_mx,
            has_spf: spf_record.is_some(),
            spf_record: spf_record.unwrap_or_default(),
            has_dmarc: dmarc_record.is_some(),
            dmarc_record: dmarc_record.unwrap_or_default(),
        }
    }

    /// MX, SPF and DMARC are all present.
    pub fn is_valid_email_setup(&self) -> bool {
        self.has_mx && self.has_spf && self.has_dmarc
    }
}

impl fmt::Display for DomainResult {
    /// Seven labeled lines, each terminated by a newline.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Domain: {}", self.domain)?;
        writeln!(f, "Has MX Records: {}", self.has_mx)?;
        writeln!(f, "Has SPF Record: {}", self.has_spf)?;
        writeln!(f, "SPF Record: {}", self.spf_record)?;
        writeln!(f, "Has DMARC Record: {}", self.has_dmarc)?;
        writeln!(f, "DMARC Record: {}", self.dmarc_record)?;
        writeln!(
            f,
            "Is Valid Email Setup: {}",
            if self.is_valid_email_setup() { "Yes" } else { "No" }
        )
    }
}
