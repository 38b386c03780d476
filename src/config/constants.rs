//! Output labels and record markers.

/// Header line written once before any input is read.
///
/// The per-domain output below it is a labeled block, not CSV. The column
/// names (including `sprRecord`) are kept as-is so existing consumers keep
/// matching on them.
pub const HEADER_LINE: &str =
    "Domain, hasMX, hasSPF, sprRecord, hasDMARC, dmarcRecord, isValidEmailSetup";

/// Literal prefix identifying an SPF policy in a TXT record (case-sensitive).
pub const SPF_PREFIX: &str = "v=spf1";

/// Literal prefix identifying a DMARC policy in a TXT record (case-sensitive).
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Label prepended to a domain to locate its DMARC policy.
pub const DMARC_LABEL: &str = "_dmarc.";
