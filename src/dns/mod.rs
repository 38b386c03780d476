//! DNS record queries and SPF/DMARC extraction.
//!
//! This module provides async DNS operations using `trust-dns-resolver`:
//! - Mail exchanger queries (MX records)
//! - Text record queries (TXT records) with SPF/DMARC extraction
//!
//! The checker only talks to DNS through [`DnsLookup`], so tests can swap in
//! canned answers.

mod extract;
mod lookup;
mod records;

// Re-export public API
pub use extract::{dmarc_domain, extract_dmarc_record, extract_spf_record};
pub use lookup::DnsLookup;
pub use records::{lookup_mx_records, lookup_txt_records};
