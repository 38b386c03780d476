//! SPF and DMARC record extraction.
//!
//! Matching is an exact, case-sensitive prefix test on the raw record text.
//! Records are not trimmed, so `" v=spf1 ..."` or `"V=SPF1 ..."` do not count.

use crate::config::{DMARC_LABEL, DMARC_PREFIX, SPF_PREFIX};

/// Returns the first TXT record that starts with `v=spf1`.
pub fn extract_spf_record(txt_records: &[String]) -> Option<&str> {
    first_with_prefix(txt_records, SPF_PREFIX)
}

/// Returns the first TXT record that starts with `v=DMARC1`.
///
/// The records are expected to come from [`dmarc_domain`], not the domain itself.
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<&str> {
    first_with_prefix(txt_records, DMARC_PREFIX)
}

/// Name holding the DMARC policy for `domain`: `_dmarc.<domain>`.
pub fn dmarc_domain(domain: &str) -> String {
    format!("{DMARC_LABEL}{domain}")
}

fn first_with_prefix<'a>(txt_records: &'a [String], prefix: &str) -> Option<&'a str> {
    txt_records
        .iter()
        .find(|txt| txt.starts_with(prefix))
        .map(String::as_str)
}
