// Shared test helpers: an in-memory DNS double and an output runner.
//
// Lookups for names that were never registered fail with a "no record found"
// message, like an NXDOMAIN from a real resolver.

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use email_setup_check::{check_stream, CheckOptions, CheckReport, DnsLookup};

/// Canned DNS answers keyed by query name.
#[derive(Default)]
pub struct StaticDns {
    mx: HashMap<String, Result<Vec<(u16, String)>, String>>,
    txt: HashMap<String, Result<Vec<String>, String>>,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl StaticDns {
    pub fn mx_count(mut self, domain: &str, count: u16) -> Self {
        let hosts = (0..count)
            .map(|i| (10 * (i + 1), format!("mx{i}.{domain}.")))
            .collect();
        self.mx.insert(domain.to_string(), Ok(hosts));
        self
    }

    pub fn mx_error(mut self, domain: &str, message: &str) -> Self {
        self.mx.insert(domain.to_string(), Err(message.to_string()));
        self
    }

    pub fn txt(mut self, name: &str, records: &[&str]) -> Self {
        let records = records.iter().map(|r| r.to_string()).collect();
        self.txt.insert(name.to_string(), Ok(records));
        self
    }

    pub fn txt_error(mut self, name: &str, message: &str) -> Self {
        self.txt.insert(name.to_string(), Err(message.to_string()));
        self
    }

    /// A domain with two MX hosts, an SPF policy and a DMARC policy.
    pub fn configured(self, domain: &str) -> Self {
        self.mx_count(domain, 2)
            .txt(domain, &["v=spf1 include:_spf.example.com ~all"])
            .txt(&format!("_dmarc.{domain}"), &["v=DMARC1; p=none"])
    }

    /// Every query issued so far, as `"<TYPE> <name>"`.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

impl DnsLookup for StaticDns {
    async fn lookup_mx(&self, domain: &str) -> Result<Vec<(u16, String)>> {
        self.queries.lock().unwrap().push(format!("MX {domain}"));
        match self.mx.get(domain) {
            Some(Ok(records)) => Ok(records.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no record found for {domain} MX")),
        }
    }

    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>> {
        self.queries.lock().unwrap().push(format!("TXT {domain}"));
        match self.txt.get(domain) {
            Some(Ok(records)) => Ok(records.clone()),
            Some(Err(message)) => Err(anyhow!("{message}")),
            None => Err(anyhow!("no record found for {domain} TXT")),
        }
    }
}

/// Runs `check_stream` over `input` and returns the report and stdout text.
#[allow(dead_code)]
pub async fn run(dns: &StaticDns, input: &[u8]) -> (CheckReport, String) {
    let mut output = Vec::new();
    let report = check_stream(dns, input, &mut output, &CheckOptions::default())
        .await
        .expect("check_stream should succeed");
    (report, String::from_utf8(output).expect("output is UTF-8"))
}

pub const HEADER: &str =
    "Domain, hasMX, hasSPF, sprRecord, hasDMARC, dmarcRecord, isValidEmailSetup\n";
