use dangling_dns_domain::{DomainError, Nameserver};
use std::str::FromStr;
use tokio::fs;
use tracing::{debug, warn};

/// Reads the system resolver's nameservers from resolv.conf
pub struct ResolvConfReader {
    path: String,
}

impl ResolvConfReader {
    pub fn new() -> Self {
        Self {
            path: "/etc/resolv.conf".to_string(),
        }
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub async fn read_nameservers(&self) -> Result<Vec<Nameserver>, DomainError> {
        let content = fs::read_to_string(&self.path).await.map_err(|e| {
            DomainError::IoError(format!("Failed to read {}: {}", self.path, e))
        })?;

        let nameservers = parse_resolv_conf(&content);
        debug!(path = %self.path, nameservers = nameservers.len(), "resolv.conf parsed");
        Ok(nameservers)
    }
}

impl Default for ResolvConfReader {
    fn default() -> Self {
        Self::new()
    }
}

/// `nameserver <ip>` lines, in file order. Scoped IPv6 addresses
/// (`fe80::1%eth0`) and anything unparsable are skipped.
pub fn parse_resolv_conf(content: &str) -> Vec<Nameserver> {
    let mut nameservers = Vec::new();

    for line in content.lines() {
        let line = line.trim();
        if line.starts_with('#') || line.starts_with(';') {
            continue;
        }

        let mut fields = line.split_whitespace();
        if fields.next() != Some("nameserver") {
            continue;
        }
        let Some(addr) = fields.next() else {
            continue;
        };

        match Nameserver::from_str(addr) {
            Ok(ns) => nameservers.push(ns),
            Err(e) => warn!(error = %e, entry = addr, "Skipping resolv.conf nameserver"),
        }
    }

    nameservers
}
