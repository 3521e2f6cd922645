use crate::ports::DnsRecordLookup;
use dangling_dns_domain::{normalize_domain, RecordType};
use std::sync::Arc;
use tracing::{info, warn};

pub struct ResolveAddressUseCase {
    lookup: Arc<dyn DnsRecordLookup>,
}

impl ResolveAddressUseCase {
    pub fn new(lookup: Arc<dyn DnsRecordLookup>) -> Self {
        Self { lookup }
    }

    /// First A record of `domain`, if any. One query, no retries.
    pub async fn execute(&self, domain: &str) -> Option<String> {
        let domain = normalize_domain(domain);
        info!(domain = %domain, "Resolving IP");

        match self.lookup.lookup(domain, RecordType::A).await {
            Ok(answers) => {
                let first = answers.into_iter().next();
                match &first {
                    Some(ip) => info!(domain = %domain, ip = %ip, "A record found"),
                    None => info!(domain = %domain, "No A record"),
                }
                first
            }
            Err(e) => {
                warn!(error = %e, domain = %domain, "A lookup failed");
                None
            }
        }
    }
}
