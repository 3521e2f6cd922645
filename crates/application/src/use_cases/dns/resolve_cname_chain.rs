use crate::ports::DnsRecordLookup;
use dangling_dns_domain::{normalize_domain, CnameChain, RecordType};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Follows CNAME records from a starting name until a name without one.
///
/// A name without a CNAME record is taken as the terminal answer; whether it
/// actually holds an address is left to the address lookup. Lookup failures
/// terminate the chain the same way an absent record does.
pub struct ResolveCnameChainUseCase {
    lookup: Arc<dyn DnsRecordLookup>,
    max_depth: usize,
}

impl ResolveCnameChainUseCase {
    pub fn new(lookup: Arc<dyn DnsRecordLookup>, max_depth: usize) -> Self {
        Self { lookup, max_depth }
    }

    /// Issues at most `max_depth` CNAME queries. A name still aliased when
    /// they are spent makes the chain `TooLong`, so a chain of `L` names
    /// resolves only when `L <= max_depth`.
    pub async fn execute(&self, domain: &str) -> CnameChain {
        let mut current = normalize_domain(domain).to_string();

        for hops in 0..self.max_depth {
            if current.is_empty() {
                debug!(hops, "Empty name in chain, nothing to resolve");
                return CnameChain::resolved(current, hops);
            }

            info!(domain = %current, depth = hops + 1, "Resolving CNAME");

            let next = match self.lookup.lookup(&current, RecordType::CNAME).await {
                Ok(answers) => answers
                    .first()
                    .map(|answer| normalize_domain(answer).to_string()),
                Err(e) => {
                    warn!(error = %e, domain = %current, "CNAME lookup failed");
                    None
                }
            };

            match next {
                Some(target) => {
                    debug!(from = %current, to = %target, "Following CNAME");
                    current = target;
                }
                None => {
                    info!(domain = %current, hops, "No further CNAME found");
                    return CnameChain::resolved(current, hops);
                }
            }
        }

        warn!(
            domain = %normalize_domain(domain),
            max_depth = self.max_depth,
            "CNAME chain exceeded max depth"
        );
        CnameChain::TooLong {
            max_depth: self.max_depth,
        }
    }
}
