use crate::use_cases::dns::{ResolveAddressUseCase, ResolveCnameChainUseCase};
use crate::use_cases::http::ProbeHttpStatusUseCase;
use dangling_dns_domain::{AuditReport, AuditTarget};
use std::sync::Arc;
use tracing::info;

/// Audits one row: chain, then address and HTTP status of the chain's end.
///
/// When the chain yields nothing usable the address and HTTP lookups are
/// skipped and the report carries the fixed placeholders.
pub struct AuditDomainUseCase {
    resolve_chain: Arc<ResolveCnameChainUseCase>,
    resolve_address: Arc<ResolveAddressUseCase>,
    probe_http: Arc<ProbeHttpStatusUseCase>,
}

impl AuditDomainUseCase {
    pub fn new(
        resolve_chain: Arc<ResolveCnameChainUseCase>,
        resolve_address: Arc<ResolveAddressUseCase>,
        probe_http: Arc<ProbeHttpStatusUseCase>,
    ) -> Self {
        Self {
            resolve_chain,
            resolve_address,
            probe_http,
        }
    }

    pub async fn execute(&self, target: &AuditTarget) -> AuditReport {
        info!(
            fqdn = target.fqdn.as_deref().unwrap_or(""),
            canonical_name = target.canonical_name.as_deref().unwrap_or(""),
            "Processing row"
        );

        let canonical_name = target.canonical_name.as_deref().unwrap_or("");
        let chain = self.resolve_chain.execute(canonical_name).await;

        let Some(terminal) = chain.usable_target().map(str::to_string) else {
            return AuditReport::unresolved(target, chain);
        };

        let address = self.resolve_address.execute(&terminal).await;
        let http_status = self.probe_http.execute(&terminal).await;

        AuditReport::resolved(target, chain, address, http_status)
    }
}
