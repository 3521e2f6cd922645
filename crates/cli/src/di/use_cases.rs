use super::Adapters;
use dangling_dns_application::use_cases::{
    AuditDomainUseCase, ProbeHttpStatusUseCase, ResolveAddressUseCase, ResolveCnameChainUseCase,
    RunAuditBatchUseCase,
};
use dangling_dns_domain::Config;
use std::sync::Arc;

pub struct UseCases {
    pub run_audit_batch: Arc<RunAuditBatchUseCase>,
}

impl UseCases {
    pub fn new(config: &Config, adapters: &Adapters) -> Self {
        let resolve_chain = Arc::new(ResolveCnameChainUseCase::new(
            adapters.dns_lookup.clone(),
            config.batch.max_cname_depth,
        ));
        let resolve_address = Arc::new(ResolveAddressUseCase::new(adapters.dns_lookup.clone()));
        let probe_http = Arc::new(ProbeHttpStatusUseCase::new(adapters.http_prober.clone()));

        let audit_domain = Arc::new(AuditDomainUseCase::new(
            resolve_chain,
            resolve_address,
            probe_http,
        ));

        Self {
            run_audit_batch: Arc::new(RunAuditBatchUseCase::new(audit_domain)),
        }
    }
}
