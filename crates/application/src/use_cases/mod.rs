pub mod audit;
pub mod dns;
pub mod http;

// Re-export use cases
pub use audit::{AuditDomainUseCase, RunAuditBatchUseCase};
pub use dns::{ResolveAddressUseCase, ResolveCnameChainUseCase};
pub use http::ProbeHttpStatusUseCase;
