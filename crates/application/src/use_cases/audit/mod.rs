mod audit_domain;
mod run_audit_batch;

pub use audit_domain::AuditDomainUseCase;
pub use run_audit_batch::RunAuditBatchUseCase;
