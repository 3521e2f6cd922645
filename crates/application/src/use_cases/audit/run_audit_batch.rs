use super::AuditDomainUseCase;
use crate::ports::{AuditReportSink, AuditTargetSource};
use dangling_dns_domain::{BatchSummary, DomainError};
use std::sync::Arc;
use tracing::{info, info_span, Instrument};

/// Drives every row of a source through [`AuditDomainUseCase`] into a sink.
///
/// Rows are handled one at a time, in input order. Only source and sink
/// errors stop the run; lookup failures end up in the report cells.
pub struct RunAuditBatchUseCase {
    audit_domain: Arc<AuditDomainUseCase>,
}

impl RunAuditBatchUseCase {
    pub fn new(audit_domain: Arc<AuditDomainUseCase>) -> Self {
        Self { audit_domain }
    }

    pub async fn execute(
        &self,
        source: &mut dyn AuditTargetSource,
        sink: &mut dyn AuditReportSink,
    ) -> Result<BatchSummary, DomainError> {
        let mut summary = BatchSummary::default();

        while let Some(target) = source.next_target()? {
            let span = info_span!(
                "audit",
                row = summary.rows + 1,
                fqdn = target.fqdn.as_deref().unwrap_or("")
            );
            let report = self.audit_domain.execute(&target).instrument(span).await;

            sink.write_report(&report)?;
            summary.record(&report);
            info!(
                fqdn = report.fqdn.as_deref().unwrap_or(""),
                "Finished processing"
            );
        }

        sink.finish()?;

        info!(
            rows = summary.rows,
            resolved = summary.resolved,
            unresolved = summary.unresolved,
            with_address = summary.with_address,
            with_status_line = summary.with_status_line,
            "Batch complete"
        );

        Ok(summary)
    }
}
