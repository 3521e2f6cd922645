use dangling_dns_domain::{AuditReport, AuditTarget, DomainError};

/// Row-by-row supplier of audit targets.
pub trait AuditTargetSource {
    /// Next row, or `None` once the input is exhausted.
    fn next_target(&mut self) -> Result<Option<AuditTarget>, DomainError>;
}

/// Row-by-row consumer of audit reports.
pub trait AuditReportSink {
    fn write_report(&mut self, report: &AuditReport) -> Result<(), DomainError>;

    /// Flushes anything buffered. Called once after the last row.
    fn finish(&mut self) -> Result<(), DomainError>;
}
