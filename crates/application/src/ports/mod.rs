mod audit_io;
mod dns_lookup;
mod http_prober;

pub use audit_io::{AuditReportSink, AuditTargetSource};
pub use dns_lookup::DnsRecordLookup;
pub use http_prober::HttpProber;

// Re-export for convenience
pub use dangling_dns_domain::RecordType;
