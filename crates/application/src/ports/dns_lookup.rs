use async_trait::async_trait;
use dangling_dns_domain::{DomainError, RecordType};

#[async_trait]
pub trait DnsRecordLookup: Send + Sync {
    /// Answers of `record_type` for `domain`, in presentation form and in
    /// answer-section order (CNAME targets keep their trailing dot).
    ///
    /// An empty vector means the name exists but holds no such record, or
    /// does not exist at all. Errors are transport or protocol failures.
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError>;
}
