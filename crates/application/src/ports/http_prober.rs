use async_trait::async_trait;
use dangling_dns_domain::DomainError;

#[async_trait]
pub trait HttpProber: Send + Sync {
    /// Sends one HEAD request to `host` and returns the response status line.
    ///
    /// Fails with `HttpTimeout`, `HttpTransport` (exchange failed) or
    /// `HttpRequest` (request could not be built or sent).
    async fn status_line(&self, host: &str) -> Result<String, DomainError>;
}
