use crate::ports::HttpProber;
use dangling_dns_domain::{normalize_domain, DomainError, HttpStatus};
use std::sync::Arc;
use tracing::{error, info};

pub struct ProbeHttpStatusUseCase {
    prober: Arc<dyn HttpProber>,
}

impl ProbeHttpStatusUseCase {
    pub fn new(prober: Arc<dyn HttpProber>) -> Self {
        Self { prober }
    }

    pub async fn execute(&self, domain: &str) -> HttpStatus {
        let domain = normalize_domain(domain);
        info!(domain = %domain, "Checking HTTP status");

        match self.prober.status_line(domain).await {
            Ok(line) => {
                info!(domain = %domain, status = %line, "HTTP status");
                HttpStatus::StatusLine(line)
            }
            Err(DomainError::HttpTimeout) => {
                error!(domain = %domain, "HTTP request timed out");
                HttpStatus::Timeout
            }
            Err(DomainError::HttpTransport(kind)) => {
                error!(domain = %domain, kind = %kind, "HTTP error");
                HttpStatus::Error(kind)
            }
            Err(e) => {
                error!(error = %e, domain = %domain, "HTTP check failed");
                HttpStatus::Failed
            }
        }
    }
}
