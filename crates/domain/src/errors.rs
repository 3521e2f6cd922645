use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid nameserver address: {0}")]
    InvalidNameserver(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Query timeout")]
    QueryTimeout,

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport error talking to {server}: {reason}")]
    TransportError { server: String, reason: String },

    #[error("No nameservers available")]
    NoNameservers,

    #[error("All nameservers are unreachable")]
    AllNameserversUnreachable,

    #[error("HTTP request timed out")]
    HttpTimeout,

    #[error("HTTP transport error: {0}")]
    HttpTransport(String),

    #[error("HTTP request could not be made: {0}")]
    HttpRequest(String),

    #[error("Failed to read audit input {path}: {reason}")]
    InputRead { path: String, reason: String },

    #[error("Failed to write audit report {path}: {reason}")]
    OutputWrite { path: String, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    /// Failures where asking another nameserver might still produce an answer.
    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::QueryTimeout
                | DomainError::TransportTimeout { .. }
                | DomainError::TransportError { .. }
        )
    }
}
