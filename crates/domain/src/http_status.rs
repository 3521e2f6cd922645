use std::fmt;

/// Result of probing a host over HTTP, rendered straight into the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpStatus {
    /// First response line, e.g. `HTTP/1.1 200 OK`.
    StatusLine(String),

    /// No response within the probe timeout.
    Timeout,

    /// The request went out but the exchange failed (connect, TLS, protocol).
    Error(String),

    /// The probe could not be attempted at all.
    Failed,
}

impl HttpStatus {
    pub fn is_status_line(&self) -> bool {
        matches!(self, Self::StatusLine(_))
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StatusLine(line) => f.write_str(line),
            Self::Timeout => f.write_str("Timeout"),
            Self::Error(kind) => write!(f, "HTTP error {}", kind),
            Self::Failed => f.write_str("HTTP check failed"),
        }
    }
}
