use async_trait::async_trait;
use dangling_dns_application::ports::HttpProber;
use dangling_dns_domain::config::HttpProbeConfig;
use dangling_dns_domain::DomainError;
use reqwest::{redirect, StatusCode, Version};
use std::time::Duration;
use tracing::debug;

/// Sends one `HEAD {scheme}://{host}/` per probe, never following redirects.
pub struct ReqwestHttpProber {
    client: reqwest::Client,
    scheme: String,
}

impl ReqwestHttpProber {
    pub fn new(timeout: Duration, scheme: &str, user_agent: &str) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| DomainError::HttpRequest(e.to_string()))?;

        Ok(Self {
            client,
            scheme: scheme.to_string(),
        })
    }

    pub fn from_config(config: &HttpProbeConfig) -> Result<Self, DomainError> {
        Self::new(config.timeout(), &config.scheme, &config.user_agent)
    }

    fn probe_url(&self, host: &str) -> String {
        format!("{}://{}/", self.scheme, host)
    }
}

#[async_trait]
impl HttpProber for ReqwestHttpProber {
    async fn status_line(&self, host: &str) -> Result<String, DomainError> {
        let url = self.probe_url(host);
        debug!(url = %url, "Sending HEAD request");

        let response = self
            .client
            .head(&url)
            .send()
            .await
            .map_err(classify_error)?;

        Ok(format_status_line(response.version(), response.status()))
    }
}

/// Renders a status line the way curl prints it: HTTP/2 and later carry no
/// reason phrase.
pub fn format_status_line(version: Version, status: StatusCode) -> String {
    let version_str = if version == Version::HTTP_09 {
        "HTTP/0.9"
    } else if version == Version::HTTP_10 {
        "HTTP/1.0"
    } else if version == Version::HTTP_2 {
        return format!("HTTP/2 {}", status.as_u16());
    } else if version == Version::HTTP_3 {
        return format!("HTTP/3 {}", status.as_u16());
    } else {
        "HTTP/1.1"
    };

    match status.canonical_reason() {
        Some(reason) => format!("{} {} {}", version_str, status.as_u16(), reason),
        None => format!("{} {}", version_str, status.as_u16()),
    }
}

fn classify_error(e: reqwest::Error) -> DomainError {
    if e.is_timeout() {
        return DomainError::HttpTimeout;
    }
    if e.is_builder() {
        return DomainError::HttpRequest(e.to_string());
    }

    let kind = if e.is_connect() {
        "connect"
    } else if e.is_redirect() {
        "redirect"
    } else if e.is_body() {
        "body"
    } else if e.is_decode() {
        "decode"
    } else if e.is_request() {
        "request"
    } else {
        "transport"
    };
    debug!(error = %e, kind = kind, "HTTP transport failure");
    DomainError::HttpTransport(kind.to_string())
}
