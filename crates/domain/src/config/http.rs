use serde::{Deserialize, Serialize};
use std::time::Duration;

/// HTTP status probe configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpProbeConfig {
    /// Probe timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Scheme used to build the probe URL: "http" or "https" (default: "http")
    #[serde(default = "default_scheme")]
    pub scheme: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl HttpProbeConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for HttpProbeConfig {
    fn default() -> Self {
        Self {
            timeout: default_timeout(),
            scheme: default_scheme(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_timeout() -> u64 {
    10
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_user_agent() -> String {
    concat!("dangling-dns/", env!("CARGO_PKG_VERSION")).to_string()
}
