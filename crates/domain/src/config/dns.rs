use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DnsConfig {
    /// Recursive nameservers, tried in order. Empty means the system resolv.conf.
    #[serde(default)]
    pub nameservers: Vec<String>,

    /// Per-query timeout in milliseconds (default: 5000)
    #[serde(default = "default_query_timeout")]
    pub query_timeout: u64,

    /// Re-ask over TCP when a UDP answer is truncated (default: true)
    #[serde(default = "default_true")]
    pub tcp_fallback: bool,
}

impl DnsConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout)
    }
}

impl Default for DnsConfig {
    fn default() -> Self {
        Self {
            nameservers: Vec::new(),
            query_timeout: default_query_timeout(),
            tcp_fallback: default_true(),
        }
    }
}

fn default_query_timeout() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}
