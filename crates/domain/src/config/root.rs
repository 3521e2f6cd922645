use serde::{Deserialize, Serialize};

use super::batch::BatchConfig;
use super::dns::DnsConfig;
use super::errors::ConfigError;
use super::http::HttpProbeConfig;
use super::logging::LoggingConfig;
use crate::nameserver::Nameserver;

/// Main configuration structure for Dangling DNS
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Input/output paths and chain depth
    #[serde(default)]
    pub batch: BatchConfig,

    /// Nameserver configuration
    #[serde(default)]
    pub dns: DnsConfig,

    /// HTTP probe configuration
    #[serde(default)]
    pub http: HttpProbeConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dangling-dns.toml in current directory
    /// 3. /etc/dangling-dns/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dangling-dns.toml").exists() {
            Self::from_file("dangling-dns.toml")?
        } else if std::path::Path::new("/etc/dangling-dns/config.toml").exists() {
            Self::from_file("/etc/dangling-dns/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a specific file
    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(input) = overrides.input_path {
            self.batch.input_path = input;
        }
        if let Some(output) = overrides.output_path {
            self.batch.output_path = output;
        }
        if let Some(depth) = overrides.max_cname_depth {
            self.batch.max_cname_depth = depth;
        }
        if let Some(timeout) = overrides.http_timeout {
            self.http.timeout = timeout;
        }
        if !overrides.nameservers.is_empty() {
            self.dns.nameservers = overrides.nameservers;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.batch.max_cname_depth == 0 {
            return Err(ConfigError::Validation(
                "max_cname_depth must be at least 1".to_string(),
            ));
        }

        if self.batch.input_path.is_empty() || self.batch.output_path.is_empty() {
            return Err(ConfigError::Validation(
                "Input and output paths cannot be empty".to_string(),
            ));
        }

        if self.dns.query_timeout == 0 {
            return Err(ConfigError::Validation(
                "DNS query timeout cannot be 0".to_string(),
            ));
        }

        if self.http.timeout == 0 {
            return Err(ConfigError::Validation(
                "HTTP timeout cannot be 0".to_string(),
            ));
        }

        if !matches!(self.http.scheme.as_str(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "Unsupported HTTP scheme '{}'",
                self.http.scheme
            )));
        }

        self.nameservers()?;

        Ok(())
    }

    /// Configured nameservers, parsed. Empty when the system ones should be used.
    pub fn nameservers(&self) -> Result<Vec<Nameserver>, ConfigError> {
        self.dns
            .nameservers
            .iter()
            .map(|s| s.parse::<Nameserver>().map_err(ConfigError::Validation))
            .collect()
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub input_path: Option<String>,
    pub output_path: Option<String>,
    pub max_cname_depth: Option<usize>,
    pub http_timeout: Option<u64>,
    pub nameservers: Vec<String>,
    pub log_level: Option<String>,
}
