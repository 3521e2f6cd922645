//! Configuration module for Dangling DNS
//!
//! This module contains all configuration structures organized by concern:
//! - `root`: Main configuration and CLI overrides
//! - `batch`: Input/output paths and chain depth
//! - `dns`: Nameservers and query timeouts
//! - `http`: HTTP probe settings
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod batch;
pub mod dns;
pub mod errors;
pub mod http;
pub mod logging;
pub mod root;

pub use batch::BatchConfig;
pub use dns::DnsConfig;
pub use errors::ConfigError;
pub use http::HttpProbeConfig;
pub use logging::LoggingConfig;
pub use root::{CliOverrides, Config};
