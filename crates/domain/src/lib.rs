//! Dangling DNS Domain Layer
pub mod audit;
pub mod cname_chain;
pub mod config;
pub mod domain_name;
pub mod errors;
pub mod http_status;
pub mod nameserver;
pub mod record_type;

pub use audit::{AuditReport, AuditTarget, BatchSummary};
pub use cname_chain::CnameChain;
pub use config::{CliOverrides, Config, ConfigError};
pub use domain_name::normalize_domain;
pub use errors::DomainError;
pub use http_status::HttpStatus;
pub use nameserver::{Nameserver, NameserverProtocol};
pub use record_type::RecordType;
