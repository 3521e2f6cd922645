//! Dangling DNS Infrastructure Layer
pub mod dns;
pub mod http;
pub mod report;
pub mod system;
