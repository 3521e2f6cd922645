//! Dangling DNS Application Layer
//!
//! Ports describe what the audit needs from the outside world (DNS answers,
//! HTTP status lines, rows in and out); use cases drive them.
pub mod ports;
pub mod use_cases;
