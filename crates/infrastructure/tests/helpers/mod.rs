#![allow(dead_code)]

mod dns_server_mock;
mod http_server_mock;

pub use dns_server_mock::{MockDnsServer, MockZone, ServerMode};
pub use http_server_mock::MockHttpServer;
