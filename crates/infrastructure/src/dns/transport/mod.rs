pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use dangling_dns_domain::{DomainError, NameserverProtocol};
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

/// One query, one response, over a socket opened for that query alone.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }
}

pub fn create_transport(protocol: NameserverProtocol, addr: SocketAddr) -> Transport {
    match protocol {
        NameserverProtocol::Udp => Transport::Udp(udp::UdpTransport::new(addr)),
        NameserverProtocol::Tcp => Transport::Tcp(tcp::TcpTransport::new(addr)),
    }
}

fn timeout_error(server: SocketAddr) -> DomainError {
    DomainError::TransportTimeout {
        server: server.to_string(),
    }
}

fn transport_error(server: SocketAddr, reason: impl std::fmt::Display) -> DomainError {
    DomainError::TransportError {
        server: server.to_string(),
        reason: reason.to_string(),
    }
}
