//! UDP Transport for DNS queries (RFC 1035 §4.2.1)
//!
//! Messages are sent as-is (no framing). If the response has the TC
//! (truncated) bit set, the caller should ask again over TCP.

use super::{timeout_error, transport_error, DnsTransport, TransportResponse};
use async_trait::async_trait;
use dangling_dns_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size with EDNS(0)
const MAX_UDP_RESPONSE_SIZE: usize = 4096;

/// DNS over UDP transport
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server = self.server_addr;
        let bind_addr = if server.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes_sent = tokio::time::timeout(timeout, socket.send_to(message_bytes, server))
            .await
            .map_err(|_| timeout_error(server))?
            .map_err(|e| transport_error(server, e))?;

        debug!(server = %server, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];

        // Datagrams from other sources or with a foreign ID are dropped;
        // the timeout still bounds the whole wait.
        let received = tokio::time::timeout(timeout, async {
            loop {
                let (len, from_addr) = socket
                    .recv_from(&mut recv_buf)
                    .await
                    .map_err(|e| transport_error(server, e))?;

                if from_addr.ip() != server.ip() {
                    warn!(
                        expected = %server,
                        received_from = %from_addr,
                        "UDP response from unexpected source"
                    );
                    continue;
                }
                if let Err(e) = validate_response_id(message_bytes, &recv_buf[..len], server) {
                    warn!(error = %e, "Discarding UDP response");
                    continue;
                }
                return Ok::<usize, DomainError>(len);
            }
        })
        .await
        .map_err(|_| timeout_error(server))??;

        recv_buf.truncate(received);

        debug!(server = %server, bytes_received = received, "UDP response received");

        Ok(TransportResponse {
            bytes: recv_buf,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}

fn validate_response_id(
    query: &[u8],
    response: &[u8],
    server: SocketAddr,
) -> Result<(), DomainError> {
    if query.len() < 2 || response.len() < 2 {
        return Err(DomainError::InvalidDnsResponse(format!(
            "Message from {} too short to carry an ID",
            server
        )));
    }
    if query[..2] != response[..2] {
        return Err(DomainError::InvalidDnsResponse(format!(
            "ID mismatch in response from {}",
            server
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "udp_test.rs"]
mod tests;
