use super::forwarding::{DnsResponse, MessageBuilder, ResponseParser};
use super::transport::{self, Transport};
use async_trait::async_trait;
use dangling_dns_application::ports::DnsRecordLookup;
use dangling_dns_domain::{DomainError, Nameserver, NameserverProtocol, RecordType};
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// Asks recursive nameservers directly with wire-format queries.
///
/// Nameservers are tried in order. The next one is asked only when the
/// previous one failed at the transport level; any answer, including
/// NXDOMAIN, ends the lookup.
pub struct WireDnsLookup {
    nameservers: Vec<Nameserver>,
    timeout: Duration,
    tcp_fallback: bool,
}

impl WireDnsLookup {
    pub fn new(nameservers: Vec<Nameserver>, timeout: Duration) -> Self {
        Self {
            nameservers,
            timeout,
            tcp_fallback: true,
        }
    }

    /// Whether a truncated UDP answer is asked again over TCP.
    pub fn with_tcp_fallback(mut self, enabled: bool) -> Self {
        self.tcp_fallback = enabled;
        self
    }

    async fn query_server(
        &self,
        nameserver: &Nameserver,
        domain: &str,
        record_type: RecordType,
    ) -> Result<DnsResponse, DomainError> {
        let start = Instant::now();
        let (id, query_bytes) = MessageBuilder::build_query(domain, &record_type)?;

        let dns_transport = transport::create_transport(nameserver.protocol, nameserver.addr);
        let response =
            Self::exchange(&dns_transport, &query_bytes, id, record_type, self.timeout).await?;

        if response.truncated
            && self.tcp_fallback
            && nameserver.protocol == NameserverProtocol::Udp
        {
            debug!(
                server = %nameserver.addr,
                "Response truncated (TC bit), asking again via TCP"
            );

            let tcp_transport =
                transport::create_transport(NameserverProtocol::Tcp, nameserver.addr);
            let remaining = self
                .timeout
                .checked_sub(start.elapsed())
                .unwrap_or(Duration::from_millis(500));

            return Self::exchange(&tcp_transport, &query_bytes, id, record_type, remaining).await;
        }

        Ok(response)
    }

    async fn exchange(
        dns_transport: &Transport,
        query_bytes: &[u8],
        id: u16,
        record_type: RecordType,
        timeout: Duration,
    ) -> Result<DnsResponse, DomainError> {
        let transport_response = dns_transport.send(query_bytes, timeout).await?;
        let response = ResponseParser::parse(&transport_response.bytes, record_type)?;

        if response.id != id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "{} response ID {} does not match query ID {}",
                transport_response.protocol_used, response.id, id
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl DnsRecordLookup for WireDnsLookup {
    async fn lookup(
        &self,
        domain: &str,
        record_type: RecordType,
    ) -> Result<Vec<String>, DomainError> {
        if self.nameservers.is_empty() {
            return Err(DomainError::NoNameservers);
        }

        for (index, nameserver) in self.nameservers.iter().enumerate() {
            match self.query_server(nameserver, domain, record_type).await {
                Ok(response) => {
                    debug!(
                        server = %nameserver,
                        domain = %domain,
                        record_type = %record_type,
                        rcode = ResponseParser::rcode_to_status(response.rcode),
                        answers = response.answers.len(),
                        "Nameserver responded"
                    );

                    if response.is_server_error() {
                        return Err(DomainError::InvalidDnsResponse(format!(
                            "{} from {}",
                            ResponseParser::rcode_to_status(response.rcode),
                            nameserver
                        )));
                    }
                    if response.is_nxdomain() {
                        return Ok(Vec::new());
                    }
                    return Ok(response.answers);
                }
                Err(e) if e.is_transport_error() => {
                    warn!(server = %nameserver, error = %e, position = index, "Failing over");
                }
                Err(e) => return Err(e),
            }
        }

        Err(DomainError::AllNameserversUnreachable)
    }
}
