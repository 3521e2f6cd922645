use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

/// Standard DNS port used when a nameserver is given without one.
pub const DEFAULT_DNS_PORT: u16 = 53;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameserverProtocol {
    /// UDP first, TCP only when the answer comes back truncated.
    #[default]
    Udp,

    /// Always TCP.
    Tcp,
}

/// A recursive nameserver the audit sends its queries to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Nameserver {
    pub addr: SocketAddr,
    pub protocol: NameserverProtocol,
}

impl Nameserver {
    pub fn udp(addr: SocketAddr) -> Self {
        Self {
            addr,
            protocol: NameserverProtocol::Udp,
        }
    }

    pub fn tcp(addr: SocketAddr) -> Self {
        Self {
            addr,
            protocol: NameserverProtocol::Tcp,
        }
    }
}

/// Accepts `IP`, `IP:PORT`, `[IPv6]:PORT` and bare IPv6.
fn parse_socket_addr(s: &str) -> Option<SocketAddr> {
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Some(addr);
    }
    let host = s
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .unwrap_or(s);
    host.parse::<IpAddr>()
        .ok()
        .map(|ip| SocketAddr::new(ip, DEFAULT_DNS_PORT))
}

impl FromStr for Nameserver {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(addr_str) = s.strip_prefix("udp://") {
            let addr = parse_socket_addr(addr_str)
                .ok_or_else(|| format!("Invalid UDP address '{}'", addr_str))?;
            return Ok(Nameserver::udp(addr));
        }
        if let Some(addr_str) = s.strip_prefix("tcp://") {
            let addr = parse_socket_addr(addr_str)
                .ok_or_else(|| format!("Invalid TCP address '{}'", addr_str))?;
            return Ok(Nameserver::tcp(addr));
        }
        parse_socket_addr(s).map(Nameserver::udp).ok_or_else(|| {
            format!(
                "Invalid nameserver format: '{}'. Expected: IP, IP:PORT, udp://IP:PORT or tcp://IP:PORT",
                s
            )
        })
    }
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.protocol {
            NameserverProtocol::Udp => write!(f, "udp://{}", self.addr),
            NameserverProtocol::Tcp => write!(f, "tcp://{}", self.addr),
        }
    }
}
