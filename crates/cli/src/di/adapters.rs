use dangling_dns_domain::Config;
use dangling_dns_infrastructure::dns::WireDnsLookup;
use dangling_dns_infrastructure::http::ReqwestHttpProber;
use dangling_dns_infrastructure::system::ResolvConfReader;
use std::sync::Arc;
use tracing::info;

pub struct Adapters {
    pub dns_lookup: Arc<WireDnsLookup>,
    pub http_prober: Arc<ReqwestHttpProber>,
}

impl Adapters {
    pub async fn new(config: &Config) -> anyhow::Result<Self> {
        let mut nameservers = config.nameservers()?;
        let source = if nameservers.is_empty() {
            nameservers = ResolvConfReader::new().read_nameservers().await?;
            "resolv.conf"
        } else {
            "config"
        };

        if nameservers.is_empty() {
            anyhow::bail!("No nameservers configured and none found in the system resolv.conf");
        }

        info!(
            source = source,
            nameservers = %nameservers
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(","),
            query_timeout_ms = config.dns.query_timeout,
            tcp_fallback = config.dns.tcp_fallback,
            "Nameservers selected"
        );

        let dns_lookup = WireDnsLookup::new(nameservers, config.dns.query_timeout())
            .with_tcp_fallback(config.dns.tcp_fallback);
        let http_prober = ReqwestHttpProber::from_config(&config.http)?;

        Ok(Self {
            dns_lookup: Arc::new(dns_lookup),
            http_prober: Arc::new(http_prober),
        })
    }
}
