use anyhow::Context;
use clap::Parser;
use dangling_dns_domain::CliOverrides;
use dangling_dns_infrastructure::report::{CsvAuditSource, CsvReportWriter};
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dangling-dns")]
#[command(version)]
#[command(about = "Dangling DNS - audit CNAME chains for takeover-prone targets")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Input CSV with FQDN* and Canonical_Name* columns
    #[arg(short = 'i', long, value_name = "FILE")]
    input: Option<String>,

    /// Output CSV report
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Maximum CNAME hops to follow
    #[arg(long)]
    max_depth: Option<usize>,

    /// HTTP probe timeout in seconds
    #[arg(long)]
    http_timeout: Option<u64>,

    /// Nameserver to query (IP, IP:PORT, udp://IP:PORT, tcp://IP:PORT); repeatable
    #[arg(long = "nameserver", value_name = "ADDR")]
    nameservers: Vec<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        input_path: cli.input.clone(),
        output_path: cli.output.clone(),
        max_cname_depth: cli.max_depth,
        http_timeout: cli.http_timeout,
        nameservers: cli.nameservers.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting Dangling DNS v{}", env!("CARGO_PKG_VERSION"));
    info!(
        config_file = cli.config.as_deref().unwrap_or("default"),
        input = %config.batch.input_path,
        output = %config.batch.output_path,
        max_cname_depth = config.batch.max_cname_depth,
        http_timeout_secs = config.http.timeout,
        "Configuration loaded"
    );

    let adapters = di::Adapters::new(&config).await?;
    let use_cases = di::UseCases::new(&config, &adapters);

    let mut source = CsvAuditSource::open(&config.batch.input_path)
        .context("Cannot open audit input")?;
    let mut sink = CsvReportWriter::create(&config.batch.output_path)
        .context("Cannot create audit report")?;

    let summary = match use_cases
        .run_audit_batch
        .execute(&mut source, &mut sink)
        .await
    {
        Ok(summary) => summary,
        Err(e) => {
            error!(error = %e, "Audit aborted");
            return Err(e.into());
        }
    };

    info!(
        rows = summary.rows,
        resolved = summary.resolved,
        unresolved = summary.unresolved,
        output = %config.batch.output_path,
        "Audit complete"
    );

    Ok(())
}
