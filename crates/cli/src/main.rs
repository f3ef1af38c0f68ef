use clap::Parser;
use nslookup_application::use_cases::{LookupRequest, QueryMode};
use nslookup_domain::CliOverrides;
use std::io::Write;
use tracing::{debug, error};

mod bootstrap;
mod di;
mod output;

#[derive(Parser)]
#[command(name = "nslookup-rs")]
#[command(version)]
#[command(about = "Query a DNS server and print the answer nslookup-style")]
struct Cli {
    /// Domain name or IPv4 address to look up
    name: String,

    /// DNS server to query (defaults to the first nameserver in resolv.conf)
    #[arg(short = 's', long, alias = "dns-ip", value_name = "IP")]
    server: Option<String>,

    /// Query type: default, any, or a record type such as MX
    #[arg(short = 't', long = "type", alias = "rtype", value_name = "TYPE")]
    record_type: Option<String>,

    /// DNS server port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Seconds to wait for each reply
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Clear the recursion-desired flag
    #[arg(long)]
    no_recurse: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        port: cli.port,
        timeout_secs: cli.timeout,
        recursion_desired: cli.no_recurse.then_some(false),
        record_type: cli.record_type.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    debug!("nslookup-rs v{}", env!("CARGO_PKG_VERSION"));

    let server = bootstrap::resolve_server(&config).await?;
    let services = di::LookupServices::new(&config, server);

    let request = LookupRequest::new(&cli.name, QueryMode::parse(&config.query.default_type))
        .with_recursion(config.query.recursion_desired);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    output::write_banner(&mut out, server)?;

    match services.lookup.execute(&request).await {
        Ok(reports) => {
            for report in &reports {
                output::write_report(&mut out, report)?;
            }
            out.flush()?;
            Ok(())
        }
        Err(e) => {
            out.flush()?;
            error!(server = %server, error = %e, "Lookup aborted");
            Err(e.into())
        }
    }
}
