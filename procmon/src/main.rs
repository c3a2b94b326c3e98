use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use procmon::{init::init_tracing, web, ServiceConfig};

#[derive(Parser)]
#[command(name = "procmon")]
#[command(about = "HTTP API for listing, sampling and terminating host processes")]
struct Cli {
    /// Path to procmon.toml (searched for when omitted)
    #[arg(long, short)]
    config: Option<PathBuf>,

    /// Address to listen on
    #[arg(long, env = "PROCMON_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(long, short, env = "PROCMON_PORT")]
    port: Option<u16>,

    /// CPU sampling window for /api/usage, in milliseconds
    #[arg(long, env = "PROCMON_SAMPLE_MS")]
    sample_ms: Option<u64>,

    /// Upper bound on any single OS query, in seconds
    #[arg(long, env = "PROCMON_OS_TIMEOUT_SECS")]
    os_timeout_secs: Option<u64>,

    /// Report termination failures with HTTP 200 and an error body
    #[arg(long, env = "PROCMON_LEGACY_STATUS")]
    legacy_status_codes: bool,
}

impl Cli {
    fn apply(self, mut config: ServiceConfig) -> ServiceConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(ms) = self.sample_ms {
            config.sample_window_ms = ms;
        }
        if let Some(secs) = self.os_timeout_secs {
            config.os_timeout_secs = secs;
        }
        config.legacy_status_codes |= self.legacy_status_codes;
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing("procmon")?;

    let cli = Cli::parse();
    let config = ServiceConfig::load(cli.config.as_deref())?;
    let config = cli.apply(config);
    config.validate()?;

    tracing::debug!(?config, "Resolved configuration");
    web::serve(config).await
}
