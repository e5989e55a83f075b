//! thal-admin: terminal admin console for the Thal restaurant backend

use std::sync::Arc;

use clap::Parser;
use thal_admin::{AdminConfig, logger, tui};
use thal_client::AdminApi;

/// Thal admin console
#[derive(Parser, Debug)]
#[command(name = "thal-admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL (overrides THAL_API_URL)
    #[arg(long)]
    api_url: Option<String>,

    /// Request timeout in milliseconds (overrides THAL_REQUEST_TIMEOUT_MS)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Bearer token (overrides THAL_API_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Directory for rolling log files (overrides THAL_LOG_DIR)
    #[arg(long)]
    log_dir: Option<String>,

    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn apply(self, config: &mut AdminConfig) {
        if let Some(url) = self.api_url {
            config.api_url = url;
        }
        if let Some(ms) = self.timeout_ms {
            config.request_timeout_ms = ms;
        }
        if let Some(token) = self.token {
            config.api_token = Some(token);
        }
        if let Some(dir) = self.log_dir {
            config.log_dir = Some(dir);
        }
        match self.verbose {
            0 => {}
            1 => config.log_level = "debug".into(),
            _ => config.log_level = "trace".into(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    let mut config = AdminConfig::from_env();
    Cli::parse().apply(&mut config);

    let _guard = logger::init_logger(&config.log_level, config.log_dir.as_deref())?;
    tracing::info!(api = %config.api_url, timeout_ms = config.request_timeout_ms, "Starting thal-admin");

    let client_config = config.client_config();
    let api: Arc<dyn AdminApi> = Arc::new(client_config.build_http_client()?);

    tui::run(api, client_config).await?;

    tracing::info!("thal-admin stopped");
    Ok(())
}
