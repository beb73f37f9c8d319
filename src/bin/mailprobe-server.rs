use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use trust_dns_resolver::TokioAsyncResolver;

use mailprobe::http::{AppState, router};
use mailprobe::{ServerConfig, StagePlan};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ServerConfig::from_env().context("read configuration from environment")?;
    if config.api_token.is_none() {
        warn!("API_TOKEN is not set; /verify will answer 500 until it is configured");
    }

    let resolver =
        TokioAsyncResolver::tokio_from_system_conf().context("initialize DNS resolver")?;
    let options = config.probe_options();
    let plan = StagePlan::new(&options);
    let state = AppState {
        api_token: config.api_token.clone(),
        resolver: Arc::new(resolver),
        plan: Arc::new(plan),
        options: Arc::new(options),
    };

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(state))
        .await
        .context("serve HTTP")?;
    Ok(())
}
