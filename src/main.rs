use anyhow::Context;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use fini_server::{app, config::Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env().context("invalid configuration")?;
    match &config.sheets_url {
        Some(url) => info!("Relaying submissions to {}", url.host_str().unwrap_or("?")),
        None => warn!("SHEETS_URL is not set; every submission will fail"),
    }

    let bind_address = config.bind_address();
    let app = app::router(&config);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    info!("Server running on http://{}", bind_address);

    axum::serve(listener, app).await?;
    Ok(())
}
