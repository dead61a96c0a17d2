use std::net::SocketAddr;
use std::sync::Arc;

use jobtech::JobTechClient;
use server::{AppState, config::Config};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    info!("🚀 Starting job board server");

    let config = Config::from_env()?;
    info!(
        base_url = %config.search.base_url,
        region = %config.search.region,
        limit = config.search.limit,
        "JobTech search configured"
    );

    let client = JobTechClient::with_timeout(config.search.clone(), config.request_timeout)?;
    let state = AppState::new(Arc::new(client), config.page);
    let app = server::router(state);

    let addr: SocketAddr = config.server_address.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("🌐 Server running at http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
