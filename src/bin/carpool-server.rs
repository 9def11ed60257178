//! HTTP entry point for the carpool route matcher.

use std::net::SocketAddr;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carpool_match::config::ServiceConfig;
use carpool_match::service::{router, AppState};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env()?;
    info!(
        provider = ?config.provider.kind,
        interval_m = config.matching.resample_interval_m,
        radius_m = config.matching.proximity_radius_m,
        threshold_pct = config.matching.suitability_threshold_pct,
        "loaded configuration"
    );

    // Blocking reqwest clients must be created outside the async runtime.
    let provider = config.provider.build()?;
    let state = Arc::new(AppState {
        provider: Arc::from(provider),
        matching: config.matching.clone(),
    });

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(serve(config.bind_addr, state))
}

async fn serve(addr: SocketAddr, state: Arc<AppState>) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "carpool match service listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
