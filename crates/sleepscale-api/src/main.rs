use sleepscale_api::config::{ApiConfig, StoreKind};
use sleepscale_api::state::AppState;
use sleepscale_storage::client;
use sleepscale_storage::store::RecordStore;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;

    let store = match config.store {
        StoreKind::Memory => RecordStore::memory(),
        StoreKind::S3 => {
            let s3 = client::build_client(config.region.as_deref()).await;
            RecordStore::s3(s3, config.bucket.clone())
        }
    };

    if config.admin_token.is_none() {
        tracing::warn!("SLEEPSCALE_ADMIN_TOKEN is not set; query endpoints are closed");
    }

    let state = AppState::new(store, config.admin_token.clone(), config.utc_offset);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(
        addr = %config.addr,
        store = state.store.backend_name(),
        bucket = %config.bucket,
        "sleepscale api listening"
    );

    axum::serve(listener, sleepscale_api::app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
