use std::sync::Arc;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use gamescout_api::api::{create_router, AppState};
use gamescout_api::config::Config;
use gamescout_api::services::{RawgClient, ReplicateClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gamescout_api=debug,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let generation = Arc::new(ReplicateClient::new(
        config.generation_api_key.clone(),
        config.generation_api_url.clone(),
        config.generation_model.clone(),
        config.generation_temperature,
        Duration::from_secs(config.generation_timeout_secs),
    )?);

    let catalog = Arc::new(RawgClient::new(
        config.catalog_api_key.clone(),
        config.catalog_api_url.clone(),
        Duration::from_secs(config.catalog_timeout_secs),
    )?);

    let state = AppState::new(
        generation,
        catalog,
        config.catalog_store_url.clone(),
        config.recommendation_count,
    );

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
