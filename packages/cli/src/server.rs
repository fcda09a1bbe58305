// ABOUTME: API server bootstrap
// ABOUTME: Storage selection, sample seeding, CORS and the axum serve loop

use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use blueprint_api::{create_router, AppState};
use blueprint_generator::DocumentGenerator;
use blueprint_storage::{seed_sample_data, BlueprintStorage, MemoryStorage, SqliteStorage};

use crate::config::Config;

/// Open the configured storage backend and seed it when asked
pub async fn build_storage(config: &Config) -> anyhow::Result<Arc<dyn BlueprintStorage>> {
    let storage: Arc<dyn BlueprintStorage> = match &config.database_url {
        Some(url) => {
            info!("Using SQLite storage at {}", url);
            let sqlite = SqliteStorage::connect(url)
                .await
                .with_context(|| format!("Failed to open database {}", url))?;
            Arc::new(sqlite)
        }
        None => {
            info!("Using in-memory storage (data is lost on restart)");
            Arc::new(MemoryStorage::new())
        }
    };

    if config.sample_data {
        if storage.list_projects().await?.is_empty() {
            seed_sample_data(storage.as_ref()).await?;
        } else {
            info!("Storage already has projects, skipping sample data");
        }
    }

    Ok(storage)
}

pub fn cors_layer(origin: &str) -> anyhow::Result<CorsLayer> {
    let origin = origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid CORS origin: {}", origin))?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::DELETE])
        .allow_headers(Any))
}

/// Assemble the full application router for `config`
pub async fn build_app(config: &Config) -> anyhow::Result<Router> {
    let storage = build_storage(config).await?;
    let generator = DocumentGenerator::from_config(storage, config.ai.clone())?;
    if !generator.ai_available() {
        warn!("ANTHROPIC_API_KEY not set, AI generation disabled");
    }

    Ok(create_router(AppState::new(generator)).layer(cors_layer(&config.cors_origin)?))
}

pub async fn run_server(config: Config) -> anyhow::Result<()> {
    let app = build_app(&config).await?;
    let addr = config.socket_addr();

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Blueprint API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
    }
}
