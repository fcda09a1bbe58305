// ABOUTME: HTTP API layer for Blueprint providing REST endpoints and routing
// ABOUTME: Integration layer over storage and the document generator

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use blueprint_generator::DocumentGenerator;
use blueprint_storage::BlueprintStorage;

pub mod document_handlers;
pub mod export_handlers;
pub mod generation_handlers;
pub mod project_handlers;
pub mod response;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn BlueprintStorage>,
    pub generator: DocumentGenerator,
}

impl AppState {
    pub fn new(generator: DocumentGenerator) -> Self {
        Self {
            storage: generator.storage().clone(),
            generator,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: i64,
}

pub async fn health_check() -> Json<response::ApiResponse<HealthStatus>> {
    Json(response::ApiResponse::success(HealthStatus {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
    }))
}

/// Creates the full API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route(
            "/api/projects",
            get(project_handlers::list_projects).post(project_handlers::create_project),
        )
        .route(
            "/api/projects/{id}",
            get(project_handlers::get_project)
                .patch(project_handlers::update_project)
                .delete(project_handlers::delete_project),
        )
        .route(
            "/api/projects/{id}/documents",
            get(document_handlers::list_documents).post(document_handlers::create_document),
        )
        .route(
            "/api/projects/{id}/documents/generate",
            post(generation_handlers::generate_document),
        )
        .route(
            "/api/documents/{id}",
            get(document_handlers::get_document)
                .patch(document_handlers::update_document)
                .delete(document_handlers::delete_document),
        )
        .route(
            "/api/documents/{id}/export",
            get(export_handlers::export_document),
        )
        .route(
            "/api/documents/{id}/regenerate-with-ai",
            post(generation_handlers::regenerate_with_ai),
        )
        .route("/api/check-ai-key", get(generation_handlers::check_ai_key))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
