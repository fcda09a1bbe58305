// ABOUTME: HTTP request handlers for document generation
// ABOUTME: On-demand generation by type tag, strict AI regeneration, and AI availability check

use axum::{
    extract::{Path, State},
    response::Response,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::project_handlers::load_project;
use crate::response::{created, ok, parse_document_id, parse_project_id, ApiJson, ApiResult};
use crate::AppState;

/// Request body for generating one document
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDocumentRequest {
    #[serde(rename = "type")]
    pub document_type: String,
    #[serde(default = "default_use_ai")]
    pub use_ai: bool,
}

/// AI is attempted unless the caller opts out
fn default_use_ai() -> bool {
    true
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AiKeyStatus {
    pub has_key: bool,
}

/// Generate and store a new document of the requested type
pub async fn generate_document(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    ApiJson(request): ApiJson<GenerateDocumentRequest>,
) -> ApiResult<Response> {
    let project_id = parse_project_id(&project_id)?;
    let project = load_project(&state, project_id).await?;

    info!(
        "Generating '{}' for project {} (use_ai: {})",
        request.document_type, project_id, request.use_ai
    );

    let document = state
        .generator
        .generate_document_from_tag(&project, &request.document_type, request.use_ai)
        .await?;
    Ok(created(document))
}

/// Replace a document's content with fresh AI output
pub async fn regenerate_with_ai(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_document_id(&id)?;
    let document = state.generator.regenerate_with_ai(id).await?;
    Ok(ok(document))
}

/// Report whether AI generation is configured
pub async fn check_ai_key(State(state): State<AppState>) -> Json<AiKeyStatus> {
    Json(AiKeyStatus {
        has_key: state.generator.ai_available(),
    })
}
