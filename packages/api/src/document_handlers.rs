// ABOUTME: HTTP request handlers for documents of a project
// ABOUTME: Listing, manual creation, editing and deletion

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::info;

use blueprint_core::{
    validate_document_create, Document, DocumentCreateInput, DocumentType, DocumentUpdateInput,
    ValidationError,
};

use crate::project_handlers::load_project;
use crate::response::{
    created, ok, parse_document_id, parse_project_id, ApiError, ApiJson, ApiResult,
};
use crate::AppState;

/// Request body for creating a document by hand
#[derive(Deserialize)]
pub struct CreateDocumentRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub document_type: String,
    #[serde(default)]
    pub content: String,
}

/// Request body for editing a document
#[derive(Deserialize)]
pub struct UpdateDocumentRequest {
    pub name: Option<String>,
    pub content: Option<String>,
}

pub(crate) async fn load_document(state: &AppState, id: i64) -> ApiResult<Document> {
    state
        .storage
        .get_document(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Document not found".to_string()))
}

pub async fn list_documents(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
) -> ApiResult<Response> {
    let project_id = parse_project_id(&project_id)?;
    load_project(&state, project_id).await?;

    let documents = state.storage.list_documents_by_project(project_id).await?;
    Ok(ok(documents))
}

pub async fn create_document(
    State(state): State<AppState>,
    Path(project_id): Path<String>,
    ApiJson(request): ApiJson<CreateDocumentRequest>,
) -> ApiResult<Response> {
    let project_id = parse_project_id(&project_id)?;
    load_project(&state, project_id).await?;

    let document_type: DocumentType = request.document_type.parse().map_err(|e| {
        ApiError::Validation(vec![ValidationError::new("type", format!("{}", e))])
    })?;
    let input = DocumentCreateInput {
        project_id,
        name: request.name,
        document_type,
        content: request.content,
    };
    ApiError::check(validate_document_create(&input))?;

    let document = state.storage.create_document(input).await?;
    info!("Created document {} for project {}", document.id, project_id);
    Ok(created(document))
}

pub async fn get_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_document_id(&id)?;
    Ok(ok(load_document(&state, id).await?))
}

pub async fn update_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(request): ApiJson<UpdateDocumentRequest>,
) -> ApiResult<Response> {
    let id = parse_document_id(&id)?;
    load_document(&state, id).await?;

    if request.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(ApiError::Validation(vec![ValidationError::new(
            "name",
            "Document name is required",
        )]));
    }

    let document = state
        .storage
        .update_document(
            id,
            DocumentUpdateInput {
                name: request.name,
                document_type: None,
                content: request.content,
            },
        )
        .await?;
    Ok(ok(document))
}

pub async fn delete_document(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_document_id(&id)?;
    load_document(&state, id).await?;

    state.storage.delete_document(id).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}
