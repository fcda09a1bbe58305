// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides consistent response format across all API endpoints

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use blueprint_core::{UnsupportedDocumentType, ValidationError};
use blueprint_generator::GeneratorError;
use blueprint_storage::StorageError;

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ValidationError>>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
            details: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
            details: None,
        }
    }
}

/// Errors surfaced by route handlers
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Validation failed")]
    Validation(Vec<ValidationError>),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{0}")]
    Internal(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadGateway(_) => StatusCode::BAD_GATEWAY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Turn a non-empty validation report into an error
    pub fn check(errors: Vec<ValidationError>) -> ApiResult<()> {
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::Validation(errors))
        }
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound { entity, .. } => {
                ApiError::NotFound(format!("{} not found", entity))
            }
            duplicate @ StorageError::Duplicate { .. } => {
                ApiError::BadRequest(duplicate.to_string())
            }
            other => {
                error!("Storage failure: {}", other);
                ApiError::Internal("Database error".to_string())
            }
        }
    }
}

/// JSON body extractor whose rejections use the standard error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(format!("Invalid request body: {}", rejection.body_text()))
    }
}

impl From<UnsupportedDocumentType> for ApiError {
    fn from(err: UnsupportedDocumentType) -> Self {
        ApiError::BadRequest(err.to_string())
    }
}

impl From<GeneratorError> for ApiError {
    fn from(err: GeneratorError) -> Self {
        match err {
            GeneratorError::UnsupportedDocumentType(e) => e.into(),
            GeneratorError::ProjectNotFound(_) => ApiError::NotFound("Project not found".into()),
            GeneratorError::DocumentNotFound(_) => ApiError::NotFound("Document not found".into()),
            GeneratorError::AiNotConfigured => ApiError::BadRequest(
                "AI generation is not available. Configure ANTHROPIC_API_KEY to enable it.".into(),
            ),
            GeneratorError::AIService(e) => {
                error!("AI regeneration failed: {}", e);
                ApiError::BadGateway("Failed to regenerate document using AI".into())
            }
            GeneratorError::Storage(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            ApiError::Validation(details) => ApiResponse {
                success: false,
                data: None::<()>,
                error: Some("Validation failed".to_string()),
                details: Some(details),
            },
            other => ApiResponse::<()>::error(other.to_string()),
        };

        (status, ResponseJson(body)).into_response()
    }
}

/// 200 with the standard envelope
pub fn ok<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, ResponseJson(ApiResponse::success(data))).into_response()
}

/// 201 with the standard envelope
pub fn created<T: Serialize>(data: T) -> Response {
    (StatusCode::CREATED, ResponseJson(ApiResponse::success(data))).into_response()
}

/// Parse a numeric path id, rejecting anything else with `message`
pub fn parse_id(raw: &str, message: &str) -> ApiResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::BadRequest(message.to_string()))
}

pub fn parse_project_id(raw: &str) -> ApiResult<i64> {
    parse_id(raw, "Invalid project ID")
}

pub fn parse_document_id(raw: &str) -> ApiResult<i64> {
    parse_id(raw, "Invalid document ID")
}
