// ABOUTME: Error types for the generator package
// ABOUTME: Separates caller mistakes, AI failures, and persistence failures

use blueprint_ai::AIServiceError;
use blueprint_core::UnsupportedDocumentType;
use blueprint_storage::StorageError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error(transparent)]
    UnsupportedDocumentType(#[from] UnsupportedDocumentType),

    #[error("Project not found: {0}")]
    ProjectNotFound(i64),

    #[error("Document not found: {0}")]
    DocumentNotFound(i64),

    #[error("AI generation is not configured")]
    AiNotConfigured,

    #[error("AI service error: {0}")]
    AIService(#[from] AIServiceError),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
