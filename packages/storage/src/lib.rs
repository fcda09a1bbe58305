// ABOUTME: Persistence layer for projects, documents, users and collaborators
// ABOUTME: Storage trait with in-memory and SQLite implementations

use async_trait::async_trait;
use thiserror::Error;

use blueprint_core::{
    Collaborator, CollaboratorCreateInput, Document, DocumentCreateInput, DocumentUpdateInput,
    Project, ProjectCreateInput, ProjectUpdateInput, User, UserCreateInput,
};

pub mod memory;
pub mod seed;
pub mod sqlite;

pub use memory::MemoryStorage;
pub use seed::seed_sample_data;
pub use sqlite::SqliteStorage;

/// Storage errors
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: i64 },
    #[error("Duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },
    #[error("Invalid stored data: {0}")]
    InvalidData(String),
}

impl StorageError {
    pub fn project_not_found(id: i64) -> Self {
        StorageError::NotFound {
            entity: "Project",
            id,
        }
    }

    pub fn document_not_found(id: i64) -> Self {
        StorageError::NotFound {
            entity: "Document",
            id,
        }
    }

    pub fn user_not_found(id: i64) -> Self {
        StorageError::NotFound { entity: "User", id }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, StorageError::NotFound { .. })
    }
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence contract shared by every storage backend.
///
/// Lookups return `Ok(None)` for unknown ids, updates fail with
/// [`StorageError::NotFound`], and deleting an unknown id is a no-op.
/// Deleting a project removes its documents and collaborators.
#[async_trait]
pub trait BlueprintStorage: Send + Sync {
    // Projects
    async fn list_projects(&self) -> StorageResult<Vec<Project>>;
    async fn get_project(&self, id: i64) -> StorageResult<Option<Project>>;
    async fn create_project(&self, input: ProjectCreateInput) -> StorageResult<Project>;
    async fn update_project(&self, id: i64, input: ProjectUpdateInput) -> StorageResult<Project>;
    async fn delete_project(&self, id: i64) -> StorageResult<()>;

    // Documents
    async fn get_document(&self, id: i64) -> StorageResult<Option<Document>>;
    async fn list_documents_by_project(&self, project_id: i64) -> StorageResult<Vec<Document>>;
    async fn create_document(&self, input: DocumentCreateInput) -> StorageResult<Document>;
    async fn update_document(&self, id: i64, input: DocumentUpdateInput)
        -> StorageResult<Document>;
    async fn delete_document(&self, id: i64) -> StorageResult<()>;

    // Users
    async fn get_user(&self, id: i64) -> StorageResult<Option<User>>;
    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>>;
    async fn create_user(&self, input: UserCreateInput) -> StorageResult<User>;

    // Collaborators
    async fn list_collaborators(&self, project_id: i64) -> StorageResult<Vec<Collaborator>>;
    async fn add_collaborator(&self, input: CollaboratorCreateInput)
        -> StorageResult<Collaborator>;
    async fn remove_collaborator(&self, project_id: i64, user_id: i64) -> StorageResult<()>;
}
