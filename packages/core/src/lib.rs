// ABOUTME: Core types, traits, and validation for Blueprint
// ABOUTME: Foundational package providing the data model shared by all Blueprint packages

pub mod types;
pub mod validation;

// Re-export main types
pub use types::{
    Collaborator, CollaboratorCreateInput, CollaboratorRole, Document, DocumentCreateInput,
    DocumentType, DocumentUpdateInput, Project, ProjectCreateInput, ProjectNeeds,
    ProjectUpdateInput, UnsupportedDocumentType, User, UserCreateInput, DEFAULT_PROJECT_STATUS,
};

// Re-export validation
pub use validation::{
    validate_document_create, validate_project_create, validate_project_update, ValidationError,
    MAX_PROJECT_NAME_LENGTH,
};
