// ABOUTME: Input validation for projects and documents
// ABOUTME: Collects per-field errors instead of failing on the first one

use serde::Serialize;

use crate::types::{DocumentCreateInput, ProjectCreateInput, ProjectUpdateInput};

pub const MAX_PROJECT_NAME_LENGTH: usize = 200;

/// Validation error for a single field
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn check_name(name: &str, errors: &mut Vec<ValidationError>) {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        errors.push(ValidationError::new("name", "Project name is required"));
    } else if trimmed.chars().count() > MAX_PROJECT_NAME_LENGTH {
        errors.push(ValidationError::new(
            "name",
            format!(
                "Project name must be at most {} characters",
                MAX_PROJECT_NAME_LENGTH
            ),
        ));
    }
}

/// Validates project data for creation
pub fn validate_project_create(data: &ProjectCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    check_name(&data.name, &mut errors);

    if data.project_type.trim().is_empty() {
        errors.push(ValidationError::new("type", "Project type is required"));
    }

    errors
}

/// Validates project update data
pub fn validate_project_update(data: &ProjectUpdateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(ref name) = data.name {
        check_name(name, &mut errors);
    }

    if let Some(ref project_type) = data.project_type {
        if project_type.trim().is_empty() {
            errors.push(ValidationError::new("type", "Project type cannot be empty"));
        }
    }

    errors
}

/// Validates a manually created document
pub fn validate_document_create(data: &DocumentCreateInput) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if data.name.trim().is_empty() {
        errors.push(ValidationError::new("name", "Document name is required"));
    }

    errors
}
