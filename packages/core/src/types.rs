use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Status assigned to projects created without an explicit one
pub const DEFAULT_PROJECT_STATUS: &str = "Planning";

/// The four kinds of planning document the generator can produce
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DocumentType {
    Roadmap,
    Mvp,
    Architecture,
    Plan,
}

impl DocumentType {
    /// Every document type, in the order documents are generated for a new project
    pub const ALL: [DocumentType; 4] = [
        DocumentType::Roadmap,
        DocumentType::Mvp,
        DocumentType::Architecture,
        DocumentType::Plan,
    ];

    /// Wire tag, as stored in `Document::document_type`
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Roadmap => "roadmap",
            DocumentType::Mvp => "mvp",
            DocumentType::Architecture => "architecture",
            DocumentType::Plan => "plan",
        }
    }

    /// Suffix appended to the project name to form the document title
    pub fn title_suffix(&self) -> &'static str {
        match self {
            DocumentType::Roadmap => "Product Roadmap",
            DocumentType::Mvp => "MVP Blueprint",
            DocumentType::Architecture => "Architecture Design",
            DocumentType::Plan => "Project Plan",
        }
    }

    /// Display name of a document of this type for the given project
    pub fn document_name(&self, project_name: &str) -> String {
        format!("{} - {}", project_name, self.title_suffix())
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when an external document-type tag names no known type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unsupported document type: {0}")]
pub struct UnsupportedDocumentType(pub String);

impl FromStr for DocumentType {
    type Err = UnsupportedDocumentType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "roadmap" => Ok(DocumentType::Roadmap),
            "mvp" => Ok(DocumentType::Mvp),
            "architecture" => Ok(DocumentType::Architecture),
            "plan" => Ok(DocumentType::Plan),
            other => Err(UnsupportedDocumentType(other.to_string())),
        }
    }
}

/// Which documents to generate when a project is created
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectNeeds {
    #[serde(default)]
    pub roadmap: bool,
    #[serde(default)]
    pub mvp: bool,
    #[serde(default)]
    pub architecture: bool,
    #[serde(rename = "projectPlan", default)]
    pub project_plan: bool,
}

impl ProjectNeeds {
    /// Requested document types, in generation order
    pub fn requested(&self) -> Vec<DocumentType> {
        DocumentType::ALL
            .into_iter()
            .filter(|doc_type| match doc_type {
                DocumentType::Roadmap => self.roadmap,
                DocumentType::Mvp => self.mvp,
                DocumentType::Architecture => self.architecture,
                DocumentType::Plan => self.project_plan,
            })
            .collect()
    }
}

/// A product concept with the classification tags that drive document content
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    /// Open enumeration: mobile-app, web-application, saas, e-commerce, other
    #[serde(rename = "type")]
    pub project_type: String,
    pub industry: Option<String>,
    pub status: String,
    #[serde(default)]
    pub needs: ProjectNeeds,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new project
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectCreateInput {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub project_type: String,
    pub industry: Option<String>,
    pub status: Option<String>,
    #[serde(default)]
    pub needs: ProjectNeeds,
}

impl ProjectCreateInput {
    pub fn new(name: impl Into<String>, project_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            project_type: project_type.into(),
            industry: None,
            status: None,
            needs: ProjectNeeds::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_industry(mut self, industry: impl Into<String>) -> Self {
        self.industry = Some(industry.into());
        self
    }

    pub fn with_needs(mut self, needs: ProjectNeeds) -> Self {
        self.needs = needs;
        self
    }
}

/// Partial update of a project; `None` leaves the field unchanged
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectUpdateInput {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub project_type: Option<String>,
    pub industry: Option<String>,
    pub status: Option<String>,
    pub needs: Option<ProjectNeeds>,
}

impl ProjectUpdateInput {
    /// Apply the provided fields to `project` (timestamps are left to the caller)
    pub fn apply_to(self, project: &mut Project) {
        if let Some(name) = self.name {
            project.name = name;
        }
        if let Some(description) = self.description {
            project.description = Some(description);
        }
        if let Some(project_type) = self.project_type {
            project.project_type = project_type;
        }
        if let Some(industry) = self.industry {
            project.industry = Some(industry);
        }
        if let Some(status) = self.status {
            project.status = status;
        }
        if let Some(needs) = self.needs {
            project.needs = needs;
        }
    }
}

/// One generated planning artifact tied to a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: i64,
    #[serde(rename = "projectId")]
    pub project_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    /// Opaque HTML payload
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Input for creating a new document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentCreateInput {
    #[serde(rename = "projectId")]
    pub project_id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub document_type: DocumentType,
    pub content: String,
}

/// Partial update of a document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentUpdateInput {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub document_type: Option<DocumentType>,
    pub content: Option<String>,
}

impl DocumentUpdateInput {
    pub fn content(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Default::default()
        }
    }

    pub fn apply_to(self, document: &mut Document) {
        if let Some(name) = self.name {
            document.name = name;
        }
        if let Some(document_type) = self.document_type {
            document.document_type = document_type;
        }
        if let Some(content) = self.content {
            document.content = content;
        }
    }
}

/// Account record, reserved for multi-user support
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: i64,
    pub username: String,
    #[serde(skip_serializing, default)]
    pub password: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreateInput {
    pub username: String,
    pub password: String,
    pub email: String,
    pub name: Option<String>,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CollaboratorRole {
    Owner,
    Editor,
    #[default]
    Viewer,
}

impl CollaboratorRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            CollaboratorRole::Owner => "owner",
            CollaboratorRole::Editor => "editor",
            CollaboratorRole::Viewer => "viewer",
        }
    }
}

impl FromStr for CollaboratorRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(CollaboratorRole::Owner),
            "editor" => Ok(CollaboratorRole::Editor),
            "viewer" => Ok(CollaboratorRole::Viewer),
            other => Err(format!("Unknown collaborator role: {}", other)),
        }
    }
}

/// Membership of a user in a project
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Collaborator {
    pub id: i64,
    #[serde(rename = "projectId")]
    pub project_id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    pub role: CollaboratorRole,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollaboratorCreateInput {
    #[serde(rename = "projectId")]
    pub project_id: i64,
    #[serde(rename = "userId")]
    pub user_id: i64,
    #[serde(default)]
    pub role: CollaboratorRole,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_document_type_parsing() {
        assert_eq!("roadmap".parse::<DocumentType>(), Ok(DocumentType::Roadmap));
        assert_eq!(" plan ".parse::<DocumentType>(), Ok(DocumentType::Plan));
        assert_eq!(
            "summary".parse::<DocumentType>(),
            Err(UnsupportedDocumentType("summary".to_string()))
        );
    }

    #[test]
    fn test_document_names() {
        assert_eq!(
            DocumentType::Mvp.document_name("Acme"),
            "Acme - MVP Blueprint"
        );
        assert_eq!(
            DocumentType::Plan.document_name("Acme"),
            "Acme - Project Plan"
        );
    }

    #[test]
    fn test_needs_requested_order() {
        let needs = ProjectNeeds {
            roadmap: true,
            mvp: false,
            architecture: true,
            project_plan: true,
        };
        assert_eq!(
            needs.requested(),
            vec![
                DocumentType::Roadmap,
                DocumentType::Architecture,
                DocumentType::Plan
            ]
        );
        assert!(ProjectNeeds::default().requested().is_empty());
    }

    #[test]
    fn test_project_wire_format() {
        let json = serde_json::json!({
            "name": "Acme Tracker",
            "type": "saas",
            "industry": "finance",
            "needs": { "roadmap": true, "projectPlan": true }
        });
        let input: ProjectCreateInput = serde_json::from_value(json).unwrap();
        assert_eq!(input.project_type, "saas");
        assert!(input.needs.project_plan);
        assert!(!input.needs.mvp);
        assert_eq!(input.status, None);
    }

    #[test]
    fn test_user_password_not_serialized() {
        let user = User {
            id: 1,
            username: "ada".into(),
            password: "secret".into(),
            email: "ada@example.com".into(),
            name: None,
            avatar: None,
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("secret"));
    }
}
