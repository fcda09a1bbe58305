// ABOUTME: In-memory storage backend keyed by auto-incrementing integer ids
// ABOUTME: Reference implementation used by tests and the default server mode

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use blueprint_core::{
    Collaborator, CollaboratorCreateInput, Document, DocumentCreateInput, DocumentUpdateInput,
    Project, ProjectCreateInput, ProjectUpdateInput, User, UserCreateInput,
    DEFAULT_PROJECT_STATUS,
};

use crate::{BlueprintStorage, StorageError, StorageResult};

#[derive(Default)]
struct Tables {
    projects: BTreeMap<i64, Project>,
    documents: BTreeMap<i64, Document>,
    users: BTreeMap<i64, User>,
    collaborators: BTreeMap<i64, Collaborator>,
    last_project_id: i64,
    last_document_id: i64,
    last_user_id: i64,
    last_collaborator_id: i64,
}

fn next_id(counter: &mut i64) -> i64 {
    *counter += 1;
    *counter
}

/// Storage held entirely in process memory. Ids start at 1 and are never reused.
#[derive(Default)]
pub struct MemoryStorage {
    tables: RwLock<Tables>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty storage pre-populated with the demo project
    pub async fn with_sample_data() -> StorageResult<Self> {
        let storage = Self::new();
        crate::seed_sample_data(&storage).await?;
        Ok(storage)
    }
}

#[async_trait]
impl BlueprintStorage for MemoryStorage {
    async fn list_projects(&self) -> StorageResult<Vec<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.values().cloned().collect())
    }

    async fn get_project(&self, id: i64) -> StorageResult<Option<Project>> {
        let tables = self.tables.read().await;
        Ok(tables.projects.get(&id).cloned())
    }

    async fn create_project(&self, input: ProjectCreateInput) -> StorageResult<Project> {
        let mut tables = self.tables.write().await;
        let id = next_id(&mut tables.last_project_id);
        let now = Utc::now();
        let project = Project {
            id,
            name: input.name,
            description: input.description,
            project_type: input.project_type,
            industry: input.industry,
            status: input
                .status
                .unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string()),
            needs: input.needs,
            created_at: now,
            updated_at: now,
        };
        tables.projects.insert(id, project.clone());
        debug!("Created project {} ({})", id, project.name);
        Ok(project)
    }

    async fn update_project(&self, id: i64, input: ProjectUpdateInput) -> StorageResult<Project> {
        let mut tables = self.tables.write().await;
        let project = tables
            .projects
            .get_mut(&id)
            .ok_or_else(|| StorageError::project_not_found(id))?;
        input.apply_to(project);
        project.updated_at = Utc::now();
        Ok(project.clone())
    }

    async fn delete_project(&self, id: i64) -> StorageResult<()> {
        let mut tables = self.tables.write().await;
        if tables.projects.remove(&id).is_none() {
            return Ok(());
        }
        let before = tables.documents.len();
        tables.documents.retain(|_, doc| doc.project_id != id);
        let removed_documents = before - tables.documents.len();
        tables.collaborators.retain(|_, c| c.project_id != id);
        debug!(
            "Deleted project {} and {} document(s)",
            id, removed_documents
        );
        Ok(())
    }

    async fn get_document(&self, id: i64) -> StorageResult<Option<Document>> {
        let tables = self.tables.read().await;
        Ok(tables.documents.get(&id).cloned())
    }

    async fn list_documents_by_project(&self, project_id: i64) -> StorageResult<Vec<Document>> {
        let tables = self.tables.read().await;
        Ok(tables
            .documents
            .values()
            .filter(|doc| doc.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn create_document(&self, input: DocumentCreateInput) -> StorageResult<Document> {
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&input.project_id) {
            return Err(StorageError::project_not_found(input.project_id));
        }
        let id = next_id(&mut tables.last_document_id);
        let now = Utc::now();
        let document = Document {
            id,
            project_id: input.project_id,
            name: input.name,
            document_type: input.document_type,
            content: input.content,
            created_at: now,
            updated_at: now,
        };
        tables.documents.insert(id, document.clone());
        Ok(document)
    }

    async fn update_document(
        &self,
        id: i64,
        input: DocumentUpdateInput,
    ) -> StorageResult<Document> {
        let mut tables = self.tables.write().await;
        let document = tables
            .documents
            .get_mut(&id)
            .ok_or_else(|| StorageError::document_not_found(id))?;
        input.apply_to(document);
        document.updated_at = Utc::now();
        Ok(document.clone())
    }

    async fn delete_document(&self, id: i64) -> StorageResult<()> {
        let mut tables = self.tables.write().await;
        tables.documents.remove(&id);
        Ok(())
    }

    async fn get_user(&self, id: i64) -> StorageResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables.users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let tables = self.tables.read().await;
        Ok(tables
            .users
            .values()
            .find(|user| user.username == username)
            .cloned())
    }

    async fn create_user(&self, input: UserCreateInput) -> StorageResult<User> {
        let mut tables = self.tables.write().await;
        if tables.users.values().any(|u| u.username == input.username) {
            return Err(StorageError::Duplicate {
                field: "username",
                value: input.username,
            });
        }
        if tables.users.values().any(|u| u.email == input.email) {
            return Err(StorageError::Duplicate {
                field: "email",
                value: input.email,
            });
        }
        let id = next_id(&mut tables.last_user_id);
        let user = User {
            id,
            username: input.username,
            password: input.password,
            email: input.email,
            name: input.name,
            avatar: input.avatar,
        };
        tables.users.insert(id, user.clone());
        Ok(user)
    }

    async fn list_collaborators(&self, project_id: i64) -> StorageResult<Vec<Collaborator>> {
        let tables = self.tables.read().await;
        Ok(tables
            .collaborators
            .values()
            .filter(|c| c.project_id == project_id)
            .cloned()
            .collect())
    }

    async fn add_collaborator(
        &self,
        input: CollaboratorCreateInput,
    ) -> StorageResult<Collaborator> {
        let mut tables = self.tables.write().await;
        if !tables.projects.contains_key(&input.project_id) {
            return Err(StorageError::project_not_found(input.project_id));
        }
        if !tables.users.contains_key(&input.user_id) {
            return Err(StorageError::user_not_found(input.user_id));
        }
        let id = next_id(&mut tables.last_collaborator_id);
        let collaborator = Collaborator {
            id,
            project_id: input.project_id,
            user_id: input.user_id,
            role: input.role,
        };
        tables.collaborators.insert(id, collaborator.clone());
        Ok(collaborator)
    }

    async fn remove_collaborator(&self, project_id: i64, user_id: i64) -> StorageResult<()> {
        let mut tables = self.tables.write().await;
        let found = tables
            .collaborators
            .iter()
            .find(|(_, c)| c.project_id == project_id && c.user_id == user_id)
            .map(|(id, _)| *id);
        if let Some(id) = found {
            tables.collaborators.remove(&id);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blueprint_core::{CollaboratorRole, DocumentType};

    fn document_input(project_id: i64, document_type: DocumentType) -> DocumentCreateInput {
        DocumentCreateInput {
            project_id,
            name: format!("Doc {}", document_type),
            document_type,
            content: "<h1>Doc</h1>".to_string(),
        }
    }

    #[tokio::test]
    async fn test_ids_start_at_one_and_increment() {
        let storage = MemoryStorage::new();
        let first = storage
            .create_project(ProjectCreateInput::new("First", "saas"))
            .await
            .unwrap();
        let second = storage
            .create_project(ProjectCreateInput::new("Second", "other"))
            .await
            .unwrap();
        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(first.status, "Planning");
        assert_eq!(first.created_at, first.updated_at);
    }

    #[tokio::test]
    async fn test_update_refreshes_updated_at() {
        let storage = MemoryStorage::new();
        let project = storage
            .create_project(ProjectCreateInput::new("Acme", "saas"))
            .await
            .unwrap();

        let updated = storage
            .update_project(
                project.id,
                ProjectUpdateInput {
                    status: Some("Active".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.status, "Active");
        assert_eq!(updated.name, "Acme");
        assert!(updated.updated_at >= project.updated_at);
        assert_eq!(updated.created_at, project.created_at);
    }

    #[tokio::test]
    async fn test_update_unknown_project_is_not_found() {
        let storage = MemoryStorage::new();
        let err = storage
            .update_project(42, ProjectUpdateInput::default())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_document_requires_live_project() {
        let storage = MemoryStorage::new();
        let err = storage
            .create_document(document_input(7, DocumentType::Mvp))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_duplicate_document_types_are_allowed() {
        let storage = MemoryStorage::new();
        let project = storage
            .create_project(ProjectCreateInput::new("Acme", "saas"))
            .await
            .unwrap();
        storage
            .create_document(document_input(project.id, DocumentType::Plan))
            .await
            .unwrap();
        storage
            .create_document(document_input(project.id, DocumentType::Plan))
            .await
            .unwrap();
        let docs = storage.list_documents_by_project(project.id).await.unwrap();
        assert_eq!(docs.len(), 2);
    }

    #[tokio::test]
    async fn test_delete_project_cascades() {
        let storage = MemoryStorage::new();
        let keep = storage
            .create_project(ProjectCreateInput::new("Keep", "saas"))
            .await
            .unwrap();
        let doomed = storage
            .create_project(ProjectCreateInput::new("Doomed", "saas"))
            .await
            .unwrap();
        let user = storage
            .create_user(UserCreateInput {
                username: "ada".into(),
                password: "pw".into(),
                email: "ada@example.com".into(),
                name: None,
                avatar: None,
            })
            .await
            .unwrap();

        storage
            .create_document(document_input(keep.id, DocumentType::Roadmap))
            .await
            .unwrap();
        storage
            .create_document(document_input(doomed.id, DocumentType::Roadmap))
            .await
            .unwrap();
        storage
            .create_document(document_input(doomed.id, DocumentType::Mvp))
            .await
            .unwrap();
        storage
            .add_collaborator(CollaboratorCreateInput {
                project_id: doomed.id,
                user_id: user.id,
                role: CollaboratorRole::Editor,
            })
            .await
            .unwrap();

        storage.delete_project(doomed.id).await.unwrap();

        assert!(storage.get_project(doomed.id).await.unwrap().is_none());
        assert!(storage
            .list_documents_by_project(doomed.id)
            .await
            .unwrap()
            .is_empty());
        assert!(storage.list_collaborators(doomed.id).await.unwrap().is_empty());
        assert_eq!(
            storage.list_documents_by_project(keep.id).await.unwrap().len(),
            1
        );
    }

    #[tokio::test]
    async fn test_user_uniqueness_and_lookup() {
        let storage = MemoryStorage::new();
        let input = UserCreateInput {
            username: "ada".into(),
            password: "pw".into(),
            email: "ada@example.com".into(),
            name: Some("Ada".into()),
            avatar: None,
        };
        let user = storage.create_user(input.clone()).await.unwrap();
        assert_eq!(
            storage.get_user_by_username("ada").await.unwrap(),
            Some(user)
        );
        assert!(matches!(
            storage.create_user(input).await,
            Err(StorageError::Duplicate {
                field: "username",
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_remove_collaborator() {
        let storage = MemoryStorage::new();
        let project = storage
            .create_project(ProjectCreateInput::new("Acme", "saas"))
            .await
            .unwrap();
        let user = storage
            .create_user(UserCreateInput {
                username: "bob".into(),
                password: "pw".into(),
                email: "bob@example.com".into(),
                name: None,
                avatar: None,
            })
            .await
            .unwrap();
        let collaborator = storage
            .add_collaborator(CollaboratorCreateInput {
                project_id: project.id,
                user_id: user.id,
                role: CollaboratorRole::default(),
            })
            .await
            .unwrap();
        assert_eq!(collaborator.role, CollaboratorRole::Viewer);

        storage.remove_collaborator(project.id, user.id).await.unwrap();
        assert!(storage.list_collaborators(project.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_with_sample_data_seeds_demo_project() {
        let storage = MemoryStorage::with_sample_data().await.unwrap();
        let projects = storage.list_projects().await.unwrap();
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].name, "E-Commerce Platform");
        assert_eq!(projects[0].status, "Active");
        assert_eq!(
            storage
                .list_documents_by_project(projects[0].id)
                .await
                .unwrap()
                .len(),
            3
        );
    }
}
