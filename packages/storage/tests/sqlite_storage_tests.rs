// ABOUTME: Integration tests for the SQLite storage backend
// ABOUTME: Uses an in-memory database so each test starts from a clean schema

use blueprint_core::{
    CollaboratorCreateInput, CollaboratorRole, DocumentCreateInput, DocumentType,
    DocumentUpdateInput, ProjectCreateInput, ProjectNeeds, ProjectUpdateInput, UserCreateInput,
};
use blueprint_storage::{seed_sample_data, BlueprintStorage, SqliteStorage, StorageError};

async fn setup() -> SqliteStorage {
    SqliteStorage::connect("sqlite::memory:")
        .await
        .expect("Failed to open in-memory database")
}

fn user(username: &str) -> UserCreateInput {
    UserCreateInput {
        username: username.to_string(),
        password: "hunter2".to_string(),
        email: format!("{}@example.com", username),
        name: None,
        avatar: None,
    }
}

#[tokio::test]
async fn test_project_round_trip_preserves_needs() {
    let storage = setup().await;
    let needs = ProjectNeeds {
        roadmap: true,
        mvp: false,
        architecture: true,
        project_plan: false,
    };
    let created = storage
        .create_project(
            ProjectCreateInput::new("Acme Tracker", "saas")
                .with_industry("finance")
                .with_needs(needs),
        )
        .await
        .unwrap();

    assert_eq!(created.id, 1);
    assert_eq!(created.status, "Planning");

    let fetched = storage.get_project(created.id).await.unwrap().unwrap();
    assert_eq!(fetched.needs, needs);
    assert_eq!(fetched.industry.as_deref(), Some("finance"));
    assert_eq!(fetched.description, None);
}

#[tokio::test]
async fn test_update_project_and_missing_id() {
    let storage = setup().await;
    let project = storage
        .create_project(ProjectCreateInput::new("Acme", "other"))
        .await
        .unwrap();

    let updated = storage
        .update_project(
            project.id,
            ProjectUpdateInput {
                name: Some("Acme 2".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Acme 2");
    assert_eq!(updated.project_type, "other");

    let err = storage
        .update_project(999, ProjectUpdateInput::default())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StorageError::NotFound {
            entity: "Project",
            id: 999
        }
    ));
}

#[tokio::test]
async fn test_documents_cascade_with_project() {
    let storage = setup().await;
    let project = storage
        .create_project(ProjectCreateInput::new("Acme", "saas"))
        .await
        .unwrap();

    for document_type in [DocumentType::Roadmap, DocumentType::Plan] {
        storage
            .create_document(DocumentCreateInput {
                project_id: project.id,
                name: document_type.document_name(&project.name),
                document_type,
                content: "<p>body</p>".into(),
            })
            .await
            .unwrap();
    }
    assert_eq!(
        storage
            .list_documents_by_project(project.id)
            .await
            .unwrap()
            .len(),
        2
    );

    storage.delete_project(project.id).await.unwrap();
    assert!(storage
        .list_documents_by_project(project.id)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_document_update_and_orphan_rejection() {
    let storage = setup().await;
    let orphan = storage
        .create_document(DocumentCreateInput {
            project_id: 77,
            name: "Orphan".into(),
            document_type: DocumentType::Mvp,
            content: String::new(),
        })
        .await;
    assert!(matches!(orphan, Err(StorageError::NotFound { .. })));

    let project = storage
        .create_project(ProjectCreateInput::new("Acme", "saas"))
        .await
        .unwrap();
    let doc = storage
        .create_document(DocumentCreateInput {
            project_id: project.id,
            name: "Acme - MVP Blueprint".into(),
            document_type: DocumentType::Mvp,
            content: "<p>old</p>".into(),
        })
        .await
        .unwrap();

    let updated = storage
        .update_document(doc.id, DocumentUpdateInput::content("<p>new</p>"))
        .await
        .unwrap();
    assert_eq!(updated.content, "<p>new</p>");
    assert_eq!(updated.document_type, DocumentType::Mvp);

    let reloaded = storage.get_document(doc.id).await.unwrap().unwrap();
    assert_eq!(reloaded.content, "<p>new</p>");

    storage.delete_document(doc.id).await.unwrap();
    assert!(storage.get_document(doc.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_users_and_collaborators() {
    let storage = setup().await;
    let project = storage
        .create_project(ProjectCreateInput::new("Acme", "saas"))
        .await
        .unwrap();
    let ada = storage.create_user(user("ada")).await.unwrap();

    let duplicate = storage.create_user(user("ada")).await;
    assert!(matches!(duplicate, Err(StorageError::Duplicate { .. })));

    storage
        .add_collaborator(CollaboratorCreateInput {
            project_id: project.id,
            user_id: ada.id,
            role: CollaboratorRole::Owner,
        })
        .await
        .unwrap();

    let collaborators = storage.list_collaborators(project.id).await.unwrap();
    assert_eq!(collaborators.len(), 1);
    assert_eq!(collaborators[0].role, CollaboratorRole::Owner);

    storage.remove_collaborator(project.id, ada.id).await.unwrap();
    assert!(storage.list_collaborators(project.id).await.unwrap().is_empty());

    let found = storage.get_user_by_username("ada").await.unwrap();
    assert_eq!(found.map(|u| u.id), Some(ada.id));
}

#[tokio::test]
async fn test_seed_sample_data() {
    let storage = setup().await;
    let project = seed_sample_data(&storage).await.unwrap();

    assert_eq!(project.status, "Active");
    let documents = storage.list_documents_by_project(project.id).await.unwrap();
    let types: Vec<DocumentType> = documents.iter().map(|d| d.document_type).collect();
    assert_eq!(
        types,
        vec![
            DocumentType::Roadmap,
            DocumentType::Mvp,
            DocumentType::Architecture
        ]
    );
    let names: Vec<&str> = documents.iter().map(|d| d.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "E-Commerce Platform Roadmap",
            "E-Commerce Platform MVP Blueprint",
            "E-Commerce Platform Architecture Design"
        ]
    );
}
