// ABOUTME: SQLite storage backend built on a sqlx connection pool
// ABOUTME: Runs embedded migrations and relies on foreign keys for cascading deletes

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::{debug, info};

use blueprint_core::{
    Collaborator, CollaboratorCreateInput, CollaboratorRole, Document, DocumentCreateInput,
    DocumentType, DocumentUpdateInput, Project, ProjectCreateInput, ProjectNeeds,
    ProjectUpdateInput, User, UserCreateInput, DEFAULT_PROJECT_STATUS,
};

use crate::{BlueprintStorage, StorageError, StorageResult};

const PROJECT_COLUMNS: &str =
    "id, name, description, type, industry, status, needs, created_at, updated_at";
const DOCUMENT_COLUMNS: &str = "id, project_id, name, type, content, created_at, updated_at";

/// SQLite implementation of [`BlueprintStorage`]
pub struct SqliteStorage {
    pool: SqlitePool,
}

impl SqliteStorage {
    /// Connect to `database_url`, creating the file if needed, and run migrations
    pub async fn connect(database_url: &str) -> StorageResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = database_url.contains(":memory:");
        let mut pool_options = SqlitePoolOptions::new()
            .acquire_timeout(Duration::from_secs(30))
            .max_connections(if in_memory { 1 } else { 10 });
        if in_memory {
            // Every connection to :memory: is a separate database; keep the only one alive
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        debug!("Connecting to SQLite database: {}", database_url);
        let pool = pool_options.connect_with(options).await?;

        let storage = Self { pool };
        storage.initialize().await?;
        info!("SQLite storage ready at {}", database_url);
        Ok(storage)
    }

    /// Wrap an existing pool. Call [`SqliteStorage::initialize`] before use.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Apply pending migrations
    pub async fn initialize(&self) -> StorageResult<()> {
        sqlx::query("PRAGMA foreign_keys = ON")
            .execute(&self.pool)
            .await?;
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn row_to_project(row: &SqliteRow) -> StorageResult<Project> {
        let needs_json: String = row.try_get("needs")?;
        let needs: ProjectNeeds = serde_json::from_str(&needs_json)?;

        Ok(Project {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            project_type: row.try_get("type")?,
            industry: row.try_get("industry")?,
            status: row.try_get("status")?,
            needs,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }

    fn row_to_document(row: &SqliteRow) -> StorageResult<Document> {
        let type_tag: String = row.try_get("type")?;
        let document_type = type_tag
            .parse::<DocumentType>()
            .map_err(|e| StorageError::InvalidData(e.to_string()))?;

        Ok(Document {
            id: row.try_get("id")?,
            project_id: row.try_get("project_id")?,
            name: row.try_get("name")?,
            document_type,
            content: row.try_get("content")?,
            created_at: row.try_get::<DateTime<Utc>, _>("created_at")?,
            updated_at: row.try_get::<DateTime<Utc>, _>("updated_at")?,
        })
    }

    fn row_to_user(row: &SqliteRow) -> StorageResult<User> {
        Ok(User {
            id: row.try_get("id")?,
            username: row.try_get("username")?,
            password: row.try_get("password")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            avatar: row.try_get("avatar")?,
        })
    }

    fn row_to_collaborator(row: &SqliteRow) -> StorageResult<Collaborator> {
        let role_tag: String = row.try_get("role")?;
        let role = role_tag
            .parse::<CollaboratorRole>()
            .map_err(StorageError::InvalidData)?;

        Ok(Collaborator {
            id: row.try_get("id")?,
            project_id: row.try_get("project_id")?,
            user_id: row.try_get("user_id")?,
            role,
        })
    }

    async fn project_exists(&self, id: i64) -> StorageResult<bool> {
        let row = sqlx::query("SELECT 1 FROM projects WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }
}

fn map_unique_violation(err: sqlx::Error, input: &UserCreateInput) -> StorageError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            if message.contains("users.email") {
                return StorageError::Duplicate {
                    field: "email",
                    value: input.email.clone(),
                };
            }
            return StorageError::Duplicate {
                field: "username",
                value: input.username.clone(),
            };
        }
    }
    StorageError::Sqlx(err)
}

#[async_trait]
impl BlueprintStorage for SqliteStorage {
    async fn list_projects(&self) -> StorageResult<Vec<Project>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM projects ORDER BY id ASC",
            PROJECT_COLUMNS
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(Self::row_to_project).collect()
    }

    async fn get_project(&self, id: i64) -> StorageResult<Option<Project>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM projects WHERE id = ?",
            PROJECT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(Self::row_to_project).transpose()
    }

    async fn create_project(&self, input: ProjectCreateInput) -> StorageResult<Project> {
        let now = Utc::now();
        let status = input
            .status
            .unwrap_or_else(|| DEFAULT_PROJECT_STATUS.to_string());
        let needs_json = serde_json::to_string(&input.needs)?;

        let result = sqlx::query(
            r#"
            INSERT INTO projects (name, description, type, industry, status, needs, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(&input.project_type)
        .bind(&input.industry)
        .bind(&status)
        .bind(&needs_json)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!("Created project {} ({})", id, input.name);
        self.get_project(id)
            .await?
            .ok_or_else(|| StorageError::project_not_found(id))
    }

    async fn update_project(&self, id: i64, input: ProjectUpdateInput) -> StorageResult<Project> {
        let mut project = self
            .get_project(id)
            .await?
            .ok_or_else(|| StorageError::project_not_found(id))?;
        input.apply_to(&mut project);
        project.updated_at = Utc::now();
        let needs_json = serde_json::to_string(&project.needs)?;

        sqlx::query(
            r#"
            UPDATE projects
            SET name = ?, description = ?, type = ?, industry = ?, status = ?, needs = ?, updated_at = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.name)
        .bind(&project.description)
        .bind(&project.project_type)
        .bind(&project.industry)
        .bind(&project.status)
        .bind(&needs_json)
        .bind(project.updated_at)
        .bind(id)
        .execute(&self.pool)
        .await?;

        Ok(project)
    }

    async fn delete_project(&self, id: i64) -> StorageResult<()> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        debug!(
            "Deleted project {} ({} row(s))",
            id,
            result.rows_affected()
        );
        Ok(())
    }

    async fn get_document(&self, id: i64) -> StorageResult<Option<Document>> {
        let row = sqlx::query(&format!(
            "SELECT {} FROM documents WHERE id = ?",
            DOCUMENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(Self::row_to_document).transpose()
    }

    async fn list_documents_by_project(&self, project_id: i64) -> StorageResult<Vec<Document>> {
        let rows = sqlx::query(&format!(
            "SELECT {} FROM documents WHERE project_id = ? ORDER BY id ASC",
            DOCUMENT_COLUMNS
        ))
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(Self::row_to_document).collect()
    }

    async fn create_document(&self, input: DocumentCreateInput) -> StorageResult<Document> {
        if !self.project_exists(input.project_id).await? {
            return Err(StorageError::project_not_found(input.project_id));
        }

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO documents (project_id, name, type, content, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(input.project_id)
        .bind(&input.name)
        .bind(input.document_type.as_str())
        .bind(&input.content)
        .bind(now)
        .bind(now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_document(id)
            .await?
            .ok_or_else(|| StorageError::document_not_found(id))
    }

    async fn update_document(
        &self,
        id: i64,
        input: DocumentUpdateInput,
    ) -> StorageResult<Document> {
        let mut document = self
            .get_document(id)
            .await?
            .ok_or_else(|| StorageError::document_not_found(id))?;
        input.apply_to(&mut document);
        document.updated_at = Utc::now();

        sqlx::query("UPDATE documents SET name = ?, type = ?, content = ?, updated_at = ? WHERE id = ?")
            .bind(&document.name)
            .bind(document.document_type.as_str())
            .bind(&document.content)
            .bind(document.updated_at)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(document)
    }

    async fn delete_document(&self, id: i64) -> StorageResult<()> {
        sqlx::query("DELETE FROM documents WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_user(&self, id: i64) -> StorageResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password, email, name, avatar FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn get_user_by_username(&self, username: &str) -> StorageResult<Option<User>> {
        let row = sqlx::query(
            "SELECT id, username, password, email, name, avatar FROM users WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;
        row.as_ref().map(Self::row_to_user).transpose()
    }

    async fn create_user(&self, input: UserCreateInput) -> StorageResult<User> {
        let result = sqlx::query(
            "INSERT INTO users (username, password, email, name, avatar) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&input.username)
        .bind(&input.password)
        .bind(&input.email)
        .bind(&input.name)
        .bind(&input.avatar)
        .execute(&self.pool)
        .await
        .map_err(|e| map_unique_violation(e, &input))?;

        Ok(User {
            id: result.last_insert_rowid(),
            username: input.username,
            password: input.password,
            email: input.email,
            name: input.name,
            avatar: input.avatar,
        })
    }

    async fn list_collaborators(&self, project_id: i64) -> StorageResult<Vec<Collaborator>> {
        let rows = sqlx::query(
            "SELECT id, project_id, user_id, role FROM collaborators WHERE project_id = ? ORDER BY id ASC",
        )
        .bind(project_id)
        .fetch_all(&self.pool)
        .await?;
        rows.iter().map(Self::row_to_collaborator).collect()
    }

    async fn add_collaborator(
        &self,
        input: CollaboratorCreateInput,
    ) -> StorageResult<Collaborator> {
        if !self.project_exists(input.project_id).await? {
            return Err(StorageError::project_not_found(input.project_id));
        }
        if self.get_user(input.user_id).await?.is_none() {
            return Err(StorageError::user_not_found(input.user_id));
        }

        let result =
            sqlx::query("INSERT INTO collaborators (project_id, user_id, role) VALUES (?, ?, ?)")
                .bind(input.project_id)
                .bind(input.user_id)
                .bind(input.role.as_str())
                .execute(&self.pool)
                .await?;

        Ok(Collaborator {
            id: result.last_insert_rowid(),
            project_id: input.project_id,
            user_id: input.user_id,
            role: input.role,
        })
    }

    async fn remove_collaborator(&self, project_id: i64, user_id: i64) -> StorageResult<()> {
        sqlx::query(
            r#"
            DELETE FROM collaborators
            WHERE id = (
                SELECT id FROM collaborators WHERE project_id = ? AND user_id = ? LIMIT 1
            )
            "#,
        )
        .bind(project_id)
        .bind(user_id)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
