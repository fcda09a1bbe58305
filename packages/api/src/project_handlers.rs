// ABOUTME: HTTP request handlers for project CRUD
// ABOUTME: Project creation also generates every document the project asked for

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::info;

use blueprint_core::{
    validate_project_create, validate_project_update, Project, ProjectCreateInput,
    ProjectUpdateInput,
};

use crate::response::{created, ok, parse_project_id, ApiError, ApiJson, ApiResult};
use crate::AppState;

/// Project as listed on the dashboard
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    #[serde(flatten)]
    pub project: Project,
    pub document_count: usize,
}

pub(crate) async fn load_project(state: &AppState, id: i64) -> ApiResult<Project> {
    state
        .storage
        .get_project(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Project not found".to_string()))
}

/// List all projects with their document counts
pub async fn list_projects(State(state): State<AppState>) -> ApiResult<Response> {
    let projects = state.storage.list_projects().await?;

    let mut summaries = Vec::with_capacity(projects.len());
    for project in projects {
        let document_count = state
            .storage
            .list_documents_by_project(project.id)
            .await?
            .len();
        summaries.push(ProjectSummary {
            project,
            document_count,
        });
    }

    Ok(ok(summaries))
}

pub async fn get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_project_id(&id)?;
    Ok(ok(load_project(&state, id).await?))
}

/// Create a project and generate its requested documents
pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<ProjectCreateInput>,
) -> ApiResult<Response> {
    ApiError::check(validate_project_create(&input))?;

    let project = state.storage.create_project(input).await?;
    info!("Created project {} ({})", project.id, project.name);

    let documents = state.generator.generate_requested(&project).await?;
    if !documents.is_empty() {
        info!(
            "Generated {} document(s) for project {}",
            documents.len(),
            project.id
        );
    }

    Ok(created(project))
}

pub async fn update_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ApiJson(input): ApiJson<ProjectUpdateInput>,
) -> ApiResult<Response> {
    let id = parse_project_id(&id)?;
    load_project(&state, id).await?;
    ApiError::check(validate_project_update(&input))?;

    let project = state.storage.update_project(id, input).await?;
    Ok(ok(project))
}

/// Delete a project together with its documents and collaborators
pub async fn delete_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Response> {
    let id = parse_project_id(&id)?;
    load_project(&state, id).await?;

    state.storage.delete_project(id).await?;
    info!("Deleted project {}", id);
    Ok(StatusCode::NO_CONTENT.into_response())
}
