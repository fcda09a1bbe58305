// ABOUTME: Offline document rendering for the `generate` subcommand
// ABOUTME: Builds a transient project and renders one document without touching storage

use blueprint_ai::AIConfig;
use blueprint_core::{
    validate_project_create, DocumentType, Project, ProjectCreateInput, DEFAULT_PROJECT_STATUS,
};
use blueprint_generator::{render_template, AIGenerator};
use chrono::Utc;

/// Inputs for a one-off render
#[derive(Debug, Clone)]
pub struct RenderRequest {
    pub name: String,
    pub project_type: String,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub document_type: DocumentType,
    pub use_ai: bool,
}

fn transient_project(request: &RenderRequest) -> anyhow::Result<Project> {
    let mut input = ProjectCreateInput::new(request.name.clone(), request.project_type.clone());
    input.industry = request.industry.clone();
    input.description = request.description.clone();

    let errors = validate_project_create(&input);
    if let Some(first) = errors.first() {
        anyhow::bail!("Invalid project: {}", first);
    }

    let now = Utc::now();
    Ok(Project {
        id: 0,
        name: input.name,
        description: input.description,
        project_type: input.project_type,
        industry: input.industry,
        status: DEFAULT_PROJECT_STATUS.to_string(),
        needs: input.needs,
        created_at: now,
        updated_at: now,
    })
}

/// Render a document body. With `use_ai`, an AI failure yields the AI error block.
pub async fn render_document(request: &RenderRequest, ai: &AIConfig) -> anyhow::Result<String> {
    let project = transient_project(request)?;

    if request.use_ai {
        if !ai.has_api_key() {
            anyhow::bail!("--ai requires ANTHROPIC_API_KEY to be set");
        }
        let generator = AIGenerator::from_config(ai.clone())?;
        return Ok(generator
            .generate_or_fallback(&project, request.document_type)
            .await);
    }

    Ok(render_template(&project, request.document_type))
}
