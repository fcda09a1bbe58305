// ABOUTME: Generation orchestrator choosing between AI and template strategies
// ABOUTME: Single fallback point for AI failures; persists exactly one document per call

use std::fmt;
use std::sync::Arc;

use blueprint_ai::AIConfig;
use blueprint_core::{
    Document, DocumentCreateInput, DocumentType, DocumentUpdateInput, Project,
};
use blueprint_storage::BlueprintStorage;
use tracing::{info, warn};

use crate::ai_generator::{AIGenerator, ContentGenerator};
use crate::error::{GeneratorError, Result};
use crate::templates::render_template;

/// How the content of a document was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStrategy {
    Ai,
    Template,
    /// AI was attempted and failed
    TemplateFallback,
}

impl GenerationStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationStrategy::Ai => "ai",
            GenerationStrategy::Template => "template",
            GenerationStrategy::TemplateFallback => "template-fallback",
        }
    }
}

impl fmt::Display for GenerationStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Produces planning documents for projects and stores them.
///
/// Whether AI is available is fixed at construction. Without an AI generator
/// every request is served from templates.
#[derive(Clone)]
pub struct DocumentGenerator {
    storage: Arc<dyn BlueprintStorage>,
    ai: Option<Arc<dyn ContentGenerator>>,
}

impl DocumentGenerator {
    pub fn new(storage: Arc<dyn BlueprintStorage>, ai: Option<Arc<dyn ContentGenerator>>) -> Self {
        Self { storage, ai }
    }

    pub fn template_only(storage: Arc<dyn BlueprintStorage>) -> Self {
        Self::new(storage, None)
    }

    /// Build from AI settings; a missing or blank API key disables the AI strategy
    pub fn from_config(storage: Arc<dyn BlueprintStorage>, config: AIConfig) -> Result<Self> {
        let ai: Option<Arc<dyn ContentGenerator>> = if config.has_api_key() {
            let generator = AIGenerator::from_config(config)?;
            info!("AI document generation enabled (model {})", generator.model());
            Some(Arc::new(generator))
        } else {
            info!("No AI credential configured, documents will be generated from templates");
            None
        };
        Ok(Self::new(storage, ai))
    }

    pub fn ai_available(&self) -> bool {
        self.ai.is_some()
    }

    pub fn storage(&self) -> &Arc<dyn BlueprintStorage> {
        &self.storage
    }

    /// Produce document content without persisting it
    pub async fn generate_content(
        &self,
        project: &Project,
        document_type: DocumentType,
        use_ai: bool,
    ) -> (String, GenerationStrategy) {
        if use_ai {
            if let Some(ai) = &self.ai {
                match ai.generate(project, document_type).await {
                    Ok(content) => return (content, GenerationStrategy::Ai),
                    Err(e) => {
                        warn!(
                            "AI generation of {} for project {} failed, using template: {}",
                            document_type, project.id, e
                        );
                        return (
                            render_template(project, document_type),
                            GenerationStrategy::TemplateFallback,
                        );
                    }
                }
            }
        }
        (
            render_template(project, document_type),
            GenerationStrategy::Template,
        )
    }

    /// Generate one document for `project` and persist it as a new record
    pub async fn generate_document(
        &self,
        project: &Project,
        document_type: DocumentType,
        use_ai: bool,
    ) -> Result<Document> {
        let (content, strategy) = self.generate_content(project, document_type, use_ai).await;

        let document = self
            .storage
            .create_document(DocumentCreateInput {
                project_id: project.id,
                name: document_type.document_name(&project.name),
                document_type,
                content,
            })
            .await?;

        info!(
            "Generated {} document {} for project {} (strategy: {})",
            document_type, document.id, project.id, strategy
        );
        Ok(document)
    }

    /// Parse an external document-type tag, then generate
    pub async fn generate_document_from_tag(
        &self,
        project: &Project,
        tag: &str,
        use_ai: bool,
    ) -> Result<Document> {
        let document_type: DocumentType = tag.parse()?;
        self.generate_document(project, document_type, use_ai).await
    }

    /// Generate every document the project asked for, AI allowed
    pub async fn generate_requested(&self, project: &Project) -> Result<Vec<Document>> {
        let mut documents = Vec::new();
        for document_type in project.needs.requested() {
            documents.push(self.generate_document(project, document_type, true).await?);
        }
        Ok(documents)
    }

    /// Replace a document's content with fresh AI output. No template fallback.
    pub async fn regenerate_with_ai(&self, document_id: i64) -> Result<Document> {
        let document = self
            .storage
            .get_document(document_id)
            .await?
            .ok_or(GeneratorError::DocumentNotFound(document_id))?;
        let project = self
            .storage
            .get_project(document.project_id)
            .await?
            .ok_or(GeneratorError::ProjectNotFound(document.project_id))?;
        let ai = self.ai.as_ref().ok_or(GeneratorError::AiNotConfigured)?;

        let content = ai.generate(&project, document.document_type).await?;
        let updated = self
            .storage
            .update_document(document_id, DocumentUpdateInput::content(content))
            .await?;

        info!(
            "Regenerated document {} for project {} (strategy: {})",
            document_id,
            project.id,
            GenerationStrategy::Ai
        );
        Ok(updated)
    }
}
