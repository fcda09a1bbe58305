// ABOUTME: AI-backed content generation for planning documents
// ABOUTME: ContentGenerator seam plus the Claude implementation and its soft-failure variant

use async_trait::async_trait;
use blueprint_ai::{AIConfig, AIService};
use blueprint_core::{DocumentType, Project};
use tracing::{error, info};

use crate::error::Result;
use crate::prompts::{document_prompt, SYSTEM_PROMPT};

pub const AI_FAILURE_MESSAGE: &str = "Failed to generate content using AI. Please try again later.";

const AI_ERROR_CLASS: &str = "ai-error-message";

/// Produces the HTML body of a document from a language model
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, project: &Project, document_type: DocumentType) -> Result<String>;
}

/// HTML block shown in place of a document when AI generation failed
pub fn ai_error_content(message: &str) -> String {
    format!(
        r#"<div class="{class}">
  <h2>AI Generation Error</h2>
  <p>{message}</p>
  <p>Please try again later or contact support if the problem persists.</p>
</div>"#,
        class = AI_ERROR_CLASS,
        message = message
    )
}

/// Whether `content` is the AI error block rather than a real document
pub fn is_fallback_content(content: &str) -> bool {
    content.contains(&format!("class=\"{}\"", AI_ERROR_CLASS))
}

pub struct AIGenerator {
    service: AIService,
}

impl AIGenerator {
    pub fn new(service: AIService) -> Self {
        Self { service }
    }

    pub fn from_config(config: AIConfig) -> Result<Self> {
        Ok(Self::new(AIService::new(config)?))
    }

    pub fn model(&self) -> &str {
        self.service.model()
    }

    /// Like [`ContentGenerator::generate`], but a failure yields the AI error block
    /// instead of an `Err`.
    pub async fn generate_or_fallback(&self, project: &Project, document_type: DocumentType) -> String {
        match self.generate(project, document_type).await {
            Ok(content) => content,
            Err(_) => ai_error_content(AI_FAILURE_MESSAGE),
        }
    }
}

#[async_trait]
impl ContentGenerator for AIGenerator {
    async fn generate(&self, project: &Project, document_type: DocumentType) -> Result<String> {
        let prompt = document_prompt(project, document_type);

        info!(
            "Generating {} for project {} with model {}",
            document_type,
            project.id,
            self.service.model()
        );

        let response = self
            .service
            .generate_text(prompt, Some(SYSTEM_PROMPT.to_string()))
            .await
            .map_err(|e| {
                error!("AI generation of {} failed: {}", document_type, e);
                e
            })?;

        info!(
            "Generated {} ({} tokens)",
            document_type,
            response.usage.total_tokens()
        );

        Ok(response.data)
    }
}
