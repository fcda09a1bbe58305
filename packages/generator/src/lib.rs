// ABOUTME: Document-generation pipeline for Blueprint
// ABOUTME: Template rendering, AI prompting, and the orchestrator that chooses between them

pub mod ai_generator;
pub mod error;
pub mod orchestrator;
pub mod prompts;
pub mod templates;

pub use ai_generator::{ai_error_content, is_fallback_content, AIGenerator, ContentGenerator};
pub use error::{GeneratorError, Result};
pub use orchestrator::{DocumentGenerator, GenerationStrategy};
pub use templates::render_template;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{GeneratorError, Result};
    pub use crate::orchestrator::DocumentGenerator;
    pub use blueprint_core::{Document, DocumentType, Project};
}
