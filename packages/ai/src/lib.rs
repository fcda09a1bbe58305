// ABOUTME: AI service integration for document generation
// ABOUTME: Anthropic Messages API client with typed errors and token usage

pub mod service;

// Re-export service types
pub use service::{
    AIConfig, AIResponse, AIService, AIServiceError, AIServiceResult, Usage, DEFAULT_API_URL,
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL, DEFAULT_TEMPERATURE,
};
