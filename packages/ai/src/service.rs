// ABOUTME: AI service for single-turn text generation calls to Anthropic Claude
// ABOUTME: Handles API requests, response parsing, and error classification

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error, info};

pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514"; // Claude Sonnet 4 (May 2025)
pub const DEFAULT_MAX_TOKENS: u32 = 2500;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

const ANTHROPIC_VERSION: &str = "2023-06-01";
const REQUEST_TIMEOUT_SECS: u64 = 600;
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum AIServiceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Failed to parse response: {0}")]
    ParseError(String),

    #[error("No API key configured")]
    NoApiKey,

    #[error("Invalid response format")]
    InvalidResponse,
}

pub type AIServiceResult<T> = Result<T, AIServiceError>;

/// Connection and generation settings for the AI service
#[derive(Debug, Clone, PartialEq)]
pub struct AIConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub api_url: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl Default for AIConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl AIConfig {
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Whether a non-blank credential is configured
    pub fn has_api_key(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}

#[derive(Debug, Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    content_type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl Usage {
    pub fn total_tokens(&self) -> u32 {
        self.input_tokens + self.output_tokens
    }
}

#[derive(Debug)]
pub struct AIResponse<T> {
    pub data: T,
    pub usage: Usage,
}

/// AI service for making text generation calls
pub struct AIService {
    client: Client,
    config: AIConfig,
}

impl AIService {
    /// Create HTTP client with timeout configuration
    fn create_client() -> AIServiceResult<Client> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(client)
    }

    /// Creates a new AI service instance from explicit configuration
    pub fn new(config: AIConfig) -> AIServiceResult<Self> {
        if !config.has_api_key() {
            info!("No Anthropic API key configured - AI generation calls will fail");
        }
        if config.model != DEFAULT_MODEL {
            info!("Using custom Anthropic model: {}", config.model);
        }

        Ok(Self {
            client: Self::create_client()?,
            config,
        })
    }

    /// Get the model being used by this service
    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn config(&self) -> &AIConfig {
        &self.config
    }

    /// Makes a single-turn text generation call to Claude
    pub async fn generate_text(
        &self,
        prompt: String,
        system_prompt: Option<String>,
    ) -> AIServiceResult<AIResponse<String>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(AIServiceError::NoApiKey)?;

        let request = AnthropicRequest {
            model: self.config.model.clone(),
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt,
            }],
            system: system_prompt,
        };

        info!(
            "Making Anthropic API text generation request: model={}, max_tokens={}",
            request.model, request.max_tokens
        );

        let response = self
            .client
            .post(&self.config.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    error!(
                        "Anthropic API request timed out after {} seconds",
                        REQUEST_TIMEOUT_SECS
                    );
                    AIServiceError::ApiError(format!(
                        "Request timed out after {} seconds. The AI service may be overloaded or unavailable.",
                        REQUEST_TIMEOUT_SECS
                    ))
                } else if e.is_connect() {
                    error!("Failed to connect to Anthropic API: {}", e);
                    AIServiceError::ApiError(format!(
                        "Connection failed: {}. Please check your internet connection.",
                        e
                    ))
                } else {
                    error!("Anthropic API request failed: {}", e);
                    AIServiceError::RequestFailed(e)
                }
            })?;

        debug!(
            "Received response from Anthropic API: status={}",
            response.status()
        );

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Anthropic API error: {} - {}", status, error_text);
            return Err(AIServiceError::ApiError(format!(
                "API returned {}: {}",
                status, error_text
            )));
        }

        let anthropic_response: AnthropicResponse = response
            .json()
            .await
            .map_err(|e| AIServiceError::ParseError(e.to_string()))?;

        // First text block carries the completion
        let text = anthropic_response
            .content
            .into_iter()
            .filter(|block| block.content_type == "text")
            .find_map(|block| block.text)
            .filter(|text| !text.trim().is_empty())
            .ok_or(AIServiceError::InvalidResponse)?;

        info!(
            "Anthropic API generation finished (tokens: {})",
            anthropic_response.usage.total_tokens()
        );

        Ok(AIResponse {
            data: text,
            usage: anthropic_response.usage,
        })
    }
}
