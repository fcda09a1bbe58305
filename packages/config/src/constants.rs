// ABOUTME: Environment variable name constants
// ABOUTME: Centralized definitions of all environment variable names used across Blueprint

// Server Configuration
pub const BLUEPRINT_API_PORT: &str = "BLUEPRINT_API_PORT";
pub const BLUEPRINT_API_HOST: &str = "BLUEPRINT_API_HOST";
pub const PORT: &str = "PORT"; // Legacy

// CORS Configuration
pub const BLUEPRINT_CORS_ORIGIN: &str = "BLUEPRINT_CORS_ORIGIN";
pub const CORS_ORIGIN: &str = "CORS_ORIGIN"; // Legacy

// Storage Configuration
pub const BLUEPRINT_DATABASE_URL: &str = "BLUEPRINT_DATABASE_URL";
pub const BLUEPRINT_SAMPLE_DATA: &str = "BLUEPRINT_SAMPLE_DATA";

// AI Generation
pub const ANTHROPIC_API_KEY: &str = "ANTHROPIC_API_KEY";
pub const ANTHROPIC_MODEL: &str = "ANTHROPIC_MODEL";
pub const ANTHROPIC_API_URL: &str = "ANTHROPIC_API_URL";

// Logging
pub const RUST_LOG: &str = "RUST_LOG";
