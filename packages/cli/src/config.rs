// ABOUTME: Server configuration loaded from environment variables
// ABOUTME: Port, host, CORS origin, storage selection and AI credentials

use std::net::{IpAddr, SocketAddr};
use std::num::ParseIntError;

use blueprint_ai::AIConfig;
use blueprint_config::constants::{
    ANTHROPIC_API_KEY, ANTHROPIC_API_URL, ANTHROPIC_MODEL, BLUEPRINT_API_HOST,
    BLUEPRINT_API_PORT, BLUEPRINT_CORS_ORIGIN, BLUEPRINT_DATABASE_URL, BLUEPRINT_SAMPLE_DATA,
    CORS_ORIGIN, PORT,
};
use blueprint_config::env::{non_empty_var, parse_bool_flag, var_with_fallback};
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 4001;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid port number: {0}")]
    InvalidPort(#[from] ParseIntError),
    #[error("Port {0} is out of valid range (1-65535)")]
    PortOutOfRange(u16),
    #[error("Invalid host address: {0}")]
    InvalidHost(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub cors_origin: String,
    /// SQLite URL; in-memory storage when unset
    pub database_url: Option<String>,
    pub sample_data: bool,
    pub ai: AIConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match var_with_fallback(BLUEPRINT_API_PORT, PORT) {
            Some(raw) => parse_port(&raw)?,
            None => DEFAULT_PORT,
        };

        let host = non_empty_var(BLUEPRINT_API_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = parse_host(&host)?;

        let cors_origin = var_with_fallback(BLUEPRINT_CORS_ORIGIN, CORS_ORIGIN)
            .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        let mut ai = AIConfig {
            api_key: non_empty_var(ANTHROPIC_API_KEY),
            ..Default::default()
        };
        if let Some(model) = non_empty_var(ANTHROPIC_MODEL) {
            ai.model = model;
        }
        if let Some(url) = non_empty_var(ANTHROPIC_API_URL) {
            ai.api_url = url;
        }

        Ok(Config {
            host,
            port,
            cors_origin,
            database_url: non_empty_var(BLUEPRINT_DATABASE_URL),
            sample_data: parse_bool_flag(BLUEPRINT_SAMPLE_DATA),
            ai,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    let port = raw.trim().parse::<u16>()?;
    if port == 0 {
        return Err(ConfigError::PortOutOfRange(port));
    }
    Ok(port)
}

pub fn parse_host(raw: &str) -> Result<IpAddr, ConfigError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("localhost") {
        return Ok(IpAddr::from([127, 0, 0, 1]));
    }
    raw.parse::<IpAddr>()
        .map_err(|_| ConfigError::InvalidHost(raw.to_string()))
}
