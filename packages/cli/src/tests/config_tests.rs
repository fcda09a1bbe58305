use std::env;
use std::net::IpAddr;

use serial_test::serial;

use crate::config::{parse_host, Config, ConfigError, DEFAULT_CORS_ORIGIN, DEFAULT_PORT};

const VARS: [&str; 10] = [
    "BLUEPRINT_API_PORT",
    "PORT",
    "BLUEPRINT_API_HOST",
    "BLUEPRINT_CORS_ORIGIN",
    "CORS_ORIGIN",
    "BLUEPRINT_DATABASE_URL",
    "BLUEPRINT_SAMPLE_DATA",
    "ANTHROPIC_API_KEY",
    "ANTHROPIC_MODEL",
    "ANTHROPIC_API_URL",
];

fn clear_env() {
    for name in VARS {
        env::remove_var(name);
    }
}

#[test]
#[serial]
fn test_config_from_env_defaults() {
    clear_env();

    let config = Config::from_env().unwrap();

    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.host, IpAddr::from([127, 0, 0, 1]));
    assert_eq!(config.cors_origin, DEFAULT_CORS_ORIGIN);
    assert_eq!(config.database_url, None);
    assert!(!config.sample_data);
    assert!(!config.ai.has_api_key());
}

#[test]
#[serial]
fn test_config_primary_port_beats_legacy() {
    clear_env();
    env::set_var("PORT", "3000");
    assert_eq!(Config::from_env().unwrap().port, 3000);

    env::set_var("BLUEPRINT_API_PORT", "8080");
    assert_eq!(Config::from_env().unwrap().port, 8080);
    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_port() {
    clear_env();
    env::set_var("BLUEPRINT_API_PORT", "not-a-number");
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::InvalidPort(_))
    ));

    env::set_var("BLUEPRINT_API_PORT", "0");
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::PortOutOfRange(0))
    ));
    clear_env();
}

#[test]
#[serial]
fn test_config_storage_and_ai_settings() {
    clear_env();
    env::set_var("BLUEPRINT_DATABASE_URL", "sqlite://blueprint.db");
    env::set_var("BLUEPRINT_SAMPLE_DATA", "true");
    env::set_var("ANTHROPIC_API_KEY", "sk-test");
    env::set_var("ANTHROPIC_MODEL", "claude-test");
    env::set_var("CORS_ORIGIN", "https://app.example.com");

    let config = Config::from_env().unwrap();
    assert_eq!(config.database_url.as_deref(), Some("sqlite://blueprint.db"));
    assert!(config.sample_data);
    assert!(config.ai.has_api_key());
    assert_eq!(config.ai.model, "claude-test");
    assert_eq!(config.cors_origin, "https://app.example.com");
    clear_env();
}

#[test]
#[serial]
fn test_config_invalid_host() {
    clear_env();
    env::set_var("BLUEPRINT_API_HOST", "not a host");
    assert!(matches!(
        Config::from_env(),
        Err(ConfigError::InvalidHost(_))
    ));
    clear_env();

    assert_eq!(
        parse_host("localhost").unwrap(),
        IpAddr::from([127, 0, 0, 1])
    );
    assert_eq!(parse_host("0.0.0.0").unwrap(), IpAddr::from([0, 0, 0, 0]));
}
