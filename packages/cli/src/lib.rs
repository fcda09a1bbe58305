// ABOUTME: Blueprint command-line application library
// ABOUTME: Configuration, logging setup, API server bootstrap and offline rendering

pub mod config;
pub mod generate;
pub mod server;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigError};
pub use generate::{render_document, RenderRequest};
pub use server::{build_app, run_server};

/// Install the global tracing subscriber. `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();
}
