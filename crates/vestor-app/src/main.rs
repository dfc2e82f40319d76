//! Vestor application binary - composition root.
//!
//! Ties the workspace crates into a single executable:
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Initialize tracing
//! 3. Build the Gemini backend client from the configured credentials
//! 4. Wire the chat orchestrator and start the axum REST API server

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use vestor_api::{create_router, AppState};
use vestor_backend::{GeminiClient, TextCompletion};
use vestor_chat::ChatOrchestrator;
use vestor_core::{Result, VestorConfig, VestorError};

mod cli;

use cli::CliArgs;

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    let config_path = args.resolve_config_path();
    let mut config = VestorConfig::load_or_default(&config_path);
    config.general.port = args.resolve_port(config.general.port);
    config.general.log_level = args.resolve_log_level(&config.general.log_level);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.general.log_level.clone())),
        )
        .init();

    // The key lives only in the environment; the config names the variable.
    let api_key = std::env::var(&config.backend.api_key_env).map_err(|_| {
        VestorError::Config(format!(
            "API key environment variable {} is not set",
            config.backend.api_key_env
        ))
    })?;

    let backend: Arc<dyn TextCompletion> = Arc::new(GeminiClient::new(
        &config.backend.endpoint,
        &config.backend.model,
        &api_key,
        config.backend.max_output_tokens,
    ));
    let orchestrator = ChatOrchestrator::new(backend, config.chat.clone());

    let port = config.general.port;
    let state = AppState::new(orchestrator, config);
    let router = create_router(state);

    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Vestor API server listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| VestorError::Api(e.to_string()))?;

    Ok(())
}
