//! Claude Relay - Headless Daemon
//!
//! Serves the Claude Messages API on `/v1/messages` (and on
//! `/<upstream prefix>/<model>/v1/messages`) and forwards every request to an
//! OpenAI ChatCompletions upstream, translating both directions.

use anyhow::Result;
use clap::Parser;
use relay_core::modules::config::{load_config, validate_config};
use relay_core::proxy::{build_proxy_router, AppState};
use relay_types::RelayConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod server_utils;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_new(&cli.log_level).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut config = load_config(cli.config.as_deref())?;
    cli.overrides.apply(&mut config);
    validate_config(&config)?;

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => serve(config).await,
        Commands::Config { show_secrets } => {
            if !show_secrets && !config.keyword_route.api_key.is_empty() {
                config.keyword_route.api_key = "********".to_string();
            }
            println!("{}", serde_json::to_string_pretty(&config)?);
            Ok(())
        },
    }
}

async fn serve(config: RelayConfig) -> Result<()> {
    info!("🚀 Claude Relay v{} starting...", env!("CARGO_PKG_VERSION"));
    info!(
        "🔀 Keyword route: models containing '{}' → {} @ {}",
        config.keyword_route.keyword, config.keyword_route.model_name, config.keyword_route.base_url
    );
    info!("🔀 Default upstream: {}", config.default_base_url);

    let listener = server_utils::create_listener(&config).await?;
    let state = AppState::from_config(config)?;
    let app = build_proxy_router(state);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Claude Relay stopped");
    Ok(())
}
