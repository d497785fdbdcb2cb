//! Episodic HTTP service binary.
//!
//! Loads `.env`, reads configuration from flags and environment, picks the
//! episode store and serves the episode API until Ctrl-C.

use anyhow::{Context, Result};
use clap::Parser;
use episodic::{
    AppState, DEFAULT_BIND, DEFAULT_POOL_SIZE, DeepSeekPrompter, LoggingConfig, PrompterConfig,
    ServiceConfig, create_router, default_registry, init_logging,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Command-line arguments for the service.
#[derive(Parser, Debug)]
#[command(name = "episodic")]
#[command(about = "Podcast episode service with generated title and description alternatives")]
#[command(version)]
struct Args {
    /// Address to listen on
    #[arg(long, env = "EPISODIC_BIND", default_value = DEFAULT_BIND)]
    bind: String,

    /// SQLite database URL (episodes are kept in memory when unset)
    #[arg(long, env = "DB_URI")]
    database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, env = "EPISODIC_POOL_SIZE", default_value_t = DEFAULT_POOL_SIZE)]
    pool_size: u32,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, env = "EPISODIC_JSON_LOGS")]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    init_logging(
        &LoggingConfig::new("episodic")
            .with_log_level(log_level)
            .with_json_logs(args.json_logs),
    )?;

    let config = ServiceConfig::new(&args.bind, args.database_url, args.pool_size)?;
    let store = config
        .open_store()
        .context("Failed to open episode store")?;

    let prompter_config = PrompterConfig::from_env();
    if prompter_config.api_key.is_none() {
        warn!("DEEPSEEK_API_KEY not set, alternative generation will fail");
    }
    info!(
        base_url = %prompter_config.base_url,
        model = %prompter_config.model,
        "Text generation configured"
    );
    let prompter = Arc::new(DeepSeekPrompter::new(prompter_config));

    let state = AppState::new(store, prompter, default_registry());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind))?;
    info!(address = %listener.local_addr()?, "Episodic listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Episodic stopped");
    Ok(())
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received, stopping gracefully");
}
