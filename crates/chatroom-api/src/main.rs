//! Chatroom API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p chatroom-api
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use chatroom_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = AppConfig::from_env();

    let tracing_result = match &config {
        Ok(config) => try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)),
        Err(_) => try_init_tracing(),
    };
    if let Err(e) = tracing_result {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(1);
    }
}

async fn run(config: AppConfig) -> anyhow::Result<()> {
    info!(
        name = %config.app.name,
        env = ?config.app.env,
        port = config.api.port,
        store = ?config.store.backend,
        "Starting chatroom API server"
    );

    chatroom_api::run(config).await?;

    Ok(())
}
