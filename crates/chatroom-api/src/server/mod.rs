//! Server setup and initialization
//!
//! Provides the application builder, store selection, and the server runner.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use chatroom_common::{AppConfig, AppError, StoreBackend};
use chatroom_db::{create_pool, run_migrations, MemoryStore, PoolConfig};
use chatroom_service::ServiceContext;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the application with the basic middleware stack
///
/// No rate limiting; used by tests and local tooling.
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the production application
///
/// Room routes get rate limiting and configured CORS, health routes only the
/// basic stack so probes are never throttled.
pub fn create_app_with_config(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let room = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(room.merge(health).with_state(state))
}

/// Initialize the configured store and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let service_context = match config.store.backend {
        StoreBackend::Memory => {
            warn!("Using in-memory store; data is lost on restart");
            ServiceContext::in_memory(Arc::new(MemoryStore::new()), config.presence.clone())
        }
        StoreBackend::Postgres => {
            let db_config = config
                .store
                .database
                .as_ref()
                .ok_or_else(|| AppError::Config("DATABASE_URL is required".to_string()))?;

            info!("Connecting to PostgreSQL...");
            let pool = create_pool(&PoolConfig::from(db_config))
                .await
                .map_err(|e| AppError::Database(e.to_string()))?;
            info!("PostgreSQL connection established");

            run_migrations(&pool, &db_config.migrations_dir)
                .await
                .map_err(|e| AppError::Database(format!("Migration failed: {e}")))?;

            ServiceContext::postgres(pool, config.presence.clone())
        }
    };

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server until `shutdown` resolves
pub async fn run_server<F>(app: Router, addr: SocketAddr, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
///
/// Starts the presence sweeper next to the HTTP server and stops it once the
/// server has drained after Ctrl-C.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr: SocketAddr = config
        .api
        .address()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address: {e}")))?;

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app_with_config(state.clone())?;

    let sweeper = state.sweeper().clone();
    let sweeper_task = sweeper.clone().start();

    let result = run_server(app, addr, shutdown_signal()).await;

    sweeper.stop();
    if let Some(task) = sweeper_task {
        if let Err(e) = task.await {
            warn!(error = %e, "Presence sweeper task ended abnormally");
        }
    }

    info!("Server stopped");
    result
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "Failed to listen for shutdown signal");
            std::future::pending::<()>().await;
        }
    }
}
