//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, the presence sweeper, and configuration.

use std::sync::Arc;

use chatroom_common::AppConfig;
use chatroom_service::{PresenceSweeper, ServiceContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Inactivity sweeper over the same stores
    sweeper: Arc<PresenceSweeper>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let sweeper = PresenceSweeper::new(service_context.clone());
        Self {
            service_context: Arc::new(service_context),
            sweeper: Arc::new(sweeper),
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the presence sweeper
    pub fn sweeper(&self) -> &Arc<PresenceSweeper> {
        &self.sweeper
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("sweeper", &self.sweeper)
            .field("config", &"AppConfig")
            .finish()
    }
}
