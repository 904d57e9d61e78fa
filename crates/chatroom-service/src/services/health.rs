//! Health service

use tracing::{instrument, warn};

use crate::dto::ReadinessResponse;

use super::context::ServiceContext;

/// Store readiness checks
pub struct HealthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> HealthService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Round-trip to the store and report readiness
    #[instrument(skip(self))]
    pub async fn readiness(&self) -> ReadinessResponse {
        let store_healthy = match self.ctx.store_health().ping().await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Store health check failed");
                false
            }
        };

        ReadinessResponse::ready(store_healthy)
    }
}
