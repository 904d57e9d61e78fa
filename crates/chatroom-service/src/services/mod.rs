//! Business logic services
//!
//! This module contains the service layer implementations that handle
//! validation and orchestration of store operations.

pub mod context;
pub mod error;
pub mod health;
pub mod message;
pub mod participant;
pub mod sweeper;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use health::HealthService;
pub use message::MessageService;
pub use participant::ParticipantService;
pub use sweeper::{PresenceSweeper, SweepOutcome, SweepReport};
