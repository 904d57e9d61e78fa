//! # chatroom-service
//!
//! Application layer containing business logic, services, the presence
//! sweeper, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    HealthService, MessageService, ParticipantService, PresenceSweeper, ServiceContext,
    ServiceError, ServiceResult, SweepOutcome, SweepReport,
};
