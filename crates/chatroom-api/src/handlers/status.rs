//! Heartbeat handler

use axum::{extract::State, http::StatusCode};
use chatroom_service::ParticipantService;

use crate::extractors::UserHeader;
use crate::response::ApiResult;
use crate::state::AppState;

/// Keep the caller in the room
///
/// POST /status
pub async fn heartbeat(State(state): State<AppState>, user: UserHeader) -> ApiResult<StatusCode> {
    ParticipantService::new(state.service_context())
        .heartbeat(user.as_deref())
        .await?;
    Ok(StatusCode::OK)
}
