//! Message handlers
//!
//! Endpoints for posting and reading messages.

use axum::{extract::State, Json};
use chatroom_service::dto::{CreateMessageRequest, MessageResponse};
use chatroom_service::MessageService;

use crate::extractors::{MessageLimit, RequiredUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Messages visible to the caller, newest first
///
/// GET /messages?limit={n}
pub async fn get_messages(
    State(state): State<AppState>,
    RequiredUser(user): RequiredUser,
    MessageLimit(limit): MessageLimit,
) -> ApiResult<Json<Vec<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let messages = service.list(&user, limit).await?;
    Ok(Json(messages))
}

/// Post a message
///
/// POST /messages
pub async fn create_message(
    State(state): State<AppState>,
    RequiredUser(user): RequiredUser,
    ValidatedJson(request): ValidatedJson<CreateMessageRequest>,
) -> ApiResult<Created<Json<MessageResponse>>> {
    let service = MessageService::new(state.service_context());
    let response = service.post(&user, request).await?;
    Ok(Created(Json(response)))
}
