//! Message limit extractor
//!
//! Extracts the optional `limit` query parameter of `GET /messages`.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::response::ApiError;

/// Raw query parameters
#[derive(Debug, Deserialize)]
pub struct MessageLimitParams {
    /// Kept as text so a non-numeric value is reported as a validation error
    #[serde(default)]
    pub limit: Option<String>,
}

/// Maximum number of messages to return; `None` means all of them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageLimit(pub Option<i64>);

impl TryFrom<MessageLimitParams> for MessageLimit {
    type Error = ApiError;

    fn try_from(params: MessageLimitParams) -> Result<Self, Self::Error> {
        let Some(raw) = params.limit else {
            return Ok(Self(None));
        };

        match raw.trim().parse::<i64>() {
            Ok(limit) if limit > 0 => Ok(Self(Some(limit))),
            _ => Err(ApiError::invalid_query("limit must be a positive integer")),
        }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for MessageLimit
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<MessageLimitParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.body_text()))?;

        MessageLimit::try_from(params)
    }
}
