//! `user` header extractors
//!
//! Clients identify themselves by sending their participant name in the
//! `user` header.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::response::ApiError;

/// Header carrying the caller's participant name
pub const USER_HEADER: &str = "user";

/// The `user` header if present and non-blank
///
/// Values are decoded as UTF-8 so names outside ASCII survive.
#[derive(Debug, Clone, Default)]
pub struct UserHeader(pub Option<String>);

impl UserHeader {
    fn from_parts(parts: &Parts) -> Self {
        let value = parts
            .headers
            .get(USER_HEADER)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(String::from);
        Self(value)
    }

    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for UserHeader
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

/// The `user` header, rejecting the request with 422 when missing
#[derive(Debug, Clone)]
pub struct RequiredUser(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for RequiredUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        UserHeader::from_parts(parts)
            .0
            .map(Self)
            .ok_or(ApiError::MissingHeader(USER_HEADER))
    }
}
