//! Custom Extractors
//!
//! Axum extractors for authentication and request parsing.

use axum::{extract::FromRequestParts, http::request::Parts, RequestPartsExt};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};

use crate::shared::error::AppError;

/// Bearer token taken verbatim from the `Authorization` header.
///
/// The token is not verified; this only guarantees a non-empty bearer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BearerToken(pub String);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|_| AppError::Unauthorized("Not authenticated".into()))?;

        let token = bearer.token().trim();
        if token.is_empty() {
            return Err(AppError::Unauthorized("Not authenticated".into()));
        }

        Ok(BearerToken(token.to_string()))
    }
}
