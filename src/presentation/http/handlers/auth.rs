//! Authentication Handlers

use axum::{extract::State, Json};
use axum_extra::extract::WithRejection;

use crate::application::dto::{MessageResponse, RegisterRequest, TokenEchoResponse};
use crate::application::services::{AuthService, AuthServiceImpl};
use crate::presentation::http::extractors::BearerToken;
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> Result<Json<MessageResponse>, AppError> {
    let auth_service = AuthServiceImpl::new(state.users.clone());

    auth_service.register(&body.email, &body.password).await?;

    Ok(Json(MessageResponse::new("User registered successfully")))
}

/// Echo the caller's bearer token.
///
/// Placeholder for a real identity endpoint: the token is not verified.
pub async fn current_user(BearerToken(token): BearerToken) -> Json<TokenEchoResponse> {
    Json(TokenEchoResponse {
        message: "Authenticated".into(),
        token,
    })
}
