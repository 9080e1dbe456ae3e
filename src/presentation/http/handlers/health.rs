//! Liveness Handler

use axum::Json;

use crate::application::dto::MessageResponse;

/// `GET /` - the process is up and serving requests
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Backend Running!"))
}
