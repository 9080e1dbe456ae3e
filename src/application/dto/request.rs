//! Request DTOs
//!
//! Data structures for API request bodies. Service bodies deserialize straight
//! into `domain::ServiceDraft`.

use serde::Deserialize;

/// Registration request
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
}
