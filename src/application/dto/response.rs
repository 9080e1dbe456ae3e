//! Response DTOs
//!
//! Envelopes returned by the HTTP handlers.

use serde::Serialize;

/// `{"message": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{"data": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// `{"message": ..., "data": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct MessageDataResponse<T> {
    pub message: String,
    pub data: T,
}

impl<T> MessageDataResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }
}

/// Response of `POST /fileUpload`
#[derive(Debug, Clone, Serialize)]
pub struct FileUploadResponse {
    pub message: String,
    pub file_path: String,
}

/// Response of `POST /upload`
#[derive(Debug, Clone, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub filename: String,
}

/// Response of `GET /auth/me`
#[derive(Debug, Clone, Serialize)]
pub struct TokenEchoResponse {
    pub message: String,
    pub token: String,
}
