//! File Upload Handlers
//!
//! Both upload endpoints read the multipart field named `file` and stream it
//! into local storage. `/fileUpload` also records the upload in `file_data`.

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

use crate::application::dto::{FileUploadResponse, UploadResponse};
use crate::domain::NewFileRecord;
use crate::infrastructure::storage::{LocalFileStorage, StoredFile};
use crate::shared::error::AppError;
use crate::startup::AppState;

const UPLOAD_FIELD: &str = "file";

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(e.body_text())
    } else {
        AppError::BadRequest(e.body_text())
    }
}

/// Stream the `file` field of the request into storage.
async fn receive_file(
    storage: &LocalFileStorage,
    mut multipart: Multipart,
) -> Result<StoredFile, AppError> {
    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let client_name = field.file_name().unwrap_or_default().to_string();
        let mut upload = storage.begin(&client_name).await.inspect_err(|_| {
            tracing::warn!(file_name = %client_name, "Rejected upload");
        })?;

        loop {
            match field.chunk().await {
                Ok(Some(chunk)) => {
                    if let Err(e) = upload.write_chunk(&chunk).await {
                        upload.abort().await;
                        return Err(e);
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    upload.abort().await;
                    return Err(multipart_error(e));
                }
            }
        }

        return upload.commit().await;
    }

    Err(AppError::Validation("file: field required".into()))
}

/// Upload a file and record its metadata
pub async fn file_upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<FileUploadResponse>, AppError> {
    let stored = receive_file(&state.storage, multipart).await?;
    let file_path = stored.path.to_string_lossy().into_owned();

    let record = NewFileRecord {
        file_name: stored.file_name.clone(),
        file_path: file_path.clone(),
    };

    // A file without its metadata row is unreachable; drop it.
    if let Err(e) = state.files.create(&record).await {
        state.storage.remove(&stored).await;
        return Err(e);
    }

    Ok(Json(FileUploadResponse {
        message: "File uploaded successfully".into(),
        file_path,
    }))
}

/// Upload a file
pub async fn upload(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let stored = receive_file(&state.storage, multipart).await?;

    Ok(Json(UploadResponse {
        message: "File uploaded successfully".into(),
        filename: stored.file_name,
    }))
}
