//! Local Upload Storage
//!
//! Writes uploaded files under a single root directory. Client filenames are
//! reduced to a safe basename and prefixed with a generated key, so the stored
//! path never depends on client-controlled path components.
//!
//! Files are streamed into a hidden `.part` file next to their final location and
//! renamed into place on commit; an interrupted upload never leaves a partial
//! file under the final name.

use std::path::{Path, PathBuf};

use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::shared::error::AppError;

/// Longest sanitized filename kept (bytes, all ASCII after sanitizing).
const MAX_FILE_NAME_LEN: usize = 200;

/// Reduce a client-supplied filename to a safe basename.
///
/// Only the last path component is kept, characters outside `[A-Za-z0-9._-]`
/// become `_` and leading dots are dropped. Returns `None` when nothing usable
/// remains.
pub fn sanitize_file_name(name: &str) -> Option<String> {
    let base = name.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed: String = cleaned
        .trim_start_matches('.')
        .chars()
        .take(MAX_FILE_NAME_LEN)
        .collect();

    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

/// A file that has been fully written to storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredFile {
    /// Sanitized client filename
    pub file_name: String,

    /// Final location on disk
    pub path: PathBuf,
}

/// Upload storage rooted at a local directory.
#[derive(Debug, Clone)]
pub struct LocalFileStorage {
    root: PathBuf,
}

impl LocalFileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Create the root directory if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<(), AppError> {
        fs::create_dir_all(&self.root).await?;
        Ok(())
    }

    /// Start writing a new upload for the given client filename.
    pub async fn begin(&self, client_name: &str) -> Result<PendingUpload, AppError> {
        let file_name = sanitize_file_name(client_name)
            .ok_or_else(|| AppError::BadRequest("Invalid file name".into()))?;

        self.ensure_root().await?;

        let key = format!("{}-{}", Uuid::new_v4(), file_name);
        let final_path = self.root.join(&key);
        let temp_path = self.root.join(format!(".{}.part", key));
        let file = File::create(&temp_path).await?;

        Ok(PendingUpload {
            file,
            file_name,
            temp_path,
            final_path,
            written: 0,
            finished: false,
        })
    }

    /// Delete a stored file whose upload could not be completed.
    pub async fn remove(&self, stored: &StoredFile) {
        if let Err(e) = fs::remove_file(&stored.path).await {
            tracing::warn!(path = %stored.path.display(), "Failed to remove stored upload: {}", e);
        }
    }
}

/// An upload being streamed to disk.
///
/// Dropping it before `commit` succeeds removes the `.part` file, which covers
/// failed renames and handlers cancelled by a client disconnect.
#[derive(Debug)]
pub struct PendingUpload {
    file: File,
    file_name: String,
    temp_path: PathBuf,
    final_path: PathBuf,
    written: u64,
    finished: bool,
}

impl PendingUpload {
    pub async fn write_chunk(&mut self, chunk: &[u8]) -> Result<(), AppError> {
        self.file.write_all(chunk).await?;
        self.written += chunk.len() as u64;
        Ok(())
    }

    /// Bytes written so far.
    pub fn written(&self) -> u64 {
        self.written
    }

    /// Flush and move the file to its final name.
    pub async fn commit(mut self) -> Result<StoredFile, AppError> {
        self.file.flush().await?;
        fs::rename(&self.temp_path, &self.final_path).await?;
        self.finished = true;

        tracing::debug!(
            path = %self.final_path.display(),
            bytes = self.written,
            "Upload stored"
        );

        Ok(StoredFile {
            file_name: std::mem::take(&mut self.file_name),
            path: self.final_path.clone(),
        })
    }

    /// Drop the partial file.
    pub async fn abort(mut self) {
        self.finished = true;
        if let Err(e) = fs::remove_file(&self.temp_path).await {
            tracing::warn!(path = %self.temp_path.display(), "Failed to remove partial upload: {}", e);
        }
    }
}

impl Drop for PendingUpload {
    fn drop(&mut self) {
        if self.finished {
            return;
        }

        match std::fs::remove_file(&self.temp_path) {
            Ok(()) => tracing::debug!(path = %self.temp_path.display(), "Discarded partial upload"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %self.temp_path.display(), "Failed to remove partial upload: {}", e)
            }
        }
    }
}
