//! File Upload API Tests

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use serde_json::Value;

use crate::common::{TestApp, TEST_MAX_UPLOAD_BYTES};

fn file_form(file_name: &str, contents: &[u8]) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(contents.to_vec())
            .file_name(file_name)
            .mime_type("application/octet-stream"),
    )
}

#[tokio::test]
async fn test_upload_stores_file_and_echoes_name() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/upload")
        .multipart(file_form("hello.txt", b"hello world"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "File uploaded successfully");
    assert_eq!(body["filename"], "hello.txt");

    let stored = app.stored_files();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].ends_with("-hello.txt"));
    let contents = std::fs::read(app.upload_dir.path().join(&stored[0])).unwrap();
    assert_eq!(contents, b"hello world");
}

#[tokio::test]
async fn test_file_upload_records_metadata() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/fileUpload")
        .multipart(file_form("report.pdf", b"%PDF-1.4"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "File uploaded successfully");

    let file_path = body["file_path"].as_str().unwrap();
    assert!(file_path.ends_with("-report.pdf"));
    assert!(std::path::Path::new(file_path).starts_with(app.upload_dir.path()));

    let records = app.files.all();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].file_name, "report.pdf");
    assert_eq!(records[0].file_path, file_path);
}

#[tokio::test]
async fn test_file_upload_discards_file_when_metadata_insert_fails() {
    let app = TestApp::new();
    app.files.go_offline();

    let response = app
        .server
        .post("/api/v1/fileUpload")
        .multipart(file_form("a.txt", b"contents"))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app.stored_files().is_empty());
    assert!(app.files.all().is_empty());
}

#[tokio::test]
async fn test_upload_strips_path_components() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/upload")
        .multipart(file_form("../../outside.txt", b"nope"))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["filename"], "outside.txt");

    let stored = app.stored_files();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].ends_with("-outside.txt"));
}

#[tokio::test]
async fn test_same_name_uploads_are_both_kept() {
    let app = TestApp::new();

    for contents in [b"first".as_slice(), b"second".as_slice()] {
        app.server
            .post("/api/v1/upload")
            .multipart(file_form("same.txt", contents))
            .await
            .assert_status_ok();
    }

    assert_eq!(app.stored_files().len(), 2);
}

#[tokio::test]
async fn test_upload_without_file_field_is_rejected() {
    let app = TestApp::new();
    let form = MultipartForm::new().add_text("note", "no file here");

    let response = app.server.post("/api/v1/upload").multipart(form).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_upload_with_unusable_name_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/upload")
        .multipart(file_form("..", b"data"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.stored_files().is_empty());
}

#[tokio::test]
async fn test_oversized_upload_is_rejected_without_leftovers() {
    let app = TestApp::new();
    let too_big = vec![b'x'; TEST_MAX_UPLOAD_BYTES * 2];

    let response = app
        .server
        .post("/api/v1/upload")
        .multipart(file_form("big.bin", &too_big))
        .await;

    assert!(response.status_code().is_client_error());
    assert!(app.stored_files().is_empty());
    assert!(app.files.all().is_empty());
}
