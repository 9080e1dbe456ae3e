//! Service Catalog API Tests

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use test_case::test_case;
use uuid::Uuid;

use crate::common::{service_body, TestApp};

fn service_ids(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .expect("data should be a list")
        .iter()
        .map(|s| s["id"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_categories_returns_fixtures() {
    let app = TestApp::new();

    let response = app.server.get("/api/v1/categories").await;

    response.assert_status_ok();
    response.assert_json(&json!({
        "data": [
            {"id": "1", "levelData": "Category 1"},
            {"id": "2", "levelData": "Category 2"}
        ]
    }));
}

#[test_case("1", &["101", "102"] ; "first category")]
#[test_case("2", &["201"] ; "second category")]
#[test_case("42", &[] ; "unknown parent is empty")]
#[tokio::test]
async fn test_subcategories_filter_by_parent(parent_id: &str, expected: &[&str]) {
    let app = TestApp::new();

    let response = app
        .server
        .get(&format!("/api/v1/subcategories/{}", parent_id))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    let ids: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, expected);
}

#[tokio::test]
async fn test_list_services_returns_seeded_catalog() {
    let app = TestApp::new();

    let body: Value = app.server.get("/api/v1/services").await.json();
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["service"].as_str().unwrap())
        .collect();

    assert_eq!(
        names,
        vec![
            "SEO Optimization",
            "Social Media Management",
            "Graphic Design",
            "Video Editing",
            "Email Marketing"
        ]
    );
}

#[tokio::test]
async fn test_create_service_assigns_fresh_uuid() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/services")
        .json(&json!({
            "categoryId": "1",
            "subCategoryId": "101",
            "version": "1.0",
            "service": "Test",
            "serviceList": []
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Service created successfully");
    assert_eq!(body["data"]["service"], "Test");
    assert!(Uuid::parse_str(body["data"]["id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_service_discards_client_id() {
    let app = TestApp::new();
    let mut request = service_body("Client Id");
    request["id"] = json!("client-supplied");

    let body: Value = app.server.post("/api/v1/services").json(&request).await.json();

    let id = body["data"]["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert_ne!(id, "client-supplied");
}

#[tokio::test]
async fn test_created_services_are_appended_in_order() {
    let app = TestApp::new();
    let before = service_ids(&app.server.get("/api/v1/services").await.json());

    let mut created = Vec::new();
    for name in ["First", "Second", "Third"] {
        let body: Value = app
            .server
            .post("/api/v1/services")
            .json(&service_body(name))
            .await
            .json();
        created.push(body["data"]["id"].as_str().unwrap().to_string());
    }

    let after = service_ids(&app.server.get("/api/v1/services").await.json());
    let expected: Vec<String> = before.into_iter().chain(created).collect();
    assert_eq!(after, expected);
}

#[tokio::test]
async fn test_get_service_by_id() {
    let app = TestApp::new();
    let created: Value = app
        .server
        .post("/api/v1/services")
        .json(&service_body("Lookup Me"))
        .await
        .json();
    let id = created["data"]["id"].as_str().unwrap();

    let response = app.server.get(&format!("/api/v1/services/{}", id)).await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"], created["data"]);
}

#[tokio::test]
async fn test_get_unknown_service_is_not_found() {
    let app = TestApp::new();

    let response = app.server.get("/api/v1/services/does-not-exist").await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["message"], "Service not found");
}

#[tokio::test]
async fn test_update_preserves_path_id_and_replaces_fields() {
    let app = TestApp::new();
    let created: Value = app
        .server
        .post("/api/v1/services")
        .json(&service_body("Original"))
        .await
        .json();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = app
        .server
        .put(&format!("/api/v1/services/{}", id))
        .json(&json!({
            "id": "somebody-else",
            "categoryId": "2",
            "subCategoryId": "201",
            "version": "9.9",
            "service": "Replaced",
            "serviceList": []
        }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Service updated successfully");
    assert_eq!(
        body["data"],
        json!({
            "id": id,
            "categoryId": "2",
            "subCategoryId": "201",
            "version": "9.9",
            "service": "Replaced",
            "serviceList": []
        })
    );

    let fetched: Value = app
        .server
        .get(&format!("/api/v1/services/{}", id))
        .await
        .json();
    assert_eq!(fetched["data"], body["data"]);
}

#[tokio::test]
async fn test_update_unknown_service_leaves_catalog_unchanged() {
    let app = TestApp::new();
    let before: Value = app.server.get("/api/v1/services").await.json();

    let response = app
        .server
        .put("/api/v1/services/does-not-exist")
        .json(&service_body("Ghost"))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let after: Value = app.server.get("/api/v1/services").await.json();
    assert_eq!(after, before);
}

#[tokio::test]
async fn test_delete_removes_service() {
    let app = TestApp::new();
    let created: Value = app
        .server
        .post("/api/v1/services")
        .json(&service_body("Doomed"))
        .await
        .json();
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let response = app.server.delete(&format!("/api/v1/services/{}", id)).await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Service deleted successfully"}));
    app.server
        .get(&format!("/api/v1/services/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_unknown_service_succeeds_without_changes() {
    let app = TestApp::new();
    let before = app.catalog.len();

    let response = app.server.delete("/api/v1/services/does-not-exist").await;

    response.assert_status_ok();
    response.assert_json(&json!({"message": "Service deleted successfully"}));
    assert_eq!(app.catalog.len(), before);
}

#[tokio::test]
async fn test_create_with_missing_fields_is_rejected() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/api/v1/services")
        .json(&json!({"service": "Incomplete"}))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = response.json();
    assert_eq!(body["code"], 10007);
}

#[tokio::test]
async fn test_create_with_wrong_step_shape_is_rejected() {
    let app = TestApp::new();
    let mut request = service_body("Bad Steps");
    request["serviceList"] = json!([{"id": "1", "labelNo": "one"}]);

    let response = app.server.post("/api/v1/services").json(&request).await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
}
