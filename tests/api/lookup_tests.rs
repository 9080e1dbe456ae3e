//! Lookup API Tests

use catalog_server::domain::LookupRecord;
use serde_json::json;

use crate::common::TestApp;

#[tokio::test]
async fn test_lookup_returns_all_rows() {
    let app = TestApp::with_lookups(vec![
        LookupRecord {
            id: 1,
            name: "Active".into(),
        },
        LookupRecord {
            id: 2,
            name: "Archived".into(),
        },
    ]);

    let response = app.server.get("/api/v1/lookup/getLookupData").await;

    response.assert_status_ok();
    response.assert_json(&json!([
        {"id": 1, "name": "Active"},
        {"id": 2, "name": "Archived"}
    ]));
}

#[tokio::test]
async fn test_lookup_with_no_rows_is_empty_list() {
    let app = TestApp::new();

    let response = app.server.get("/api/v1/lookup/getLookupData").await;

    response.assert_status_ok();
    response.assert_json(&json!([]));
}
