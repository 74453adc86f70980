//! Behavior with no database configured: static endpoints keep working,
//! diagnostics stay 200, and the write path fails fast with a 500.

mod common;

use common::TestApp;
use reqwest::Client;

#[tokio::test]
async fn root_works_without_database() {
    let app = TestApp::spawn_degraded().await;
    let client = Client::new();

    let response = client
        .get(&app.address)
        .send()
        .await
        .expect("Failed to execute request");

    assert!(response.status().is_success());
}

#[tokio::test]
async fn test_endpoint_reports_not_connected() {
    let app = TestApp::spawn_degraded().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/test", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["backend"], "✅ Running");
    assert_eq!(body["database"], "❌ Not Available");
    assert_eq!(body["connection_status"], "Not Connected");
    assert!(body["database_url"].is_null());
    assert!(body["database_name"].is_null());
    assert_eq!(body["collections"].as_array().map(Vec::len), Some(0));
}

#[tokio::test]
async fn valid_lead_fails_fast_with_server_error() {
    let app = TestApp::spawn_degraded().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/leads", app.address))
        .json(&serde_json::json!({ "name": "Jane Doe", "phone": "555-1234" }))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 500);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(body["error"], "Database error");
    let details = body["details"].as_str().expect("details should be text");
    assert!(details.contains("not configured"));
}

#[tokio::test]
async fn services_work_without_database() {
    let app = TestApp::spawn_degraded().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/api/services", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status().as_u16(), 200);

    let body: serde_json::Value = response.json().await.expect("Failed to parse JSON");
    assert_eq!(
        body["services"].as_array().map(Vec::len),
        Some(4),
        "catalog should be served unchanged in degraded mode"
    );
}
