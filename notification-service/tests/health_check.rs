mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn health_check_works() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "OK");
    assert_eq!(body["environment"], "development");
    assert!(body["uptime"].as_f64().expect("uptime is numeric") >= 0.0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn uptime_counts_from_process_start() {
    let started = service_core::utils::process_start();
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;
    let waited = started.elapsed().as_secs_f64();

    let app = TestApp::spawn().await;
    let body: Value = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert!(body["uptime"].as_f64().expect("uptime is numeric") >= waited);
}

#[tokio::test]
async fn health_check_reports_environment() {
    let app = TestApp::spawn_in("production").await;

    let body: Value = app
        .client
        .get(app.url("/health"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["environment"], "production");
}

#[tokio::test]
async fn root_lists_endpoints() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/"))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["version"], "1.0.0");
    assert_eq!(
        body["endpoints"],
        json!({
            "health": "/health",
            "root": "/",
            "notification": "/notification/create-new-notification"
        })
    );
}

#[tokio::test]
async fn unknown_paths_return_404_for_any_method() {
    let app = TestApp::spawn().await;

    let get = app
        .client
        .get(app.url("/foo/bar"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(get.status(), StatusCode::NOT_FOUND);
    let body: Value = get.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({"error": "Route not found", "path": "/foo/bar"}));

    let post = app
        .client
        .post(app.url("/foo/bar"))
        .json(&json!({"content": "x"}))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(post.status(), StatusCode::NOT_FOUND);
    let body: Value = post.json().await.expect("Failed to parse response");
    assert_eq!(body["path"], "/foo/bar");
}

#[tokio::test]
async fn wrong_method_on_known_path_returns_404() {
    let app = TestApp::spawn().await;

    let response = app
        .client
        .get(app.url("/notification/create-new-notification"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["path"], "/notification/create-new-notification");

    let response = app
        .client
        .delete(app.url("/health"))
        .send()
        .await
        .expect("Failed to execute request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn not_found_path_keeps_query_string() {
    let app = TestApp::spawn().await;

    let body: Value = app
        .client
        .get(app.url("/missing?page=2"))
        .send()
        .await
        .expect("Failed to execute request")
        .json()
        .await
        .expect("Failed to parse response");

    assert_eq!(body["path"], "/missing?page=2");
}
