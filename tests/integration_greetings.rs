mod common;

use axum::http::StatusCode;
use common::{send, send_json, setup_test_app};
use serde_json::json;

#[tokio::test]
async fn test_greeting() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "GET", "/jocko", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_ref(), br#"{"API says":"What's up jocko"}"#);
}

#[tokio::test]
async fn test_greeting_decodes_path_segment() {
    let app = setup_test_app();

    let (status, body) = send_json(&app.router, "GET", "/Jos%C3%A9", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"API says": "What's up José"}));
}

#[tokio::test]
async fn test_static_routes_win_over_greeting() {
    let app = setup_test_app();

    let (status, body) = send_json(&app.router, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_array());

    let (status, body) = send(&app.router, "GET", "/index", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("<html"));
}

#[tokio::test]
async fn test_greeting_only_answers_get() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "POST", "/jocko", Some("{}")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(String::from_utf8_lossy(&body).contains("Page not found"));
}
