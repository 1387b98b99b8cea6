mod common;

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::http::StatusCode;
use common::{BOGUS, send, setup_test_app};
use roster::modules::students::store::{StoreError, StoreResult, StudentStore};
use roster::router::{MAX_BODY_BYTES, init_router};
use roster::state::AppState;
use roster::templates::load_templates;
use roster_config::{CorsConfig, ServerConfig};
use roster_models::{Student, StudentInput};

#[tokio::test]
async fn test_index_lists_students() {
    let app = setup_test_app();
    send(&app.router, "POST", "/students", Some(BOGUS)).await;

    let (status, body) = send(&app.router, "GET", "/index", None).await;
    let html = String::from_utf8_lossy(&body);

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Bogus"));
    assert!(html.contains("00100200309"));
    assert!(html.contains("050060075"));
}

#[tokio::test]
async fn test_index_without_students() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "GET", "/index", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("No students registered yet."));
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let app = setup_test_app();

    for uri in ["/does/not/exist", "/students/1/extra"] {
        let (status, body) = send(&app.router, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "uri {}", uri);
        assert!(String::from_utf8_lossy(&body).contains("Page not found"));
    }
}

#[tokio::test]
async fn test_unsupported_method_renders_404_page() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "PUT", "/students/1", Some(BOGUS)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(String::from_utf8_lossy(&body).contains("Page not found"));
}

#[tokio::test]
async fn test_assets_are_served() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "GET", "/assets/style.css", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("font-family"));
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "GET", "/api-docs/openapi.json", None).await;
    let doc: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(doc["info"]["title"], "Roster API");
    assert!(doc["paths"]["/students/cpf/{cpf}"].is_object());
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = setup_test_app();
    let body = format!(
        r#"{{"name":"{}","cpf":"00100200309","rg":"050060075"}}"#,
        "x".repeat(MAX_BODY_BYTES)
    );

    let (status, _) = send(&app.router, "POST", "/students", Some(&body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

struct PanickingStore;

#[async_trait]
impl StudentStore for PanickingStore {
    fn backend_name(&self) -> &'static str {
        "panicking"
    }

    async fn list_all(&self) -> StoreResult<Vec<Student>> {
        panic!("store exploded")
    }

    async fn create(&self, _input: &StudentInput) -> StoreResult<Student> {
        panic!("store exploded")
    }

    async fn find_by_id(&self, _id: i64) -> StoreResult<Option<Student>> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_cpf(&self, _cpf: &str) -> StoreResult<Option<Student>> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn update(&self, _id: i64, _input: &StudentInput) -> StoreResult<Option<Student>> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn delete(&self, _id: i64) -> StoreResult<bool> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn migrate(&self) -> StoreResult<()> {
        Ok(())
    }
}

fn broken_app() -> Router {
    let state = AppState::new(
        Arc::new(PanickingStore),
        load_templates("templates").unwrap(),
        ServerConfig::default(),
        CorsConfig::default(),
    );
    init_router(state)
}

#[tokio::test]
async fn test_panic_becomes_internal_server_error() {
    let app = broken_app();

    let (status, body) = send(&app, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body, serde_json::json!({"error": "Internal server error"}));

    // The service keeps answering after a panic
    let (status, _) = send(&app, "POST", "/students", Some(BOGUS)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    let (status, _) = send(&app, "GET", "/jocko", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_store_failure_becomes_internal_server_error() {
    let app = broken_app();

    for (method, uri) in [
        ("GET", "/students/1"),
        ("GET", "/students/cpf/00100200309"),
        ("DELETE", "/students/1"),
    ] {
        let (status, body) = send(&app, method, uri, None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{} {}", method, uri);
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert!(body["error"].is_string());
    }
}

#[tokio::test]
async fn test_swagger_ui_is_served() {
    let app = setup_test_app();

    let (status, body) = send(&app.router, "GET", "/docs/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8_lossy(&body).contains("swagger-ui"));
}
