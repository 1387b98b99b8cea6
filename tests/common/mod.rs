use std::sync::Arc;

use axum::Router;
use axum::body::{Body, Bytes};
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use roster::modules::students::store::MemoryStudentStore;
use roster::router::init_router;
use roster::state::AppState;
use roster::templates::load_templates;
use roster_config::{CorsConfig, ServerConfig};
use serde_json::Value;
use tower::ServiceExt;

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStudentStore>,
}

pub fn setup_test_app() -> TestApp {
    let store = Arc::new(MemoryStudentStore::new());
    let state = AppState::new(
        store.clone(),
        load_templates("templates").unwrap(),
        ServerConfig::default(),
        CorsConfig::default(),
    );

    TestApp {
        router: init_router(state),
        store,
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Bytes) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, body)
}

#[allow(dead_code)]
pub async fn send_json(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let (status, body) = send(app, method, uri, body).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[allow(dead_code)]
pub const BOGUS: &str = r#"{"name":"Bogus","cpf":"00100200309","rg":"050060075"}"#;

/// Creates the canonical test student and returns its id.
#[allow(dead_code)]
pub async fn create_bogus(app: &Router) -> i64 {
    let (status, body) = send_json(app, "POST", "/students", Some(BOGUS)).await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().unwrap()
}
