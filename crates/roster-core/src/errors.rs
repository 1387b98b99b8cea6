use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use validator::ValidationErrors;

use crate::validation::format_validation_errors;

/// JSON key used for the message of every error body except student lookups.
pub const ERROR_KEY: &str = "error";

/// JSON key used when a student lookup comes back empty.
pub const NOT_FOUND_KEY: &str = "Not found";

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub error: Error,
    pub key: &'static str,
}

impl AppError {
    pub fn new<E>(status: StatusCode, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            status,
            error: err.into(),
            key: ERROR_KEY,
        }
    }

    /// Replaces the JSON key the message is rendered under.
    pub fn with_key(mut self, key: &'static str) -> Self {
        self.key = key;
        self
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    pub fn not_found<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::NOT_FOUND, err)
    }

    pub fn bad_request<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::BAD_REQUEST, err)
    }

    pub fn database<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, err)
    }

    /// Every failing field is listed, ordered by field name.
    pub fn validation(errors: &ValidationErrors) -> Self {
        Self::bad_request(anyhow::anyhow!("{}", format_validation_errors(errors)))
    }

    pub fn student_not_found() -> Self {
        Self::not_found(anyhow::anyhow!("Student not found")).with_key(NOT_FOUND_KEY)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut body = serde_json::Map::new();
        body.insert(self.key.to_string(), json!(self.error.to_string()));

        (self.status, Json(serde_json::Value::Object(body))).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_bad_request_uses_error_key() {
        let (status, body) = body_json(AppError::bad_request(anyhow::anyhow!("boom"))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "boom"}));
    }

    #[tokio::test]
    async fn test_student_not_found_body() {
        let (status, body) = body_json(AppError::student_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"Not found": "Student not found"}));
    }

    #[tokio::test]
    async fn test_from_anyhow_is_internal() {
        let error: AppError = anyhow::anyhow!("connection reset").into();
        assert_eq!(error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.key, ERROR_KEY);
    }
}
