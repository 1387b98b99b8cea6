use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use validator::Validate;

use crate::metrics::track_validation_failure;
use roster_core::AppError;

/// Canonicalizes a request value before it is validated.
pub trait Normalize {
    fn normalize(self) -> Self;
}

/// Parses a JSON object body.
///
/// The `Content-Type` header is not inspected; any parse failure becomes a
/// 400 carrying the parser's message. Only JSON objects are accepted.
pub fn parse_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, AppError> {
    let value: Value =
        serde_json::from_slice(body).map_err(|e| AppError::bad_request(anyhow!("{}", e)))?;

    if !value.is_object() {
        return Err(AppError::bad_request(anyhow!(
            "request body must be a JSON object"
        )));
    }

    serde_json::from_value(value).map_err(|e| AppError::bad_request(anyhow!("{}", e)))
}

pub fn normalize_and_validate<T>(value: T) -> Result<T, AppError>
where
    T: Normalize + Validate,
{
    let value = value.normalize();
    value.validate().map_err(|errors| {
        track_validation_failure();
        AppError::validation(&errors)
    })?;
    Ok(value)
}

/// JSON body that has been parsed, normalized and validated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Normalize + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| AppError::new(rejection.status(), anyhow!(rejection.body_text())))?;

        let value = normalize_and_validate(parse_json::<T>(&body)?)?;
        Ok(ValidatedJson(value))
    }
}
