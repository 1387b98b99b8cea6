//! Fixed-shape JSON response bodies.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const STUDENT_DELETED_MESSAGE: &str = "Student deleted successfully!";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct GreetingsResponse {
    #[serde(rename = "API says")]
    #[schema(example = "What's up John")]
    pub message: String,
}

impl GreetingsResponse {
    pub fn for_name(name: &str) -> Self {
        Self {
            message: format!("What's up {}", name),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct DeleteResponse {
    #[serde(rename = "data")]
    #[schema(example = "Student deleted successfully!")]
    pub message: String,
}

impl Default for DeleteResponse {
    fn default() -> Self {
        Self {
            message: STUDENT_DELETED_MESSAGE.to_string(),
        }
    }
}

/// Body of a 400 or 500 response.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Body of a 404 from a student lookup.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct NotFoundResponse {
    #[serde(rename = "Not found")]
    #[schema(example = "Student not found")]
    pub message: String,
}
