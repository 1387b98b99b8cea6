//! Student domain models and DTOs.
//!
//! A student is identified by a store-assigned `id` and carries three
//! user-writable fields. `cpf` and `rg` are stored as bare digit strings:
//! every write strips non-digit characters before validation runs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors};

pub const CPF_LENGTH: usize = 11;
pub const RG_LENGTH: usize = 9;
pub const NAME_MAX_LENGTH: usize = 255;

/// Removes every character that is not an ASCII decimal digit.
///
/// ```
/// use roster_models::normalize_digits;
///
/// assert_eq!(normalize_digits("001.002.003-09"), "00100200309");
/// ```
pub fn normalize_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// A student as persisted by the store.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Student {
    pub id: i64,
    #[serde(rename = "CreatedAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "UpdatedAt")]
    pub updated_at: DateTime<Utc>,
    #[serde(rename = "DeletedAt")]
    pub deleted_at: Option<DateTime<Utc>>,
    #[schema(example = "Bogus")]
    pub name: String,
    #[schema(example = "00100200309")]
    pub cpf: String,
    #[schema(example = "050060075")]
    pub rg: String,
}

/// The user-writable fields of a student, as accepted by `POST /students`.
///
/// Missing keys deserialize to empty strings and fail validation; unknown
/// keys, including `id` and the timestamps, are ignored.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema, Validate)]
#[serde(default)]
pub struct StudentInput {
    #[validate(custom(function = "validate_name"))]
    #[schema(example = "Bogus")]
    pub name: String,
    #[validate(custom(function = "validate_cpf"))]
    #[schema(example = "001.002.003-09")]
    pub cpf: String,
    #[validate(custom(function = "validate_rg"))]
    #[schema(example = "05.006.007-5")]
    pub rg: String,
}

impl StudentInput {
    pub fn new(name: impl Into<String>, cpf: impl Into<String>, rg: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cpf: cpf.into(),
            rg: rg.into(),
        }
    }

    /// Strips non-digits from `cpf` and `rg`. `name` is left untouched.
    pub fn normalized(self) -> Self {
        Self {
            cpf: normalize_digits(&self.cpf),
            rg: normalize_digits(&self.rg),
            ..self
        }
    }

    /// Runs every field rule and reports all failures at once.
    pub fn check(&self) -> Result<(), ValidationErrors> {
        self.validate()
    }
}

impl From<&Student> for StudentInput {
    fn from(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            cpf: student.cpf.clone(),
            rg: student.rg.clone(),
        }
    }
}

/// Body of `PATCH /students/{id}`.
///
/// Only keys present in the body (and not `null`) overwrite stored values.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq, ToSchema)]
#[serde(default)]
pub struct StudentPatch {
    #[schema(example = "Bogus Junior")]
    pub name: Option<String>,
    pub cpf: Option<String>,
    pub rg: Option<String>,
}

impl StudentPatch {
    /// Overlays the provided keys on `existing`.
    pub fn apply_to(self, existing: &Student) -> StudentInput {
        StudentInput {
            name: self.name.unwrap_or_else(|| existing.name.clone()),
            cpf: self.cpf.unwrap_or_else(|| existing.cpf.clone()),
            rg: self.rg.unwrap_or_else(|| existing.rg.clone()),
        }
    }
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::new("required").with_message("name is required".into()));
    }
    if name.chars().count() > NAME_MAX_LENGTH {
        return Err(ValidationError::new("length")
            .with_message(format!("name must be at most {} characters", NAME_MAX_LENGTH).into()));
    }
    Ok(())
}

fn validate_digits(
    field: &'static str,
    value: &str,
    expected: usize,
) -> Result<(), ValidationError> {
    if !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new("digits")
            .with_message(format!("{} must contain only digits", field).into()));
    }
    if value.chars().count() != expected {
        return Err(ValidationError::new("length")
            .with_message(format!("{} must have exactly {} digits", field, expected).into()));
    }
    Ok(())
}

fn validate_cpf(cpf: &str) -> Result<(), ValidationError> {
    validate_digits("cpf", cpf, CPF_LENGTH)
}

fn validate_rg(rg: &str) -> Result<(), ValidationError> {
    validate_digits("rg", rg, RG_LENGTH)
}
