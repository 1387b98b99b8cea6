//! # Roster Models
//!
//! Domain models and DTOs for the Roster API.
//!
//! - [`students`]: The `Student` entity, its writable fields, normalization and validation
//! - [`responses`]: Small fixed-shape JSON bodies returned by handlers

pub mod responses;
pub mod students;

pub use responses::{DeleteResponse, GreetingsResponse, NotFoundResponse, ErrorResponse};
pub use students::{Student, StudentInput, StudentPatch, normalize_digits};
