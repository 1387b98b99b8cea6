//! # Roster Core
//!
//! Core types shared by every Roster crate:
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`validation`]: Deterministic rendering of `validator` failures
//!
//! # Example
//!
//! ```ignore
//! use roster_core::errors::AppError;
//!
//! let error = AppError::bad_request(anyhow::anyhow!("cpf must have exactly 11 digits"));
//! ```

pub mod errors;
pub mod validation;

pub use errors::AppError;
pub use validation::format_validation_errors;
