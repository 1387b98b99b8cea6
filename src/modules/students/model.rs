//! Student data models and DTOs.
//!
//! This module re-exports student models from the `roster-models` crate and
//! hooks them into the request normalization pipeline.

pub use roster_models::responses::*;
pub use roster_models::students::*;

use crate::validator::Normalize;

impl Normalize for StudentInput {
    fn normalize(self) -> Self {
        self.normalized()
    }
}
