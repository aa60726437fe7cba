//! # Conversion Errors
//!
//! Error types for B-rep to mesh conversion. Unusable geometry (curved
//! faces, open loops, absent links) is not an error; it is skipped.

use brep_model::{EntityKind, EntityRef};
use thiserror::Error;

/// Errors that can occur during conversion.
#[derive(Debug, Error, PartialEq)]
pub enum ConvertError {
    /// The root entity has the wrong kind or is not stored in the graph
    #[error("expected {expected}, got: {found}")]
    InvalidInput {
        expected: EntityKind,
        found: EntityRef,
    },

    /// Vertex merge precision out of range
    #[error("Invalid merge precision: {precision} (max: {max})")]
    InvalidPrecision { precision: u32, max: u32 },
}

impl ConvertError {
    /// Creates an invalid input error.
    pub fn invalid_input(expected: EntityKind, found: impl Into<EntityRef>) -> Self {
        Self::InvalidInput {
            expected,
            found: found.into(),
        }
    }
}
