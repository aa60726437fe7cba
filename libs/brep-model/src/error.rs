//! # Model Errors
//!
//! Error types for building entity graphs.

use crate::handle::EntityRef;
use thiserror::Error;

/// Errors that can occur while constructing a body.
#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    /// The referenced entity does not belong to the body being built
    #[error("Unknown entity: {0}")]
    UnknownEntity(EntityRef),

    /// A face needs at least three corners
    #[error("Degenerate face: {count} corners (min: {min})")]
    DegenerateFace { count: usize, min: usize },
}
