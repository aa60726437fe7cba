//! # Config Crate
//!
//! Centralized configuration constants for the B-rep to mesh pipeline.
//! Tolerances, vertex merge precision and the ACIS entity type names are
//! defined here so the model and mesh crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_MERGE_PRECISION, PLANE_SURFACE_TYPE, merge_scale};
//!
//! assert_eq!(DEFAULT_MERGE_PRECISION, 6);
//! assert_eq!(PLANE_SURFACE_TYPE, "plane-surface");
//! assert_eq!(merge_scale(2), 100.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **ACIS Compatible**: Type names match the ACIS SAT/SAB entity names
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
