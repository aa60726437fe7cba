//! # Configuration Constants
//!
//! Centralized constants for the B-rep mesh pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances and merge precision
//! - **Entity Types**: ACIS type names of surfaces and curves
//! - **Limits**: Minimum sizes for valid mesh faces

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Mesh validation treats faces with an area below this as degenerate.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let collapsed_area = 1e-12;
/// assert!(collapsed_area < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Default number of decimal places used to key vertices when welding.
///
/// Two vertices whose coordinates agree after rounding to this many
/// decimal places are merged into one mesh vertex.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MERGE_PRECISION;
///
/// let user_precision: Option<u32> = None;
/// let precision = user_precision.unwrap_or(DEFAULT_MERGE_PRECISION);
/// assert_eq!(precision, 6);
/// ```
pub const DEFAULT_MERGE_PRECISION: u32 = 6;

/// Largest accepted merge precision.
///
/// An `f64` carries about 15 significant decimal digits. Past 12 decimal
/// places, rounding no longer absorbs the noise of unit-scale coordinates
/// and welding degrades to exact comparison.
pub const MAX_MERGE_PRECISION: u32 = 12;

// =============================================================================
// ENTITY TYPE NAMES
// =============================================================================

/// ACIS type name of a planar surface.
pub const PLANE_SURFACE_TYPE: &str = "plane-surface";

/// ACIS type name of a conical (and cylindrical) surface.
pub const CONE_SURFACE_TYPE: &str = "cone-surface";

/// ACIS type name of a spherical surface.
pub const SPHERE_SURFACE_TYPE: &str = "sphere-surface";

/// ACIS type name of a toroidal surface.
pub const TORUS_SURFACE_TYPE: &str = "torus-surface";

/// ACIS type name of a NURBS surface.
pub const SPLINE_SURFACE_TYPE: &str = "spline-surface";

/// ACIS type name of a straight line curve.
pub const STRAIGHT_CURVE_TYPE: &str = "straight-curve";

/// ACIS type name of an elliptical (and circular) curve.
pub const ELLIPSE_CURVE_TYPE: &str = "ellipse-curve";

/// ACIS type name of an interpolated curve.
pub const INTCURVE_CURVE_TYPE: &str = "intcurve-curve";

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Minimum number of distinct vertices of a valid polygon face.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_FACE_VERTICES;
///
/// let face = [0u32, 1, 2];
/// assert!(face.len() >= MIN_FACE_VERTICES);
/// ```
pub const MIN_FACE_VERTICES: usize = 3;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Returns the quantization factor `10^precision` for vertex merging.
///
/// # Example
///
/// ```rust
/// use config::constants::merge_scale;
///
/// assert_eq!(merge_scale(0), 1.0);
/// assert_eq!(merge_scale(3), 1000.0);
/// ```
#[inline]
pub fn merge_scale(precision: u32) -> f64 {
    10f64.powi(precision as i32)
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
