//! # B-rep Entities
//!
//! Plain data records stored in the [`EntityGraph`](crate::EntityGraph).
//! Each link field is an optional handle; `None` marks an absent entity.

use crate::handle::{
    CoedgeId, CurveId, EdgeId, FaceId, LoopId, LumpId, PointId, ShellId, SurfaceId, TransformId,
    VertexId,
};
use config::constants::{
    CONE_SURFACE_TYPE, ELLIPSE_CURVE_TYPE, INTCURVE_CURVE_TYPE, PLANE_SURFACE_TYPE,
    SPHERE_SURFACE_TYPE, SPLINE_SURFACE_TYPE, STRAIGHT_CURVE_TYPE, TORUS_SURFACE_TYPE,
};
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// TOPOLOGY
// =============================================================================

/// One solid, made of a chain of lumps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Head of the lump chain
    pub lump: Option<LumpId>,
    /// Optional placement of the whole body
    pub transform: Option<TransformId>,
}

/// Affine placement of a body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub matrix: DMat4,
}

/// One connected solid component of a body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lump {
    pub next_lump: Option<LumpId>,
    pub shell: Option<ShellId>,
}

/// Boundary skin of a lump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Shell {
    /// Head of the face chain
    pub face: Option<FaceId>,
}

/// One bounding surface patch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub next_face: Option<FaceId>,
    pub surface: Option<SurfaceId>,
    /// Boundary loop of the face
    pub boundary: Option<LoopId>,
}

/// Boundary of a face, a circular chain of coedges.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Loop {
    /// First coedge of the chain
    pub coedge: Option<CoedgeId>,
}

/// One directed use of an edge by a loop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Coedge {
    pub next_coedge: Option<CoedgeId>,
    pub edge: Option<EdgeId>,
}

/// A bounded curve segment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub start_vertex: Option<VertexId>,
    pub end_vertex: Option<VertexId>,
    pub curve: Option<CurveId>,
}

/// Endpoint of an edge.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub point: Option<PointId>,
}

// =============================================================================
// GEOMETRY
// =============================================================================

/// A location in model space.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub location: DVec3,
}

/// Geometric kind of a face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub kind: SurfaceKind,
}

/// Geometric kind of an edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    pub kind: CurveKind,
}

/// Surface kinds known by ACIS.
///
/// # Example
///
/// ```rust
/// use brep_model::SurfaceKind;
///
/// assert_eq!(SurfaceKind::from_type_name("plane-surface"), SurfaceKind::Plane);
/// assert_eq!(SurfaceKind::Sphere.type_name(), "sphere-surface");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SurfaceKind {
    Plane,
    /// Cones, including cylinders
    Cone,
    Sphere,
    Torus,
    Spline,
    /// Any other ACIS surface type, by type name
    Other(String),
}

impl SurfaceKind {
    /// Maps an ACIS type name to a surface kind.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            PLANE_SURFACE_TYPE => Self::Plane,
            CONE_SURFACE_TYPE => Self::Cone,
            SPHERE_SURFACE_TYPE => Self::Sphere,
            TORUS_SURFACE_TYPE => Self::Torus,
            SPLINE_SURFACE_TYPE => Self::Spline,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the ACIS type name.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Plane => PLANE_SURFACE_TYPE,
            Self::Cone => CONE_SURFACE_TYPE,
            Self::Sphere => SPHERE_SURFACE_TYPE,
            Self::Torus => TORUS_SURFACE_TYPE,
            Self::Spline => SPLINE_SURFACE_TYPE,
            Self::Other(name) => name,
        }
    }

    #[inline]
    pub fn is_planar(&self) -> bool {
        matches!(self, Self::Plane)
    }
}

/// Curve kinds known by ACIS.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CurveKind {
    Straight,
    /// Ellipses, including circles and arcs
    Ellipse,
    Intcurve,
    /// Any other ACIS curve type, by type name
    Other(String),
}

impl CurveKind {
    /// Maps an ACIS type name to a curve kind.
    pub fn from_type_name(name: &str) -> Self {
        match name {
            STRAIGHT_CURVE_TYPE => Self::Straight,
            ELLIPSE_CURVE_TYPE => Self::Ellipse,
            INTCURVE_CURVE_TYPE => Self::Intcurve,
            other => Self::Other(other.to_string()),
        }
    }

    /// Returns the ACIS type name.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Straight => STRAIGHT_CURVE_TYPE,
            Self::Ellipse => ELLIPSE_CURVE_TYPE,
            Self::Intcurve => INTCURVE_CURVE_TYPE,
            Self::Other(name) => name,
        }
    }

    #[inline]
    pub fn is_straight(&self) -> bool {
        matches!(self, Self::Straight)
    }
}
