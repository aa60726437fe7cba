//! # Face Ring Extraction
//!
//! Recovers the closed polygon of a planar face by walking the circular
//! coedge chain of its boundary loop.
//!
//! ## Closure
//!
//! A ring is emitted only if the walk returns to the *same* first coedge
//! handle before any link is absent or unsupported. Coedges that are
//! geometrically coincident but distinct entities do not close a ring.
//!
//! ## Example
//!
//! ```rust
//! use brep_mesh::ring::face_ring;
//! use brep_model::{BodyBuilder, EntityGraph};
//! use glam::DVec3;
//!
//! let mut graph = EntityGraph::new();
//! let mut builder = BodyBuilder::new(&mut graph);
//! let lump = builder.add_lump();
//! let face = builder
//!     .add_planar_face(lump, &[DVec3::ZERO, DVec3::X, DVec3::Y])
//!     .unwrap();
//! builder.finish();
//!
//! let ring = face_ring(&graph, face, None).unwrap();
//! assert_eq!(ring, vec![DVec3::ZERO, DVec3::X, DVec3::Y]);
//! ```

use brep_model::{EntityGraph, FaceId};
use glam::{DMat4, DVec3};
use std::collections::HashSet;
use std::fmt;
use tracing::debug;

/// Ordered corner points of one face polygon.
pub type Ring = Vec<DVec3>;

/// Why a face produced no ring.
///
/// These are expected outcomes for geometry outside the planar subset,
/// not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The face handle is dangling
    MissingFace,
    /// The surface is absent or not a plane
    NotPlanar,
    /// The face has no boundary loop
    NoLoop,
    /// The loop has no first coedge
    NoCoedge,
    /// A coedge has no edge
    MissingEdge,
    /// An edge curve is absent or not straight
    CurvedEdge,
    /// An edge has no start vertex or the vertex has no point
    MissingVertex,
    /// The coedge chain ends before returning to the first coedge
    OpenRing,
    /// The coedge chain cycles without returning to the first coedge
    Cycle,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            SkipReason::MissingFace => "face not in graph",
            SkipReason::NotPlanar => "surface is not planar",
            SkipReason::NoLoop => "face has no loop",
            SkipReason::NoCoedge => "loop has no coedge",
            SkipReason::MissingEdge => "coedge has no edge",
            SkipReason::CurvedEdge => "edge is not straight",
            SkipReason::MissingVertex => "edge has no start vertex location",
            SkipReason::OpenRing => "coedge ring is not closed",
            SkipReason::Cycle => "coedge ring cycles without closing",
        };
        f.write_str(reason)
    }
}

/// Extracts the closed ring of `face`, or the reason there is none.
///
/// Points are the start vertex locations of the loop's edges, beginning
/// at the loop's first coedge. If `transform` is given, every point is
/// mapped through it.
pub fn extract_ring(
    graph: &EntityGraph,
    face: FaceId,
    transform: Option<&DMat4>,
) -> Result<Ring, SkipReason> {
    let face = graph.face(face).ok_or(SkipReason::MissingFace)?;

    let planar = face
        .surface
        .and_then(|surface| graph.surface(surface))
        .is_some_and(|surface| surface.kind.is_planar());
    if !planar {
        return Err(SkipReason::NotPlanar);
    }

    let boundary = face
        .boundary
        .and_then(|boundary| graph.boundary_loop(boundary))
        .ok_or(SkipReason::NoLoop)?;
    let first = boundary.coedge.ok_or(SkipReason::NoCoedge)?;

    let mut ring = Ring::new();
    let mut visited = HashSet::new();
    let mut current = first;
    loop {
        // A dangling coedge handle reads as an absent link.
        let coedge = graph.coedge(current).ok_or(SkipReason::OpenRing)?;
        let edge = coedge
            .edge
            .and_then(|edge| graph.edge(edge))
            .ok_or(SkipReason::MissingEdge)?;

        let straight = edge
            .curve
            .and_then(|curve| graph.curve(curve))
            .is_some_and(|curve| curve.kind.is_straight());
        if !straight {
            return Err(SkipReason::CurvedEdge);
        }

        let location = edge
            .start_vertex
            .and_then(|vertex| graph.vertex_location(vertex))
            .ok_or(SkipReason::MissingVertex)?;
        ring.push(location);

        visited.insert(current);
        current = coedge.next_coedge.ok_or(SkipReason::OpenRing)?;
        if current == first {
            break;
        }
        if visited.contains(&current) {
            return Err(SkipReason::Cycle);
        }
    }

    if let Some(matrix) = transform {
        transform_ring(&mut ring, matrix);
    }
    Ok(ring)
}

/// Extracts the closed ring of `face`; `None` if the face is unusable.
pub fn face_ring(graph: &EntityGraph, face: FaceId, transform: Option<&DMat4>) -> Option<Ring> {
    match extract_ring(graph, face, transform) {
        Ok(ring) => Some(ring),
        Err(reason) => {
            debug!(face = face.0, %reason, "Skipping face");
            None
        }
    }
}

/// Maps every point of a ring through an affine transform.
pub fn transform_ring(ring: &mut [DVec3], matrix: &DMat4) {
    for point in ring {
        *point = matrix.transform_point3(*point);
    }
}

#[cfg(test)]
mod tests;
