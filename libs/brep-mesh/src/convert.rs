//! # Body Conversion
//!
//! Entry points turning a body into polygon rings and welded meshes.
//!
//! ## Pipeline
//!
//! ```text
//! Body → lumps → faces → face rings (+ body transform) → VertexMerger → Mesh
//! ```

use crate::error::ConvertError;
use crate::merger::VertexMerger;
use crate::mesh::Mesh;
use crate::options::ConvertOptions;
use crate::ring::{face_ring, transform_ring, Ring};
use crate::walk::{faces, lumps, Lumps};
use brep_model::{BodyId, CoedgeId, EntityGraph, EntityKind, EntityRef, LumpId};
use glam::{DMat4, DVec3};
use std::collections::HashSet;
use tracing::info;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Converts a body into meshes of its planar polygon faces.
///
/// Returns a single mesh if `merge_lumps` is true, otherwise one mesh per
/// lump (lumps without usable faces give empty meshes). Faces that are not
/// planar or not bounded by a closed ring of straight edges are skipped.
///
/// # Errors
///
/// [`ConvertError::InvalidInput`] if `body` is not a body in `graph`.
///
/// # Example
///
/// ```rust
/// use brep_mesh::from_body;
/// use brep_model::{BodyBuilder, EntityGraph};
/// use glam::DVec3;
///
/// let mut graph = EntityGraph::new();
/// let mut builder = BodyBuilder::new(&mut graph);
/// let lump = builder.add_lump();
/// builder.add_planar_face(lump, &[DVec3::ZERO, DVec3::X, DVec3::Y]).unwrap();
/// let body = builder.finish();
///
/// let meshes = from_body(&graph, body, true).unwrap();
/// assert_eq!(meshes.len(), 1);
/// assert_eq!(meshes[0].face_count(), 1);
/// ```
pub fn from_body(
    graph: &EntityGraph,
    body: impl Into<EntityRef>,
    merge_lumps: bool,
) -> Result<Vec<Mesh>, ConvertError> {
    let options = ConvertOptions::default().with_merge_lumps(merge_lumps);
    from_body_with_options(graph, body, &options)
}

/// Converts a body into meshes using explicit [`ConvertOptions`].
pub fn from_body_with_options(
    graph: &EntityGraph,
    body: impl Into<EntityRef>,
    options: &ConvertOptions,
) -> Result<Vec<Mesh>, ConvertError> {
    let root = body.into();
    let lump_faces = flat_polygon_faces_from_body(graph, root)?;

    let mut meshes = Vec::new();
    let mut merger = VertexMerger::new(options.precision());
    let mut lump_count = 0usize;
    let mut face_count = 0usize;

    for rings in lump_faces {
        lump_count += 1;
        face_count += rings.len();
        for ring in &rings {
            merger.add_face(ring);
        }
        if !options.merge_lumps() {
            let finished = std::mem::replace(&mut merger, VertexMerger::new(options.precision()));
            meshes.push(finished.finish());
        }
    }
    if options.merge_lumps() {
        meshes.push(merger.finish());
    }

    info!(
        body = %root,
        lumps = lump_count,
        faces = face_count,
        meshes = meshes.len(),
        "Converted body to mesh"
    );
    Ok(meshes)
}

/// Iterator yielding the planar face rings of each lump of a body.
///
/// Created by [`flat_polygon_faces_from_body`].
#[derive(Debug, Clone)]
pub struct BodyFaces<'a> {
    graph: &'a EntityGraph,
    lumps: Lumps<'a>,
    transform: Option<DMat4>,
}

impl Iterator for BodyFaces<'_> {
    type Item = Vec<Ring>;

    fn next(&mut self) -> Option<Vec<Ring>> {
        let lump = self.lumps.next()?;
        Some(lump_rings(self.graph, lump, self.transform.as_ref()))
    }
}

/// Returns the planar face rings of `body`, one list per lump.
///
/// The body transform, if present, is applied to every point.
///
/// # Errors
///
/// [`ConvertError::InvalidInput`] if `body` is not a body in `graph`.
pub fn flat_polygon_faces_from_body(
    graph: &EntityGraph,
    body: impl Into<EntityRef>,
) -> Result<BodyFaces<'_>, ConvertError> {
    let root = body.into();
    let lumps = lumps(graph, root)?;
    let transform = root.as_body().and_then(|id| body_transform(graph, id));

    Ok(BodyFaces {
        graph,
        lumps,
        transform,
    })
}

/// Returns the planar face rings of a single lump.
///
/// # Errors
///
/// [`ConvertError::InvalidInput`] if `lump` is not a lump in `graph`.
pub fn flat_polygon_faces_from_lump(
    graph: &EntityGraph,
    lump: impl Into<EntityRef>,
    transform: Option<&DMat4>,
) -> Result<Vec<Ring>, ConvertError> {
    let root = lump.into();
    let lump = root
        .as_lump()
        .filter(|&id| graph.lump(id).is_some())
        .ok_or_else(|| ConvertError::invalid_input(EntityKind::Lump, root))?;

    Ok(lump_rings(graph, lump, transform))
}

/// Returns the start and end locations of every edge of a body.
///
/// Walks all loops regardless of surface or curve kind, so curved bodies
/// contribute their edge endpoints too. Absent links are skipped and the
/// body transform is applied.
///
/// # Errors
///
/// [`ConvertError::InvalidInput`] if `body` is not a body in `graph`.
pub fn vertices_from_body(
    graph: &EntityGraph,
    body: impl Into<EntityRef>,
) -> Result<Vec<DVec3>, ConvertError> {
    let root = body.into();
    let transform = root.as_body().and_then(|id| body_transform(graph, id));

    let mut vertices = Vec::new();
    for lump in lumps(graph, root)? {
        for face in faces(graph, lump) {
            let first = graph
                .face(face)
                .and_then(|face| face.boundary)
                .and_then(|boundary| graph.boundary_loop(boundary))
                .and_then(|boundary| boundary.coedge);
            collect_edge_vertices(graph, first, &mut vertices);
        }
    }

    if let Some(matrix) = &transform {
        transform_ring(&mut vertices, matrix);
    }
    Ok(vertices)
}

// =============================================================================
// HELPERS
// =============================================================================

fn body_transform(graph: &EntityGraph, body: BodyId) -> Option<DMat4> {
    let transform = graph.body(body)?.transform?;
    graph.transform(transform).map(|t| t.matrix)
}

fn lump_rings(graph: &EntityGraph, lump: LumpId, transform: Option<&DMat4>) -> Vec<Ring> {
    faces(graph, lump)
        .filter_map(|face| face_ring(graph, face, transform))
        .collect()
}

/// Pushes edge endpoints of a coedge chain until it ends, closes or cycles.
fn collect_edge_vertices(
    graph: &EntityGraph,
    first: Option<CoedgeId>,
    out: &mut Vec<DVec3>,
) {
    let mut visited = HashSet::new();
    let mut next = first;
    while let Some(id) = next {
        if !visited.insert(id) {
            break;
        }
        let Some(coedge) = graph.coedge(id) else {
            break;
        };
        if let Some(edge) = coedge.edge.and_then(|edge| graph.edge(edge)) {
            for vertex in [edge.start_vertex, edge.end_vertex].into_iter().flatten() {
                if let Some(location) = graph.vertex_location(vertex) {
                    out.push(location);
                }
            }
        }
        next = coedge.next_coedge;
    }
}
