//! # Body Builder
//!
//! Constructs bodies made of polygonal faces bounded by straight edges.
//!
//! ## Example
//!
//! ```rust
//! use brep_model::{BodyBuilder, EntityGraph};
//! use glam::DVec3;
//!
//! let mut graph = EntityGraph::new();
//! let mut builder = BodyBuilder::new(&mut graph);
//! let lump = builder.add_lump();
//! builder
//!     .add_planar_face(lump, &[DVec3::ZERO, DVec3::X, DVec3::Y])
//!     .unwrap();
//! let body = builder.finish();
//! assert!(graph.body(body).is_some());
//! ```

use crate::entities::{
    Body, Coedge, Curve, CurveKind, Edge, Face, Loop, Lump, Point, Shell, Surface, SurfaceKind,
    Transform, Vertex,
};
use crate::error::ModelError;
use crate::graph::EntityGraph;
use crate::handle::{BodyId, EntityRef, FaceId, LumpId, ShellId};
use config::constants::MIN_FACE_VERTICES;
use glam::{DMat4, DVec3};

/// Bookkeeping for one lump created by the builder.
struct LumpEntry {
    lump: LumpId,
    shell: ShellId,
    last_face: Option<FaceId>,
}

/// Incrementally builds one body inside an [`EntityGraph`].
///
/// Lumps and faces are appended to the end of their chains, so link
/// order equals insertion order.
pub struct BodyBuilder<'a> {
    graph: &'a mut EntityGraph,
    body: BodyId,
    lumps: Vec<LumpEntry>,
}

impl<'a> BodyBuilder<'a> {
    /// Starts a new, empty body.
    pub fn new(graph: &'a mut EntityGraph) -> Self {
        let body = graph.add_body(Body::default());
        Self {
            graph,
            body,
            lumps: Vec::new(),
        }
    }

    /// Returns the handle of the body under construction.
    pub fn body(&self) -> BodyId {
        self.body
    }

    /// Appends a lump with an empty shell.
    pub fn add_lump(&mut self) -> LumpId {
        let shell = self.graph.add_shell(Shell::default());
        let lump = self.graph.add_lump(Lump {
            next_lump: None,
            shell: Some(shell),
        });

        match self.lumps.last() {
            Some(prev) => {
                if let Some(prev) = self.graph.lump_mut(prev.lump) {
                    prev.next_lump = Some(lump);
                }
            }
            None => {
                if let Some(body) = self.graph.body_mut(self.body) {
                    body.lump = Some(lump);
                }
            }
        }

        self.lumps.push(LumpEntry {
            lump,
            shell,
            last_face: None,
        });
        lump
    }

    /// Places the body with an affine transform.
    pub fn set_transform(&mut self, matrix: DMat4) {
        let transform = self.graph.add_transform(Transform { matrix });
        if let Some(body) = self.graph.body_mut(self.body) {
            body.transform = Some(transform);
        }
    }

    /// Appends a planar polygon face bounded by straight edges.
    pub fn add_planar_face(&mut self, lump: LumpId, corners: &[DVec3]) -> Result<FaceId, ModelError> {
        self.add_face(lump, corners, SurfaceKind::Plane, CurveKind::Straight)
    }

    /// Appends a polygon face with explicit surface and edge curve kinds.
    ///
    /// Edge `i` runs from corner `i` to corner `i + 1`, the last edge closes
    /// the polygon. The coedges form a circular chain starting at edge 0.
    pub fn add_face(
        &mut self,
        lump: LumpId,
        corners: &[DVec3],
        surface_kind: SurfaceKind,
        curve_kind: CurveKind,
    ) -> Result<FaceId, ModelError> {
        if corners.len() < MIN_FACE_VERTICES {
            return Err(ModelError::DegenerateFace {
                count: corners.len(),
                min: MIN_FACE_VERTICES,
            });
        }
        let entry = self
            .lumps
            .iter()
            .position(|entry| entry.lump == lump)
            .ok_or(ModelError::UnknownEntity(EntityRef::Lump(lump)))?;

        let vertices: Vec<_> = corners
            .iter()
            .map(|&location| {
                let point = self.graph.add_point(Point { location });
                self.graph.add_vertex(Vertex { point: Some(point) })
            })
            .collect();

        let count = vertices.len();
        let coedges: Vec<_> = (0..count)
            .map(|i| {
                let curve = self.graph.add_curve(Curve {
                    kind: curve_kind.clone(),
                });
                let edge = self.graph.add_edge(Edge {
                    start_vertex: Some(vertices[i]),
                    end_vertex: Some(vertices[(i + 1) % count]),
                    curve: Some(curve),
                });
                self.graph.add_coedge(Coedge {
                    next_coedge: None,
                    edge: Some(edge),
                })
            })
            .collect();

        for (i, &coedge) in coedges.iter().enumerate() {
            if let Some(coedge) = self.graph.coedge_mut(coedge) {
                coedge.next_coedge = Some(coedges[(i + 1) % count]);
            }
        }

        let boundary = self.graph.add_loop(Loop {
            coedge: Some(coedges[0]),
        });
        let surface = self.graph.add_surface(Surface { kind: surface_kind });
        let face = self.graph.add_face(Face {
            next_face: None,
            surface: Some(surface),
            boundary: Some(boundary),
        });

        let entry = &mut self.lumps[entry];
        match entry.last_face {
            Some(prev) => {
                if let Some(prev) = self.graph.face_mut(prev) {
                    prev.next_face = Some(face);
                }
            }
            None => {
                if let Some(shell) = self.graph.shell_mut(entry.shell) {
                    shell.face = Some(face);
                }
            }
        }
        entry.last_face = Some(face);

        Ok(face)
    }

    /// Finishes the body and returns its handle.
    pub fn finish(self) -> BodyId {
        self.body
    }
}
