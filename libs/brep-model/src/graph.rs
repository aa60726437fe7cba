//! # Entity Graph
//!
//! Arena owning every entity of one or more bodies. Entities are appended
//! and never removed, so handles stay valid for the lifetime of the graph.
//!
//! ## Example
//!
//! ```rust
//! use brep_model::{Body, EntityGraph, Lump};
//!
//! let mut graph = EntityGraph::new();
//! let lump = graph.add_lump(Lump::default());
//! let body = graph.add_body(Body { lump: Some(lump), transform: None });
//! assert_eq!(graph.body(body).and_then(|b| b.lump), Some(lump));
//! ```

use crate::entities::{
    Body, Coedge, Curve, Edge, Face, Loop, Lump, Point, Shell, Surface, Transform, Vertex,
};
use crate::handle::{
    BodyId, CoedgeId, CurveId, EdgeId, EntityRef, FaceId, LoopId, LumpId, PointId, ShellId,
    SurfaceId, TransformId, VertexId,
};
use serde::{Deserialize, Serialize};

macro_rules! arena_accessors {
    ($($field:ident: $ty:ty, $id:ident => $add:ident, $get:ident, $get_mut:ident;)*) => {
        $(
            #[doc = concat!("Appends a `", stringify!($ty), "` and returns its handle.")]
            pub fn $add(&mut self, entity: $ty) -> $id {
                let id = $id(self.$field.len() as u32);
                self.$field.push(entity);
                id
            }

            #[doc = concat!("Looks up a `", stringify!($ty), "`; `None` for a dangling handle.")]
            #[inline]
            pub fn $get(&self, id: $id) -> Option<&$ty> {
                self.$field.get(id.index())
            }

            #[inline]
            pub fn $get_mut(&mut self, id: $id) -> Option<&mut $ty> {
                self.$field.get_mut(id.index())
            }
        )*
    };
}

/// Arena of B-rep entities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EntityGraph {
    bodies: Vec<Body>,
    transforms: Vec<Transform>,
    lumps: Vec<Lump>,
    shells: Vec<Shell>,
    faces: Vec<Face>,
    surfaces: Vec<Surface>,
    loops: Vec<Loop>,
    coedges: Vec<Coedge>,
    edges: Vec<Edge>,
    curves: Vec<Curve>,
    vertices: Vec<Vertex>,
    points: Vec<Point>,
}

impl EntityGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    arena_accessors! {
        bodies: Body, BodyId => add_body, body, body_mut;
        transforms: Transform, TransformId => add_transform, transform, transform_mut;
        lumps: Lump, LumpId => add_lump, lump, lump_mut;
        shells: Shell, ShellId => add_shell, shell, shell_mut;
        faces: Face, FaceId => add_face, face, face_mut;
        surfaces: Surface, SurfaceId => add_surface, surface, surface_mut;
        loops: Loop, LoopId => add_loop, boundary_loop, boundary_loop_mut;
        coedges: Coedge, CoedgeId => add_coedge, coedge, coedge_mut;
        edges: Edge, EdgeId => add_edge, edge, edge_mut;
        curves: Curve, CurveId => add_curve, curve, curve_mut;
        vertices: Vertex, VertexId => add_vertex, vertex, vertex_mut;
        points: Point, PointId => add_point, point, point_mut;
    }

    /// Returns true if the handle refers to an entity stored in this graph.
    pub fn contains(&self, entity: EntityRef) -> bool {
        let len = match entity {
            EntityRef::Body(_) => self.bodies.len(),
            EntityRef::Transform(_) => self.transforms.len(),
            EntityRef::Lump(_) => self.lumps.len(),
            EntityRef::Shell(_) => self.shells.len(),
            EntityRef::Face(_) => self.faces.len(),
            EntityRef::Surface(_) => self.surfaces.len(),
            EntityRef::Loop(_) => self.loops.len(),
            EntityRef::Coedge(_) => self.coedges.len(),
            EntityRef::Edge(_) => self.edges.len(),
            EntityRef::Curve(_) => self.curves.len(),
            EntityRef::Vertex(_) => self.vertices.len(),
            EntityRef::Point(_) => self.points.len(),
        };
        entity.index() < len
    }

    /// Returns the total number of entities of all kinds.
    pub fn len(&self) -> usize {
        self.bodies.len()
            + self.transforms.len()
            + self.lumps.len()
            + self.shells.len()
            + self.faces.len()
            + self.surfaces.len()
            + self.loops.len()
            + self.coedges.len()
            + self.edges.len()
            + self.curves.len()
            + self.vertices.len()
            + self.points.len()
    }

    /// Returns true if the graph holds no entities.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the location behind a vertex handle, if both vertex and
    /// point are present.
    pub fn vertex_location(&self, vertex: VertexId) -> Option<glam::DVec3> {
        let point = self.vertex(vertex)?.point?;
        self.point(point).map(|p| p.location)
    }
}
