//! # B-rep Model
//!
//! In-memory boundary representation of solids, modelled after the ACIS
//! entity structure:
//!
//! ```text
//! Body → Lump → Shell → Face → Loop → Coedge → Edge → Vertex → Point
//!   ↓                     ↓                       ↓
//! Transform            Surface                  Curve
//! ```
//!
//! Entities live in an [`EntityGraph`] arena and refer to each other by
//! integer handles. Every link is an `Option`: `None` is the absent
//! entity, and a handle that points outside the arena reads as absent too.
//!
//! ## Usage
//!
//! ```rust
//! use brep_model::{BodyBuilder, EntityGraph, SurfaceKind};
//! use glam::DVec3;
//!
//! let mut graph = EntityGraph::new();
//! let mut builder = BodyBuilder::new(&mut graph);
//! let lump = builder.add_lump();
//! let face = builder
//!     .add_planar_face(lump, &[DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y])
//!     .unwrap();
//! builder.finish();
//!
//! let surface = graph.face(face).and_then(|f| f.surface).and_then(|s| graph.surface(s));
//! assert_eq!(surface.map(|s| &s.kind), Some(&SurfaceKind::Plane));
//! ```

pub mod builder;
pub mod entities;
pub mod error;
pub mod graph;
pub mod handle;

pub use builder::BodyBuilder;
pub use entities::{
    Body, Coedge, Curve, CurveKind, Edge, Face, Loop, Lump, Point, Shell, Surface, SurfaceKind,
    Transform, Vertex,
};
pub use error::ModelError;
pub use graph::EntityGraph;
pub use handle::{
    BodyId, CoedgeId, CurveId, EdgeId, EntityKind, EntityRef, FaceId, LoopId, LumpId, PointId,
    ShellId, SurfaceId, TransformId, VertexId,
};

#[cfg(test)]
mod tests;
