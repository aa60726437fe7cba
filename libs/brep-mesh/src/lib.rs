//! # B-rep Mesh
//!
//! Flattens boundary-representation solids into polygon meshes.
//! Only the planar subset is decoded: faces on plane surfaces bounded by a
//! closed ring of straight edges. Everything else is skipped silently, so
//! a partly curved body yields a mesh of its planar portions.
//!
//! ## Architecture
//!
//! ```text
//! brep-model (EntityGraph) → brep-mesh (Vec<Mesh>)
//! ```
//!
//! - **walk**: lump and face chains
//! - **ring**: face ring extraction and closure test
//! - **merger**: vertex-welding mesh builder
//! - **convert**: body level entry points
//!
//! ## Usage
//!
//! ```rust
//! use brep_mesh::from_body;
//! use brep_model::{BodyBuilder, EntityGraph};
//! use glam::DVec3;
//!
//! let mut graph = EntityGraph::new();
//! let mut builder = BodyBuilder::new(&mut graph);
//! let lump = builder.add_lump();
//! builder
//!     .add_planar_face(lump, &[DVec3::ZERO, DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y])
//!     .unwrap();
//! let body = builder.finish();
//!
//! let meshes = from_body(&graph, body, true).unwrap();
//! assert_eq!(meshes[0].vertex_count(), 4);
//! ```

pub mod convert;
pub mod error;
pub mod merger;
pub mod mesh;
pub mod options;
pub mod ring;
pub mod walk;

pub use convert::{
    flat_polygon_faces_from_body, flat_polygon_faces_from_lump, from_body,
    from_body_with_options, vertices_from_body, BodyFaces,
};
pub use error::ConvertError;
pub use merger::VertexMerger;
pub use mesh::Mesh;
pub use options::ConvertOptions;
pub use ring::{extract_ring, face_ring, Ring, SkipReason};
