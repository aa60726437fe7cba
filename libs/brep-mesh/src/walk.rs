//! # Chain Walkers
//!
//! Lazy iterators over the singly-linked lump and face chains of a body.
//!
//! Both walkers stop at the absent sentinel, at a dangling handle, or when
//! a chain links back to an entity it already yielded. A cyclic chain is
//! malformed input; items yielded before the cycle still stand.

use crate::error::ConvertError;
use brep_model::{EntityGraph, EntityKind, EntityRef, FaceId, LumpId};
use std::collections::HashSet;
use tracing::debug;

/// Iterator over the lumps of a body, in link order.
///
/// Created by [`lumps`].
#[derive(Debug, Clone)]
pub struct Lumps<'a> {
    graph: &'a EntityGraph,
    next: Option<LumpId>,
    visited: HashSet<LumpId>,
}

/// Returns the lumps of `body`.
///
/// # Errors
///
/// [`ConvertError::InvalidInput`] if `body` is not a body stored in
/// `graph`.
///
/// # Example
///
/// ```rust
/// use brep_mesh::walk::lumps;
/// use brep_model::{BodyBuilder, EntityGraph};
///
/// let mut graph = EntityGraph::new();
/// let mut builder = BodyBuilder::new(&mut graph);
/// builder.add_lump();
/// builder.add_lump();
/// let body = builder.finish();
/// assert_eq!(lumps(&graph, body).unwrap().count(), 2);
/// ```
pub fn lumps(graph: &EntityGraph, body: impl Into<EntityRef>) -> Result<Lumps<'_>, ConvertError> {
    let root = body.into();
    let body = root
        .as_body()
        .and_then(|id| graph.body(id))
        .ok_or_else(|| ConvertError::invalid_input(EntityKind::Body, root))?;

    Ok(Lumps {
        graph,
        next: body.lump,
        visited: HashSet::new(),
    })
}

impl Iterator for Lumps<'_> {
    type Item = LumpId;

    fn next(&mut self) -> Option<LumpId> {
        let id = self.next.take()?;
        let lump = self.graph.lump(id)?;
        if !self.visited.insert(id) {
            debug!(lump = id.0, "Lump chain links back, stopping");
            return None;
        }
        self.next = lump.next_lump;
        Some(id)
    }
}

/// Iterator over the faces of a lump's shell, in link order.
///
/// Created by [`faces`].
#[derive(Debug, Clone)]
pub struct Faces<'a> {
    graph: &'a EntityGraph,
    next: Option<FaceId>,
    visited: HashSet<FaceId>,
}

/// Returns the faces of the shell of `lump`.
///
/// A lump without a shell yields no faces.
pub fn faces(graph: &EntityGraph, lump: LumpId) -> Faces<'_> {
    let next = graph
        .lump(lump)
        .and_then(|lump| lump.shell)
        .and_then(|shell| graph.shell(shell))
        .and_then(|shell| shell.face);

    Faces {
        graph,
        next,
        visited: HashSet::new(),
    }
}

impl Iterator for Faces<'_> {
    type Item = FaceId;

    fn next(&mut self) -> Option<FaceId> {
        let id = self.next.take()?;
        let face = self.graph.face(id)?;
        if !self.visited.insert(id) {
            debug!(face = id.0, "Face chain links back, stopping");
            return None;
        }
        self.next = face.next_face;
        Some(id)
    }
}
