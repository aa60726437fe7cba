//! # Vertex Merger
//!
//! Mesh builder that welds coincident vertices while faces are added.
//!
//! ## Welding Criteria
//!
//! Each coordinate is rounded to `precision` decimal places; vertices with
//! equal rounded coordinates share one index. The first vertex seen for a
//! key keeps its exact position.
//!
//! Rounded coordinates stay `f64` and are keyed by bit pattern, so large
//! coordinates never saturate into a shared key. A coordinate whose scaled
//! value is not finite (NaN, infinite, or overflowing the scale) is keyed
//! by its exact bits and only welds with an identical coordinate.

use crate::mesh::Mesh;
use config::constants::{merge_scale, MAX_MERGE_PRECISION};
use glam::DVec3;
use std::collections::HashMap;
use tracing::warn;

/// One quantized coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Coord {
    /// Bits of the coordinate rounded at the merge scale
    Rounded(u64),
    /// Bits of a coordinate that cannot be rounded at the merge scale
    Exact(u64),
}

impl Coord {
    fn quantize(value: f64, scale: f64) -> Self {
        let scaled = (value * scale).round();
        if scaled.is_finite() {
            // Adding zero folds -0.0 into 0.0.
            Coord::Rounded((scaled + 0.0).to_bits())
        } else {
            Coord::Exact(value.to_bits())
        }
    }
}

/// Quantized vertex position.
type VertexKey = [Coord; 3];

/// Incremental builder producing a welded [`Mesh`].
///
/// # Example
///
/// ```rust
/// use brep_mesh::VertexMerger;
/// use glam::DVec3;
///
/// let mut merger = VertexMerger::new(6);
/// merger.add_face(&[DVec3::ZERO, DVec3::X, DVec3::Y]);
/// merger.add_face(&[DVec3::X, DVec3::new(1.0, 1.0, 0.0), DVec3::Y]);
/// let mesh = merger.finish();
/// assert_eq!(mesh.vertex_count(), 4);
/// assert_eq!(mesh.face_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct VertexMerger {
    mesh: Mesh,
    ledger: HashMap<VertexKey, u32>,
    scale: f64,
}

impl VertexMerger {
    /// Creates a merger keying vertices at `precision` decimal places.
    ///
    /// Precisions above [`MAX_MERGE_PRECISION`] are clamped to it.
    pub fn new(precision: u32) -> Self {
        if precision > MAX_MERGE_PRECISION {
            warn!(precision, max = MAX_MERGE_PRECISION, "Clamping merge precision");
        }
        Self {
            mesh: Mesh::new(),
            ledger: HashMap::new(),
            scale: merge_scale(precision.min(MAX_MERGE_PRECISION)),
        }
    }

    fn key(&self, position: DVec3) -> VertexKey {
        [
            Coord::quantize(position.x, self.scale),
            Coord::quantize(position.y, self.scale),
            Coord::quantize(position.z, self.scale),
        ]
    }

    /// Adds a vertex, returning the index of an existing vertex at the same
    /// rounded position if there is one.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let key = self.key(position);
        if let Some(&index) = self.ledger.get(&key) {
            return index;
        }
        let index = self.mesh.add_vertex(position);
        self.ledger.insert(key, index);
        index
    }

    /// Adds a polygon face given by its corner positions, in order.
    pub fn add_face(&mut self, corners: &[DVec3]) {
        let face = corners.iter().map(|&v| self.add_vertex(v)).collect();
        self.mesh.add_face(face);
    }

    /// Adds several polygon faces.
    pub fn add_faces<'r>(&mut self, faces: impl IntoIterator<Item = &'r [DVec3]>) {
        for face in faces {
            self.add_face(face);
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.mesh.vertex_count()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.mesh.face_count()
    }

    /// Finishes construction and returns the welded mesh.
    pub fn finish(self) -> Mesh {
        self.mesh
    }
}

impl Default for VertexMerger {
    fn default() -> Self {
        Self::new(config::constants::DEFAULT_MERGE_PRECISION)
    }
}
