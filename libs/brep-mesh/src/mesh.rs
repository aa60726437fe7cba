//! # Mesh Data Structure
//!
//! Polygon mesh with shared vertices, produced by the
//! [`VertexMerger`](crate::VertexMerger).

use config::constants::{approx_zero, MIN_FACE_VERTICES};
use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

/// A polygon mesh with vertices and index faces.
///
/// Faces keep the vertex order of the B-rep loop they were built from, so
/// winding is preserved. Faces are arbitrary polygons; use
/// [`Mesh::triangulate`] for a triangle list.
///
/// # Example
///
/// ```rust
/// use brep_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face(vec![0, 1, 2]);
/// assert_eq!(mesh.face_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    /// Vertex positions
    vertices: Vec<DVec3>,
    /// Polygon faces as vertex indices
    faces: Vec<Vec<u32>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh from raw vertices and faces.
    pub fn from_parts(vertices: Vec<DVec3>, faces: Vec<Vec<u32>>) -> Self {
        Self { vertices, faces }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if the mesh has no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a face by vertex indices.
    pub fn add_face(&mut self, face: Vec<u32>) {
        self.faces.push(face);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[Vec<u32>] {
        &self.faces
    }

    /// Returns the positions of the face at the given index.
    ///
    /// `None` if there is no such face or it references a missing vertex.
    pub fn face_vertices(&self, index: usize) -> Option<Vec<DVec3>> {
        self.faces
            .get(index)?
            .iter()
            .map(|&i| self.vertices.get(i as usize).copied())
            .collect()
    }

    /// Returns the area of the face at the given index.
    ///
    /// Uses Newell's method, so the result is exact for planar polygons
    /// of any winding. `None` under the same conditions as
    /// [`Mesh::face_vertices`].
    pub fn face_area(&self, index: usize) -> Option<f64> {
        let corners = self.face_vertices(index)?;
        let normal = corners
            .iter()
            .zip(corners.iter().cycle().skip(1))
            .fold(DVec3::ZERO, |sum, (a, b)| sum + a.cross(*b));
        Some(normal.length() * 0.5)
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Transforms all vertices by a 4x4 matrix.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }
    }

    /// Translates the mesh by a vector.
    pub fn translate(&mut self, offset: DVec3) {
        for v in &mut self.vertices {
            *v += offset;
        }
    }

    /// Appends another mesh, offsetting its indices.
    ///
    /// Vertices are not welded across the two meshes.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);
        self.faces.extend(
            other
                .faces
                .iter()
                .map(|face| face.iter().map(|i| i + offset).collect()),
        );
    }

    /// Fan-triangulates every face from its first vertex.
    ///
    /// Valid for the convex polygons planar B-rep faces usually are.
    /// Faces with fewer than three indices produce no triangles.
    pub fn triangulate(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.triangle_count());
        for face in &self.faces {
            if face.len() < MIN_FACE_VERTICES {
                continue;
            }
            for i in 1..face.len() - 1 {
                triangles.push([face[0], face[i], face[i + 1]]);
            }
        }
        triangles
    }

    /// Returns the number of triangles [`Mesh::triangulate`] produces.
    pub fn triangle_count(&self) -> usize {
        self.faces
            .iter()
            .filter(|face| face.len() >= MIN_FACE_VERTICES)
            .map(|face| face.len() - 2)
            .sum()
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All face indices are valid
    /// - Every face references at least three distinct vertices
    /// - No degenerate faces (zero or non-finite area)
    ///
    /// Welding may collapse faces of tiny B-rep polygons; such faces are
    /// kept in the mesh but fail validation.
    pub fn validate(&self) -> bool {
        (0..self.faces.len()).all(|index| {
            let Some(area) = self.face_area(index) else {
                return false;
            };
            let mut distinct = self.faces[index].clone();
            distinct.sort_unstable();
            distinct.dedup();
            distinct.len() >= MIN_FACE_VERTICES && area.is_finite() && !approx_zero(area)
        })
    }

    /// Exports vertices as f32 array for GPU.
    ///
    /// Returns flattened [x, y, z, x, y, z, ...] array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        let mut result = Vec::with_capacity(self.vertices.len() * 3);
        for v in &self.vertices {
            result.push(v.x as f32);
            result.push(v.y as f32);
            result.push(v.z as f32);
        }
        result
    }

    /// Exports triangulated indices as u32 array for GPU.
    ///
    /// Returns flattened [i0, i1, i2, i0, i1, i2, ...] array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangulate().into_iter().flatten().collect()
    }
}
