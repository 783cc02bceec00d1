//! # Quad Mesh
//!
//! The (vertices, faces) pair produced by the builder. Faces are quads that
//! index into the vertex list; a host converts this pair into its own mesh
//! type.

use crate::error::MeshError;
use crate::layer::Corner;
use crate::mesh::{bounds, Mesh};
use config::constants::{EPSILON, VERTICES_PER_LAYER};
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A polygon mesh whose faces are all quads.
///
/// # Example
///
/// ```rust
/// use pyramid_mesh::QuadMesh;
/// use glam::DVec3;
///
/// let mut mesh = QuadMesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 1.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_face([0, 1, 2, 3]);
/// assert!(mesh.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuadMesh {
    vertices: Vec<DVec3>,
    faces: Vec<[u32; 4]>,
}

impl QuadMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    pub fn add_face(&mut self, face: [u32; 4]) {
        self.faces.push(face);
    }

    /// Moves the vertex at `index` to `position`, leaving faces untouched.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_vertex(&mut self, index: u32, position: DVec3) {
        if let Some(vertex) = self.vertices.get_mut(index as usize) {
            *vertex = position;
        }
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn faces(&self) -> &[[u32; 4]] {
        &self.faces
    }

    #[inline]
    pub fn vertex(&self, index: u32) -> Option<DVec3> {
        self.vertices.get(index as usize).copied()
    }

    #[inline]
    pub fn face(&self, index: usize) -> Option<[u32; 4]> {
        self.faces.get(index).copied()
    }

    /// Number of complete 8-vertex layers in this mesh.
    pub fn layer_count(&self) -> usize {
        self.vertices.len() / VERTICES_PER_LAYER
    }

    /// Top-ring positions of layer `layer` (0 is the lowest), in
    /// front-left, front-right, back-left, back-right order.
    pub fn top_ring(&self, layer: usize) -> Option<[DVec3; 4]> {
        if layer >= self.layer_count() {
            return None;
        }
        let offset = (layer * VERTICES_PER_LAYER) as u32;
        Some(Corner::TOP_RING.map(|corner| self.vertices[corner.index(offset) as usize]))
    }

    /// Axis-aligned bounding box as (min, max).
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        bounds(&self.vertices)
    }

    /// Checks that every face has four distinct, in-range indices.
    ///
    /// Coincident positions are allowed: a collapsed apex keeps distinct
    /// indices that share one point.
    pub fn validate(&self) -> Result<(), MeshError> {
        let vertex_count = self.vertices.len();

        for (face_index, face) in self.faces.iter().enumerate() {
            if let Some(bad) = face.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(MeshError::invalid_topology(format!(
                    "face {face_index} references vertex {bad} but only {vertex_count} exist"
                )));
            }

            for a in 0..4 {
                for b in (a + 1)..4 {
                    if face[a] == face[b] {
                        return Err(MeshError::invalid_topology(format!(
                            "face {face_index} repeats vertex {}",
                            face[a]
                        )));
                    }
                }
            }
        }

        Ok(())
    }

    /// Splits every quad along its first diagonal into two triangles.
    ///
    /// Triangles with zero area (from a collapsed apex) are dropped. Vertex
    /// indices are preserved.
    pub fn triangulate(&self) -> Mesh {
        let mut mesh = Mesh::with_capacity(self.vertices.len(), self.faces.len() * 2);
        for vertex in &self.vertices {
            mesh.add_vertex(*vertex);
        }

        for &[a, b, c, d] in &self.faces {
            for [i0, i1, i2] in [[a, b, c], [a, c, d]] {
                if self.triangle_area(i0, i1, i2) > EPSILON {
                    mesh.add_triangle(i0, i1, i2);
                } else {
                    tracing::trace!(i0, i1, i2, "dropping degenerate triangle");
                }
            }
        }

        mesh
    }

    /// Releases the vertex and face lists for handoff to a host.
    pub fn into_parts(self) -> (Vec<DVec3>, Vec<[u32; 4]>) {
        (self.vertices, self.faces)
    }

    fn triangle_area(&self, i0: u32, i1: u32, i2: u32) -> f64 {
        let (Some(p0), Some(p1), Some(p2)) = (self.vertex(i0), self.vertex(i1), self.vertex(i2))
        else {
            return 0.0;
        };
        (p1 - p0).cross(p2 - p0).length() * 0.5
    }
}
