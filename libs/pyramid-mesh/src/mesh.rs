//! # Triangle Mesh
//!
//! Triangle representation handed to renderers that cannot consume quads.
//! Produced from a [`QuadMesh`](crate::QuadMesh) via
//! [`QuadMesh::triangulate`](crate::QuadMesh::triangulate).

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// A triangle mesh with vertices, indices and optional normals.
///
/// Geometry is kept in f64; the `*_f32` exports are for GPU buffers.
///
/// # Example
///
/// ```rust
/// use pyramid_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert_eq!(mesh.triangle_count(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    vertices: Vec<DVec3>,
    triangles: Vec<[u32; 3]>,
    normals: Option<Vec<DVec3>>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            normals: None,
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
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

    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Computes area-weighted vertex normals from the triangles.
    pub fn compute_normals(&mut self) {
        let mut normals = vec![DVec3::ZERO; self.vertices.len()];

        for tri in &self.triangles {
            let [a, b, c] = tri.map(|i| self.vertices[i as usize]);
            let normal = (b - a).cross(c - a);
            for i in tri {
                normals[*i as usize] += normal;
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }

        self.normals = Some(normals);
    }

    /// Axis-aligned bounding box as (min, max).
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        bounds(&self.vertices)
    }

    /// Flattened [x, y, z, x, y, z, ...] positions for GPU upload.
    pub fn vertices_f32(&self) -> Vec<f32> {
        flatten_f32(&self.vertices)
    }

    /// Flattened [i0, i1, i2, ...] triangle indices for GPU upload.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    pub fn normals_f32(&self) -> Option<Vec<f32>> {
        self.normals.as_deref().map(flatten_f32)
    }
}

/// Axis-aligned bounds of a point set; an empty set yields (ZERO, ZERO).
pub(crate) fn bounds(points: &[DVec3]) -> (DVec3, DVec3) {
    let Some((first, rest)) = points.split_first() else {
        return (DVec3::ZERO, DVec3::ZERO);
    };
    rest.iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)))
}

fn flatten_f32(points: &[DVec3]) -> Vec<f32> {
    points
        .iter()
        .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
    }

    #[test]
    fn test_mesh_add_vertex_returns_index() {
        let mut mesh = Mesh::new();
        assert_eq!(mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0)), 0);
        assert_eq!(mesh.add_vertex(DVec3::ZERO), 1);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -3.0));
        assert_eq!(max, DVec3::new(4.0, 5.0, 6.0));
    }

    #[test]
    fn test_empty_bounding_box() {
        assert_eq!(Mesh::new().bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_compute_normals_points_up() {
        let mut mesh = unit_triangle();
        mesh.compute_normals();
        let normals = mesh.normals().unwrap();
        assert!(normals.iter().all(|n| *n == DVec3::Z));
    }

    #[test]
    fn test_gpu_exports() {
        let mut mesh = unit_triangle();
        assert_eq!(mesh.vertices_f32(), vec![0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);
        assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
        assert!(mesh.normals_f32().is_none());
        mesh.compute_normals();
        assert_eq!(mesh.normals_f32().unwrap().len(), 9);
    }

    #[test]
    fn test_serde_round_trip_keeps_normals() {
        let mut mesh = unit_triangle();
        mesh.compute_normals();
        let json = serde_json::to_string(&mesh).unwrap();
        let back: Mesh = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mesh);
        assert_eq!(back.normals().map(<[DVec3]>::len), Some(3));
    }

    #[test]
    fn test_serialized_layout() {
        let json = serde_json::to_value(unit_triangle()).unwrap();
        assert_eq!(json["triangles"], serde_json::json!([[0, 1, 2]]));
        assert_eq!(json["vertices"][1], serde_json::json!([1.0, 0.0, 0.0]));
        assert!(json["normals"].is_null());
    }
}
