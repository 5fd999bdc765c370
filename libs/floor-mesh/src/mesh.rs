//! # Mesh Data Structure
//!
//! Vertex and index buffers with optional planar UVs.

use config::constants::EPSILON;
use glam::{DVec2, DVec3};

/// A triangle mesh with vertices and indices.
///
/// Geometry is kept in f64; hosts convert with [`Mesh::vertices_f32`] and
/// [`Mesh::indices_u32`] when uploading.
///
/// # Example
///
/// ```rust
/// use floor_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 1.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional per-vertex texture coordinates
    uvs: Option<Vec<DVec2>>,
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
            uvs: None,
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

    /// Sets per-vertex UVs. The caller keeps them parallel to the vertices.
    pub fn set_uvs(&mut self, uvs: Vec<DVec2>) {
        self.uvs = Some(uvs);
    }

    pub fn uvs(&self) -> Option<&[DVec2]> {
        self.uvs.as_deref()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn bounding_box(&self) -> (DVec3, DVec3) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All triangle indices are valid
    /// - No degenerate triangles (repeated index or zero area)
    /// - UVs, when present, match the vertex count
    pub fn validate(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;

        if self.uvs.as_ref().is_some_and(|uvs| uvs.len() != self.vertices.len()) {
            return false;
        }

        self.triangles.iter().all(|tri| {
            if tri.iter().any(|&i| i >= vertex_count) {
                return false;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }
            let [v0, v1, v2] = tri.map(|i| self.vertices[i as usize]);
            (v1 - v0).cross(v2 - v0).length() >= EPSILON
        })
    }

    /// Total surface area.
    pub fn surface_area(&self) -> f64 {
        self.triangles
            .iter()
            .map(|tri| {
                let [v0, v1, v2] = tri.map(|i| self.vertices[i as usize]);
                (v1 - v0).cross(v2 - v0).length() * 0.5
            })
            .sum()
    }

    /// Exports vertices as a flattened `[x, y, z, ...]` f32 array.
    pub fn vertices_f32(&self) -> Vec<f32> {
        self.vertices
            .iter()
            .flat_map(|v| [v.x as f32, v.y as f32, v.z as f32])
            .collect()
    }

    /// Exports triangle indices as a flattened `[i0, i1, i2, ...]` array.
    pub fn indices_u32(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Exports UVs as a flattened `[u, v, ...]` f32 array.
    pub fn uvs_f32(&self) -> Option<Vec<f32>> {
        self.uvs
            .as_ref()
            .map(|uvs| uvs.iter().flat_map(|uv| [uv.x as f32, uv.y as f32]).collect())
    }
}
