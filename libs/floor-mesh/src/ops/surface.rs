//! # Flat Surface Mesh

use super::to_ground;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::triangulate::Triangulation;
use config::constants::UV_RANGE_EPSILON;
use glam::DVec2;

/// Normalizes each point against the outline's bounding box.
///
/// An axis whose extent is below `UV_RANGE_EPSILON` uses a range of 1 so
/// degenerate outlines still produce finite coordinates.
pub fn planar_uvs(points: &[DVec2]) -> Vec<DVec2> {
    let Some((first, rest)) = points.split_first() else {
        return Vec::new();
    };
    let (min, max) = rest
        .iter()
        .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));

    let extent = max - min;
    let range = DVec2::new(
        if extent.x.abs() < UV_RANGE_EPSILON { 1.0 } else { extent.x },
        if extent.y.abs() < UV_RANGE_EPSILON { 1.0 } else { extent.y },
    );

    points.iter().map(|p| (*p - min) / range).collect()
}

/// Builds the flat floor mesh: one vertex per outline point at zero
/// elevation, triangles copied from the triangulation, planar UVs.
///
/// # Errors
///
/// - `InsufficientGeometry` if the outline has fewer than 3 points
/// - `InvalidParameter` if the triangulation was made for another outline
pub fn build_surface_mesh(outline: &[DVec2], triangulation: &Triangulation) -> MeshResult<Mesh> {
    let n = outline.len();
    if n < 3 {
        return Err(MeshError::insufficient(format!(
            "surface mesh needs at least 3 vertices, got {n}"
        )));
    }
    if triangulation.vertex_count() != n {
        return Err(MeshError::invalid_parameter(format!(
            "triangulation covers {} vertices, outline has {n}",
            triangulation.vertex_count()
        )));
    }

    let mut mesh = Mesh::with_capacity(n, triangulation.triangle_count());
    for p in outline {
        mesh.add_vertex(to_ground(*p, 0.0));
    }
    for &[a, b, c] in triangulation.triangles() {
        mesh.add_triangle(a, b, c);
    }
    mesh.set_uvs(planar_uvs(outline));

    Ok(mesh)
}
