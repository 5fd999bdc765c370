//! # Trigger Volume Extrusion
//!
//! Extrudes the triangulated outline from the ground plane up to `height`.
//!
//! Layout for an `n`-gon:
//! - vertices `0..n` form the bottom ring, `n..2n` the top ring
//! - bottom cap keeps the triangulation winding, top cap reverses it
//! - each outline edge `(i, next)` becomes one quad of two triangles,
//!   wound to face away from the interior like the caps

use super::to_ground;
use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use crate::triangulate::{signed_area, Triangulation};
use glam::DVec2;

/// Builds the closed trigger solid: `2n` vertices, `2(n - 2) + 2n`
/// triangles for a complete triangulation.
///
/// # Errors
///
/// - `InvalidParameter` for a non-positive or non-finite height, or a
///   triangulation made for another outline
/// - `InsufficientGeometry` if the outline has fewer than 3 points
///
/// # Example
///
/// ```rust
/// use floor_mesh::{build_trigger_volume, triangulate};
/// use glam::DVec2;
///
/// let outline = [DVec2::ZERO, DVec2::X, DVec2::Y];
/// let tri = triangulate(&outline).unwrap();
/// let trigger = build_trigger_volume(&outline, &tri, 2.0).unwrap();
/// assert_eq!(trigger.vertex_count(), 6);
/// assert_eq!(trigger.triangle_count(), 8);
/// ```
pub fn build_trigger_volume(
    outline: &[DVec2],
    triangulation: &Triangulation,
    height: f64,
) -> MeshResult<Mesh> {
    if !height.is_finite() || height <= 0.0 {
        return Err(MeshError::invalid_parameter(format!(
            "trigger height must be positive, got {height}"
        )));
    }

    let n = outline.len();
    if n < 3 {
        return Err(MeshError::insufficient(format!(
            "trigger volume needs at least 3 vertices, got {n}"
        )));
    }
    if triangulation.vertex_count() != n {
        return Err(MeshError::invalid_parameter(format!(
            "triangulation covers {} vertices, outline has {n}",
            triangulation.vertex_count()
        )));
    }

    let mut mesh = Mesh::with_capacity(2 * n, 2 * triangulation.triangle_count() + 2 * n);

    for p in outline {
        mesh.add_vertex(to_ground(*p, 0.0));
    }
    for p in outline {
        mesh.add_vertex(to_ground(*p, height));
    }

    let top = n as u32;
    for &[a, b, c] in triangulation.triangles() {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(c + top, b + top, a + top);
    }

    // Caps are always counter-clockwise; a clockwise ring flips the sides.
    let clockwise = signed_area(outline) < 0.0;
    for i in 0..n as u32 {
        let next = (i + 1) % top;
        if clockwise {
            mesh.add_triangle(i, next, next + top);
            mesh.add_triangle(i, next + top, i + top);
        } else {
            mesh.add_triangle(i, next + top, next);
            mesh.add_triangle(i, i + top, next + top);
        }
    }

    Ok(mesh)
}
