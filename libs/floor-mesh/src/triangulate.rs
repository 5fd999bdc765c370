//! # Ear-Clipping Triangulation
//!
//! Triangulates a simple 2D polygon given as an ordered vertex ring.
//!
//! ## Algorithm
//!
//! 1. Shoelace signed area; a clockwise ring is walked in reverse so the
//!    clipper always sees counter-clockwise order.
//! 2. For each vertex `c` with neighbours `p` and `n`, the corner is convex
//!    when `(c - p) × (n - c) > 0`. A convex corner is an ear when no other
//!    remaining vertex lies inside triangle `(p, c, n)`; points on an edge
//!    count as inside.
//! 3. Clipping an ear resumes at its predecessor so the freed neighbourhood
//!    is retested immediately. The last three vertices form the final
//!    triangle.
//!
//! Degenerate input (collinear or duplicated points) can leave no
//! qualifying ear; the loop gives up after `n² × EAR_CLIP_SAFETY_FACTOR`
//! iterations. A shortfall beyond the mismatch tolerance fails with
//! [`MeshError::NumericDegeneracy`].

use crate::error::{MeshError, MeshResult};
use config::constants::{EAR_CLIP_MISMATCH_TOLERANCE, EAR_CLIP_SAFETY_FACTOR};
use glam::DVec2;
use tracing::{debug, warn};

/// Triangles as index triples into the input ring.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangulation {
    triangles: Vec<[u32; 3]>,
    vertex_count: usize,
}

impl Triangulation {
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Number of vertices in the triangulated ring.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// Triangle count of a complete triangulation, `n - 2`.
    #[inline]
    pub fn expected_count(&self) -> usize {
        self.vertex_count.saturating_sub(2)
    }

    /// True when every vertex was consumed.
    pub fn is_complete(&self) -> bool {
        self.triangles.len() == self.expected_count()
    }

    /// Sum of triangle areas over the given ring. A ring of a different
    /// length than the triangulated one has no meaningful area and yields 0.
    pub fn area(&self, points: &[DVec2]) -> f64 {
        if points.len() != self.vertex_count {
            return 0.0;
        }
        self.triangles
            .iter()
            .map(|t| {
                let [a, b, c] = t.map(|i| points[i as usize]);
                cross(a, b, c).abs() * 0.5
            })
            .sum()
    }
}

/// Shoelace signed area. Positive for counter-clockwise rings.
pub fn signed_area(points: &[DVec2]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|i| points[i].perp_dot(points[(i + 1) % n]))
        .sum::<f64>()
        * 0.5
}

/// `(b - a) × (c - a)`; positive when `a → b → c` turns left.
#[inline]
fn cross(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

/// Containment in a counter-clockwise triangle, boundary inclusive.
#[inline]
fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    cross(a, b, p) >= 0.0 && cross(b, c, p) >= 0.0 && cross(c, a, p) >= 0.0
}

/// Triangulates with the default mismatch tolerance.
pub fn triangulate(points: &[DVec2]) -> MeshResult<Triangulation> {
    triangulate_with_tolerance(points, EAR_CLIP_MISMATCH_TOLERANCE)
}

/// Triangulates, accepting up to `tolerance` missing triangles.
///
/// # Errors
///
/// - `InsufficientGeometry` for fewer than 3 points
/// - `NumericDegeneracy` when more than `tolerance` triangles are missing
pub fn triangulate_with_tolerance(points: &[DVec2], tolerance: usize) -> MeshResult<Triangulation> {
    let n = points.len();
    if n < 3 {
        return Err(MeshError::insufficient(format!(
            "triangulation needs at least 3 vertices, got {n}"
        )));
    }

    let mut remaining: Vec<u32> = (0..n as u32).collect();
    let area = signed_area(points);
    if area < 0.0 {
        remaining.reverse();
    }
    debug!(vertices = n, area, "ear clipping");

    let mut triangles = Vec::with_capacity(n - 2);
    let bound = n * n * EAR_CLIP_SAFETY_FACTOR;
    let mut iterations = 0;
    let mut current = 0usize;

    while remaining.len() > 3 && iterations < bound {
        iterations += 1;

        let len = remaining.len();
        let prev = if current == 0 { len - 1 } else { current - 1 };
        let next = (current + 1) % len;

        let (pi, ci, ni) = (remaining[prev], remaining[current], remaining[next]);
        let (p, c, q) = (points[pi as usize], points[ci as usize], points[ni as usize]);

        if (c - p).perp_dot(q - c) > 0.0 {
            let blocked = remaining.iter().enumerate().any(|(j, &k)| {
                j != prev && j != current && j != next && point_in_triangle(points[k as usize], p, c, q)
            });

            if !blocked {
                triangles.push([pi, ci, ni]);
                remaining.remove(current);
                current = if current == 0 { remaining.len() - 1 } else { current - 1 };
                continue;
            }
        }

        current = (current + 1) % len;
    }

    if remaining.len() == 3 {
        triangles.push([remaining[0], remaining[1], remaining[2]]);
    }

    let result = Triangulation {
        triangles,
        vertex_count: n,
    };

    if !result.is_complete() {
        let produced = result.triangle_count();
        let expected = result.expected_count();
        if expected - produced > tolerance {
            warn!(produced, expected, iterations, "ear clipping hit safety bound");
            return Err(MeshError::NumericDegeneracy { produced, expected });
        }
        warn!(produced, expected, "accepting partial triangulation");
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn pts(raw: &[[f64; 2]]) -> Vec<DVec2> {
        raw.iter().map(|p| DVec2::from(*p)).collect()
    }

    fn unit_square() -> Vec<DVec2> {
        pts(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]])
    }

    #[test]
    fn test_signed_area_orientation() {
        let square = unit_square();
        assert_relative_eq!(signed_area(&square), 1.0);

        let mut reversed = square.clone();
        reversed.reverse();
        assert_relative_eq!(signed_area(&reversed), -1.0);
    }

    #[test]
    fn test_square_two_triangles_full_area() {
        let square = unit_square();
        let tri = triangulate(&square).unwrap();

        assert_eq!(tri.triangle_count(), 2);
        assert!(tri.is_complete());
        assert_relative_eq!(tri.area(&square), 1.0);
    }

    #[test]
    fn test_clockwise_input_yields_ccw_triangles() {
        let mut square = unit_square();
        square.reverse();
        let tri = triangulate(&square).unwrap();

        assert_eq!(tri.triangle_count(), 2);
        for t in tri.triangles() {
            let [a, b, c] = t.map(|i| square[i as usize]);
            assert!(cross(a, b, c) > 0.0);
        }
    }

    #[test]
    fn test_concave_l_shape() {
        let l = pts(&[
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 2.0],
            [0.0, 2.0],
        ]);
        let tri = triangulate(&l).unwrap();

        assert_eq!(tri.triangle_count(), 4);
        assert_relative_eq!(tri.area(&l), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_convex_polygon_counts() {
        for n in 3..12 {
            let ring: Vec<DVec2> = (0..n)
                .map(|i| {
                    let a = std::f64::consts::TAU * i as f64 / n as f64;
                    DVec2::new(a.cos(), a.sin())
                })
                .collect();
            let tri = triangulate(&ring).unwrap();
            assert_eq!(tri.triangle_count(), n - 2, "n = {n}");
        }
    }

    #[test]
    fn test_collinear_midpoint_on_edge() {
        let ring = pts(&[[0.0, 0.0], [0.5, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let tri = triangulate(&ring).unwrap();
        assert_eq!(tri.triangle_count(), 3);
        assert_relative_eq!(tri.area(&ring), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_triangle_passthrough() {
        let ring = pts(&[[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]);
        let tri = triangulate(&ring).unwrap();
        assert_eq!(tri.triangles(), &[[0, 1, 2]]);
    }

    #[test]
    fn test_area_of_foreign_ring_is_zero() {
        let square = unit_square();
        let tri = triangulate(&square).unwrap();
        assert_eq!(tri.area(&square[..3]), 0.0);
        assert_eq!(tri.area(&[]), 0.0);
    }

    #[test]
    fn test_insufficient_geometry() {
        let ring = pts(&[[0.0, 0.0], [1.0, 0.0]]);
        assert!(matches!(
            triangulate(&ring),
            Err(MeshError::InsufficientGeometry { .. })
        ));
    }

    #[test]
    fn test_collinear_ring_is_numeric_degeneracy() {
        let ring = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
        assert_eq!(
            triangulate(&ring),
            Err(MeshError::NumericDegeneracy {
                produced: 0,
                expected: 2
            })
        );
    }

    #[test]
    fn test_tolerance_accepts_partial_result() {
        let ring = pts(&[[0.0, 0.0], [1.0, 0.0], [2.0, 0.0], [3.0, 0.0]]);
        let tri = triangulate_with_tolerance(&ring, 2).unwrap();
        assert!(!tri.is_complete());
        assert_eq!(tri.triangle_count(), 0);
    }
}
