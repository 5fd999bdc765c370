//! # Mesh Builders
//!
//! Turn a triangulated 2D outline into 3D buffers:
//! - **build_surface_mesh**: flat floor mesh on the ground plane with planar UVs
//! - **build_trigger_volume**: outline extruded upward into a closed solid
//!
//! ## Plane Mapping
//!
//! A 2D point `(x, y)` lands at `(x, 0, y)`; elevation runs along +Y.

mod extrude;
mod surface;


pub use extrude::build_trigger_volume;
pub use surface::{build_surface_mesh, planar_uvs};

use glam::{DVec2, DVec3};

/// Lifts a ground-plane point to 3D at the given elevation.
#[inline]
pub fn to_ground(point: DVec2, elevation: f64) -> DVec3 {
    DVec3::new(point.x, elevation, point.y)
}
