//! # Wall Placement
//!
//! One transform per connection that stretches a unit asset along the
//! edge. Rotation is composed as
//!
//! ```text
//! correction * align * base
//!   align      = arc from +X to the edge direction
//!   correction = yaw turning the asset face towards the target normal
//!   base       = asset pitch, then the fixed -90° yaw
//! ```
//!
//! Euler angles follow the yaw-pitch-roll convention (`Y * X * Z`).

use crate::settings::{FloorSettings, WallAsset};
use config::constants::{MIN_EDGE_LENGTH, WALL_BASE_YAW_DEGREES};
use floor_graph::{ConnectionKind, Graph};
use glam::{DQuat, DVec3, EulerRot};
use tracing::{debug, warn};

/// Placement of one wall asset.
#[derive(Debug, Clone, PartialEq)]
pub struct WallPlacement {
    /// Connection index in the graph.
    pub connection: usize,
    pub kind: ConnectionKind,
    pub asset: WallAsset,
    pub position: DVec3,
    pub rotation: DQuat,
    /// `x` is the edge length; `y` and `z` come from the asset.
    pub scale: DVec3,
}

/// Angle in radians from `from` to `to`, signed by rotation about `axis`.
pub fn signed_angle(from: DVec3, to: DVec3, axis: DVec3) -> f64 {
    let angle = from.angle_between(to);
    if axis.dot(from.cross(to)) < 0.0 {
        -angle
    } else {
        angle
    }
}

/// Rotation for an asset along a unit edge direction.
pub fn wall_rotation(direction: DVec3, target_normal: DVec3, base_pitch_degrees: f64) -> DQuat {
    let align = DQuat::from_rotation_arc(DVec3::X, direction);
    let current_normal = align * DVec3::Y;
    let correction = DQuat::from_axis_angle(
        DVec3::Y,
        signed_angle(current_normal, target_normal, direction),
    );
    let base = DQuat::from_euler(
        EulerRot::YXZ,
        WALL_BASE_YAW_DEGREES.to_radians(),
        base_pitch_degrees.to_radians(),
        0.0,
    );
    correction * align * base
}

/// Computes placements for every connection of `graph`.
///
/// Connections shorter than `MIN_EDGE_LENGTH` and connections whose kind
/// has no catalogue asset are skipped.
pub fn place_walls(graph: &Graph, settings: &FloorSettings) -> Vec<WallPlacement> {
    let mut placements = Vec::with_capacity(graph.connection_count());

    for (index, connection) in graph.connections().enumerate() {
        let (Ok(a), Ok(b)) = (
            graph.world_position(connection.node_a),
            graph.world_position(connection.node_b),
        ) else {
            continue;
        };

        let delta = b - a;
        let length = delta.length();
        if length <= MIN_EDGE_LENGTH {
            debug!(connection = index, length, "skipping zero-length wall");
            continue;
        }

        let Some(asset) = settings.walls.asset_for(connection.kind) else {
            warn!(
                connection = index,
                kind = ?connection.kind,
                "no wall asset assigned for kind"
            );
            continue;
        };

        let direction = delta / length;
        placements.push(WallPlacement {
            connection: index,
            kind: connection.kind,
            asset: asset.clone(),
            position: (a + b) * 0.5 + DVec3::Y * settings.wall_elevation_offset,
            rotation: wall_rotation(direction, settings.wall_target_normal, asset.base_pitch_degrees),
            scale: DVec3::new(length, asset.base_scale.y, asset.base_scale.z),
        });
    }

    debug!(
        placed = placements.len(),
        connections = graph.connection_count(),
        "wall placements"
    );
    placements
}
