//! # Debug Queries
//!
//! Pure visualization data for hosts that want to draw the graph. Nothing
//! here renders; the host decides whether and how to draw the results.
//!
//! - [`debug_lines`]: one styled world-space segment per connection
//! - [`rasterize_connections`]: floor-map raster of primary connections
//!   on a grid of half-tile triangles

use crate::graph::Graph;
use crate::kind::ConnectionKind;
use config::constants::EPSILON;
use glam::{DVec2, DVec3};
use std::collections::BTreeSet;

// =============================================================================
// DEBUG LINES
// =============================================================================

/// Stroke style of a debug line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dotted,
}

/// Styled segment for one connection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebugLine {
    pub connection: usize,
    pub start: DVec3,
    pub end: DVec3,
    pub style: LineStyle,
    /// RGBA in `[0, 1]`.
    pub color: [f32; 4],
}

const WHITE: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
const YELLOW: [f32; 4] = [1.0, 0.92, 0.016, 1.0];

fn line_look(kind: ConnectionKind) -> (LineStyle, [f32; 4]) {
    match kind.ordinal() {
        1 => (LineStyle::Dotted, RED),
        2 => (LineStyle::Dotted, YELLOW),
        _ => (LineStyle::Solid, WHITE),
    }
}

/// World-space segments for every connection, styled by kind.
pub fn debug_lines(graph: &Graph) -> Vec<DebugLine> {
    graph
        .connections()
        .enumerate()
        .filter_map(|(i, c)| {
            let start = graph.world_position(c.node_a).ok()?;
            let end = graph.world_position(c.node_b).ok()?;
            let (style, color) = line_look(c.kind);
            Some(DebugLine {
                connection: i,
                start,
                end,
                style,
                color,
            })
        })
        .collect()
}

// =============================================================================
// RASTER
// =============================================================================

/// A grid of square tiles, each split along its anti-diagonal into a
/// lower-left and an upper-right triangle.
///
/// Cell `(tri_x, tile_z)` has `tri_x = tile_x * 2 + upper`, so each row
/// holds `grid_width * 2` cells.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGrid {
    pub tile_size: f64,
    pub grid_width: usize,
    cells: BTreeSet<(usize, usize)>,
}

impl RasterGrid {
    fn new(tile_size: f64, grid_width: usize) -> Self {
        Self {
            tile_size,
            grid_width,
            cells: BTreeSet::new(),
        }
    }

    /// Marks the triangle cell under `point`. Points outside the grid are ignored.
    fn mark(&mut self, point: DVec2) {
        let fx = point.x / self.tile_size;
        let fz = point.y / self.tile_size;
        let (tile_x, tile_z) = (fx.floor(), fz.floor());
        if tile_x < 0.0 || tile_z < 0.0 {
            return;
        }
        let (tile_x, tile_z) = (tile_x as usize, tile_z as usize);
        if tile_x >= self.grid_width || tile_z >= self.grid_width {
            return;
        }
        let upper = (fx - tile_x as f64) + (fz - tile_z as f64) > 1.0;
        self.cells.insert((tile_x * 2 + usize::from(upper), tile_z));
    }

    pub fn is_marked(&self, tri_x: usize, tile_z: usize) -> bool {
        self.cells.contains(&(tri_x, tile_z))
    }

    pub fn marked_count(&self) -> usize {
        self.cells.len()
    }

    /// Marked cells as triangles on the ground plane (y = 0).
    pub fn triangles(&self) -> Vec<[DVec3; 3]> {
        let s = self.tile_size;
        self.cells
            .iter()
            .map(|&(tri_x, tile_z)| {
                let x = (tri_x / 2) as f64 * s;
                let z = tile_z as f64 * s;
                if tri_x % 2 == 1 {
                    [
                        DVec3::new(x + s, 0.0, z),
                        DVec3::new(x + s, 0.0, z + s),
                        DVec3::new(x, 0.0, z + s),
                    ]
                } else {
                    [
                        DVec3::new(x, 0.0, z),
                        DVec3::new(x + s, 0.0, z),
                        DVec3::new(x, 0.0, z + s),
                    ]
                }
            })
            .collect()
    }
}

/// Samples every primary-kind connection at quarter-tile steps and marks
/// the triangle cells the samples fall in. Node positions are used as-is
/// (local to the graph origin).
///
/// Tile sizes below `EPSILON` yield an empty grid, and each edge is
/// sampled at most `grid_width * 8` times.
pub fn rasterize_connections(graph: &Graph, tile_size: f64, grid_width: usize) -> RasterGrid {
    let mut grid = RasterGrid::new(tile_size, grid_width);
    if !tile_size.is_finite() || tile_size < EPSILON {
        return grid;
    }

    // Enough quarter-tile steps to cross the grid diagonal.
    let max_samples = grid_width.saturating_mul(8).max(1);
    let step = tile_size * 0.25;
    for c in graph.connections().filter(|c| c.kind.is_primary()) {
        let (Ok(start), Ok(end)) = (graph.node_position(c.node_a), graph.node_position(c.node_b))
        else {
            continue;
        };
        let count = ((start.distance(end) / step).ceil().max(1.0) as usize).min(max_samples);
        for i in 0..=count {
            grid.mark(start.lerp(end, i as f64 / count as f64));
        }
    }
    grid
}
