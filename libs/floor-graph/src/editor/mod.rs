//! # Graph Editor
//!
//! Authoring operations on a [`Graph`]: the gestures a host editor maps
//! from clicks, drags and key presses. Every mutating call is atomic
//! (a failed operation leaves the graph untouched), records an undo
//! snapshot and raises the `modified` flag that drives regeneration.
//!
//! Positions are local to the graph origin. Use [`Graph::to_local`] to
//! convert a world-space cursor first.

use crate::error::GraphResult;
use crate::graph::{ConnectionAttrs, Graph};
use crate::kind::{ConnectionKind, CycleDirection};
use config::constants::{
    CONNECTION_PICK_RADIUS, INSERT_PICK_RADIUS, MAX_UNDO_DEPTH, NODE_PICK_RADIUS,
};
use glam::DVec2;
use std::collections::VecDeque;
use tracing::debug;


// =============================================================================
// QUERY RESULTS
// =============================================================================

/// Element under a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Node(usize),
    Connection(usize),
}

/// Where a mid-edge insertion would land.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InsertionPreview {
    pub connection: usize,
    pub position: DVec2,
}

/// Outcome of [`GraphEditor::connect_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectOutcome {
    /// A new connection was created at this index.
    Connected(usize),
    /// The nodes were already connected; nothing changed.
    AlreadyConnected(usize),
    /// The target was the selected node itself, which was deleted.
    Deleted,
}

/// Closest point to `p` on segment `a`-`b`.
pub fn closest_point_on_segment(a: DVec2, b: DVec2, p: DVec2) -> DVec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

/// Rounds each coordinate to the nearest multiple of the snap step.
/// Non-positive steps leave that coordinate unchanged.
pub fn snap_to_grid(position: DVec2, step: DVec2) -> DVec2 {
    let snap = |v: f64, s: f64| if s > 0.0 { (v / s).round() * s } else { v };
    DVec2::new(snap(position.x, step.x), snap(position.y, step.y))
}

// =============================================================================
// EDITOR
// =============================================================================

/// Graph plus undo history and modification tracking.
#[derive(Debug, Clone)]
pub struct GraphEditor {
    graph: Graph,
    history: VecDeque<Graph>,
    modified: bool,
}

impl Default for GraphEditor {
    fn default() -> Self {
        Self::new(Graph::default())
    }
}

impl GraphEditor {
    pub fn new(graph: Graph) -> Self {
        Self {
            graph,
            history: VecDeque::new(),
            modified: true,
        }
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }

    /// True when the graph changed since the last [`mark_clean`](Self::mark_clean).
    #[inline]
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn mark_clean(&mut self) {
        self.modified = false;
    }

    pub fn mark_modified(&mut self) {
        self.modified = true;
    }

    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }

    /// Runs a mutation atomically and records the prior state for undo.
    fn edit<T>(
        &mut self,
        label: &'static str,
        op: impl FnOnce(&mut Graph) -> GraphResult<T>,
    ) -> GraphResult<T> {
        let snapshot = self.graph.clone();
        match op(&mut self.graph) {
            Ok(value) => {
                self.push_history(snapshot);
                debug!(op = label, nodes = self.graph.node_count(), "graph edited");
                Ok(value)
            }
            Err(err) => {
                self.graph = snapshot;
                Err(err)
            }
        }
    }

    fn push_history(&mut self, snapshot: Graph) {
        if self.history.len() == MAX_UNDO_DEPTH {
            self.history.pop_front();
        }
        self.history.push_back(snapshot);
        self.modified = true;
    }

    /// Restores the state before the last successful edit.
    pub fn undo(&mut self) -> bool {
        match self.history.pop_back() {
            Some(previous) => {
                self.graph = previous;
                self.modified = true;
                true
            }
            None => false,
        }
    }

    // =========================================================================
    // NODE OPERATIONS
    // =========================================================================

    pub fn add_node(&mut self, position: DVec2) -> GraphResult<usize> {
        self.edit("add_node", |g| Ok(g.add_node(position)))
    }

    /// Adds a node connected to `selected` with the role's default kind.
    /// Returns the new node's index, which becomes the next selection.
    pub fn add_node_connected(&mut self, selected: usize, position: DVec2) -> GraphResult<usize> {
        self.edit("add_node_connected", |g| {
            g.node_position(selected)?;
            let index = g.add_node(position);
            g.add_connection(selected, index, g.role().default_kind())?;
            Ok(index)
        })
    }

    /// Moves a node, optionally snapping to a grid. Returns the applied position.
    pub fn move_node(
        &mut self,
        index: usize,
        position: DVec2,
        snap: Option<DVec2>,
    ) -> GraphResult<DVec2> {
        let target = snap.map_or(position, |step| snap_to_grid(position, step));
        self.edit("move_node", |g| {
            g.set_node_position(index, target)?;
            Ok(target)
        })
    }

    pub fn delete_node(&mut self, index: usize) -> GraphResult<DVec2> {
        self.edit("delete_node", |g| g.delete_node(index))
    }

    /// Splits a connection by inserting a node at the point on it closest
    /// to `position`. Both halves inherit the split connection's attributes.
    /// Returns the new node's index.
    pub fn insert_node(&mut self, connection: usize, position: DVec2) -> GraphResult<usize> {
        self.edit("insert_node", |g| {
            let split = g.connection(connection)?;
            let a = g.node_position(split.node_a)?;
            let b = g.node_position(split.node_b)?;
            let at = closest_point_on_segment(a, b, position);

            let index = g.add_node(at);
            g.remove_connection(connection)?;
            g.add_connection_with(split.node_a, index, split.attrs())?;
            g.add_connection_with(index, split.node_b, split.attrs())?;
            Ok(index)
        })
    }

    // =========================================================================
    // CONNECTION OPERATIONS
    // =========================================================================

    /// Connects two nodes with the role's default kind.
    pub fn add_connection(&mut self, a: usize, b: usize) -> GraphResult<usize> {
        let kind = self.graph.role().default_kind();
        self.add_connection_of_kind(a, b, kind)
    }

    pub fn add_connection_of_kind(
        &mut self,
        a: usize,
        b: usize,
        kind: ConnectionKind,
    ) -> GraphResult<usize> {
        self.edit("add_connection", |g| {
            g.add_connection_with(a, b, ConnectionAttrs::of_kind(kind))
        })
    }

    /// Connect gesture from a selected node to a target node.
    ///
    /// Targeting the selected node itself deletes it. Targeting an already
    /// connected node is a no-op.
    pub fn connect_to(&mut self, selected: usize, target: usize) -> GraphResult<ConnectOutcome> {
        if selected == target {
            self.delete_node(selected)?;
            return Ok(ConnectOutcome::Deleted);
        }
        if let Some(existing) = self.graph.find_connection(selected, target) {
            return Ok(ConnectOutcome::AlreadyConnected(existing));
        }
        self.add_connection(selected, target)
            .map(ConnectOutcome::Connected)
    }

    pub fn remove_connection(&mut self, index: usize) -> GraphResult<()> {
        self.edit("remove_connection", |g| g.remove_connection(index).map(|_| ()))
    }

    pub fn set_connection_kind(&mut self, index: usize, kind: ConnectionKind) -> GraphResult<()> {
        self.edit("set_connection_kind", |g| g.set_connection_kind(index, kind))
    }

    /// Steps a connection's kind within its family. Returns the new kind.
    pub fn cycle_connection_kind(
        &mut self,
        index: usize,
        direction: CycleDirection,
    ) -> GraphResult<ConnectionKind> {
        self.edit("cycle_connection_kind", |g| {
            let kind = g.connection(index)?.kind.cycle(direction);
            g.set_connection_kind(index, kind)?;
            Ok(kind)
        })
    }

    pub fn set_connection_width(&mut self, index: usize, width: f64) -> GraphResult<()> {
        self.edit("set_connection_width", |g| g.set_connection_width(index, width))
    }

    pub fn set_connection_cardinal(&mut self, index: usize, is_cardinal: bool) -> GraphResult<()> {
        self.edit("set_connection_cardinal", |g| {
            g.set_connection_cardinal(index, is_cardinal)
        })
    }

    /// Replaces the whole graph (e.g. after loading), keeping it undoable.
    pub fn replace(&mut self, graph: Graph) {
        let previous = std::mem::replace(&mut self.graph, graph);
        self.push_history(previous);
    }

    // =========================================================================
    // PICKING
    // =========================================================================

    /// Nearest node within the node pick radius.
    pub fn pick_node(&self, point: DVec2) -> Option<usize> {
        self.graph
            .node_positions()
            .enumerate()
            .map(|(i, p)| (i, p.distance(point)))
            .filter(|&(_, d)| d < NODE_PICK_RADIUS)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(i, _)| i)
    }

    /// First connection within the connection pick radius.
    pub fn pick_connection(&self, point: DVec2) -> Option<usize> {
        self.connection_near(point, CONNECTION_PICK_RADIUS)
            .map(|(index, _)| index)
    }

    /// Node under the cursor, else connection under the cursor.
    pub fn pick(&self, point: DVec2) -> Option<Pick> {
        self.pick_node(point)
            .map(Pick::Node)
            .or_else(|| self.pick_connection(point).map(Pick::Connection))
    }

    /// Connection and projected point for a mid-edge insertion near `point`.
    pub fn insertion_preview(&self, point: DVec2) -> Option<InsertionPreview> {
        self.connection_near(point, INSERT_PICK_RADIUS)
            .map(|(connection, position)| InsertionPreview {
                connection,
                position,
            })
    }

    fn connection_near(&self, point: DVec2, radius: f64) -> Option<(usize, DVec2)> {
        self.graph.connections().enumerate().find_map(|(i, c)| {
            let a = self.graph.node_position(c.node_a).ok()?;
            let b = self.graph.node_position(c.node_b).ok()?;
            let closest = closest_point_on_segment(a, b, point);
            (closest.distance(point) < radius).then_some((i, closest))
        })
    }
}
