//! # Graph Store
//!
//! Owns nodes (2D positions relative to a graph origin) and connections
//! (typed edges between two nodes).
//!
//! ## Indexing
//!
//! The public contract is positional: `add_node` returns the node's
//! current index and deleting node `i` shifts every later node down by
//! one. Connections are stored against stable [`NodeId`] handles, so the
//! shift needs no connection rewriting; positional indices are resolved
//! on read. Use [`Graph::node_id`] / [`Graph::index_of`] to hold a node
//! reference across deletions.
//!
//! ## Example
//!
//! ```rust
//! use floor_graph::{Graph, GraphRole};
//! use glam::DVec2;
//!
//! let mut graph = Graph::new(GraphRole::Floor);
//! let a = graph.add_node(DVec2::new(0.0, 0.0));
//! let b = graph.add_node(DVec2::new(1.0, 0.0));
//! graph.add_connection(a, b, GraphRole::Floor.default_kind()).unwrap();
//! assert_eq!(graph.connection_count(), 1);
//! ```

use crate::arena::{NodeArena, NodeId};
use crate::error::{GraphError, GraphResult};
use crate::kind::{ConnectionKind, GraphRole};
use config::constants::{DEFAULT_CONNECTION_CARDINAL, DEFAULT_CONNECTION_WIDTH};
use glam::{DVec2, DVec3};

#[cfg(test)]
mod tests;

// =============================================================================
// CONNECTION
// =============================================================================

/// Attributes of a connection besides its endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConnectionAttrs {
    pub kind: ConnectionKind,
    pub width: f64,
    pub is_cardinal: bool,
}

impl ConnectionAttrs {
    /// Attributes with the default width and cardinality.
    pub fn of_kind(kind: ConnectionKind) -> Self {
        Self {
            kind,
            width: DEFAULT_CONNECTION_WIDTH,
            is_cardinal: DEFAULT_CONNECTION_CARDINAL,
        }
    }
}

fn check_width(width: f64) -> GraphResult<()> {
    if !width.is_finite() || width < 0.0 {
        return Err(GraphError::invalid(format!(
            "connection width must be a non-negative number, got {width}"
        )));
    }
    Ok(())
}

#[derive(Debug, Clone)]
struct StoredConnection {
    a: NodeId,
    b: NodeId,
    attrs: ConnectionAttrs,
}

impl StoredConnection {
    fn joins(&self, x: NodeId, y: NodeId) -> bool {
        (self.a == x && self.b == y) || (self.a == y && self.b == x)
    }

    fn touches(&self, id: NodeId) -> bool {
        self.a == id || self.b == id
    }
}

/// Read-only view of a connection with endpoints resolved to positional
/// node indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Connection {
    pub node_a: usize,
    pub node_b: usize,
    pub kind: ConnectionKind,
    pub width: f64,
    pub is_cardinal: bool,
}

impl Connection {
    /// Returns the endpoint opposite to `node`, if `node` is an endpoint.
    pub fn other(&self, node: usize) -> Option<usize> {
        if self.node_a == node {
            Some(self.node_b)
        } else if self.node_b == node {
            Some(self.node_a)
        } else {
            None
        }
    }

    pub fn attrs(&self) -> ConnectionAttrs {
        ConnectionAttrs {
            kind: self.kind,
            width: self.width,
            is_cardinal: self.is_cardinal,
        }
    }
}

// =============================================================================
// GRAPH
// =============================================================================

/// Planar node/connection graph.
#[derive(Debug, Clone)]
pub struct Graph {
    role: GraphRole,
    origin: DVec3,
    arena: NodeArena,
    order: Vec<NodeId>,
    connections: Vec<StoredConnection>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(GraphRole::default())
    }
}

impl Graph {
    /// Creates an empty graph at the world origin.
    pub fn new(role: GraphRole) -> Self {
        Self::with_origin(role, DVec3::ZERO)
    }

    /// Creates an empty graph whose node positions are relative to `origin`.
    pub fn with_origin(role: GraphRole, origin: DVec3) -> Self {
        Self {
            role,
            origin,
            arena: NodeArena::new(),
            order: Vec::new(),
            connections: Vec::new(),
        }
    }

    #[inline]
    pub fn role(&self) -> GraphRole {
        self.role
    }

    #[inline]
    pub fn origin(&self) -> DVec3 {
        self.origin
    }

    /// Moves the graph origin. Node positions stay relative to it.
    pub fn set_origin(&mut self, origin: DVec3) {
        self.origin = origin;
    }

    #[inline]
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    #[inline]
    pub fn connection_count(&self) -> usize {
        self.connections.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // =========================================================================
    // HANDLES
    // =========================================================================

    /// Stable handle of the node currently at `index`.
    pub fn node_id(&self, index: usize) -> Option<NodeId> {
        self.order.get(index).copied()
    }

    /// Current positional index of a node handle, or `None` once deleted.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.arena.get(id).map(|entry| entry.order)
    }

    fn require_node(&self, index: usize) -> GraphResult<NodeId> {
        self.node_id(index)
            .ok_or_else(|| GraphError::node_index(index, self.order.len()))
    }

    fn require_connection(&self, index: usize) -> GraphResult<&StoredConnection> {
        self.connections
            .get(index)
            .ok_or_else(|| GraphError::connection_index(index, self.connections.len()))
    }

    fn resolve(&self, stored: &StoredConnection) -> Connection {
        // Connections only ever reference live nodes; deletion removes them.
        let node_a = self.index_of(stored.a).unwrap_or(usize::MAX);
        let node_b = self.index_of(stored.b).unwrap_or(usize::MAX);
        Connection {
            node_a,
            node_b,
            kind: stored.attrs.kind,
            width: stored.attrs.width,
            is_cardinal: stored.attrs.is_cardinal,
        }
    }

    // =========================================================================
    // NODES
    // =========================================================================

    /// Appends a node and returns its index.
    pub fn add_node(&mut self, position: DVec2) -> usize {
        let index = self.order.len();
        let id = self.arena.insert(position, index);
        self.order.push(id);
        index
    }

    /// Returns a node position relative to the graph origin.
    pub fn node_position(&self, index: usize) -> GraphResult<DVec2> {
        let id = self.require_node(index)?;
        self.arena
            .get(id)
            .map(|entry| entry.position)
            .ok_or_else(|| GraphError::node_index(index, self.order.len()))
    }

    /// Iterates node positions in index order.
    pub fn node_positions(&self) -> impl Iterator<Item = DVec2> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.arena.get(*id).map(|entry| entry.position))
    }

    /// Moves a node. Fails with `IndexOutOfRange` for an invalid index.
    pub fn set_node_position(&mut self, index: usize, position: DVec2) -> GraphResult<()> {
        let id = self.require_node(index)?;
        let len = self.order.len();
        let entry = self
            .arena
            .get_mut(id)
            .ok_or_else(|| GraphError::node_index(index, len))?;
        entry.position = position;
        Ok(())
    }

    /// Deletes a node and every connection referencing it.
    ///
    /// Later nodes shift down by one index. Returns the removed position.
    pub fn delete_node(&mut self, index: usize) -> GraphResult<DVec2> {
        let id = self.require_node(index)?;
        let entry = self
            .arena
            .remove(id)
            .ok_or_else(|| GraphError::node_index(index, self.order.len()))?;

        self.order.remove(index);
        for (order, later) in self.order.iter().enumerate().skip(index) {
            if let Some(entry) = self.arena.get_mut(*later) {
                entry.order = order;
            }
        }
        self.connections.retain(|c| !c.touches(id));
        debug_assert_eq!(self.arena.len(), self.order.len());

        Ok(entry.position)
    }

    /// World position of a node: origin plus the stored offset on the
    /// horizontal plane, at the origin's elevation.
    pub fn world_position(&self, index: usize) -> GraphResult<DVec3> {
        let local = self.node_position(index)?;
        Ok(self.to_world(local))
    }

    /// Sets a node from a world position, discarding its elevation.
    pub fn set_world_position(&mut self, index: usize, world: DVec3) -> GraphResult<()> {
        let local = self.to_local(world);
        self.set_node_position(index, local)
    }

    /// Appends a node given in world space.
    pub fn add_world_node(&mut self, world: DVec3) -> usize {
        let local = self.to_local(world);
        self.add_node(local)
    }

    pub fn to_world(&self, local: DVec2) -> DVec3 {
        DVec3::new(
            self.origin.x + local.x,
            self.origin.y,
            self.origin.z + local.y,
        )
    }

    pub fn to_local(&self, world: DVec3) -> DVec2 {
        DVec2::new(world.x - self.origin.x, world.z - self.origin.z)
    }

    // =========================================================================
    // CONNECTIONS
    // =========================================================================

    /// Connects two nodes with default width and cardinality.
    pub fn add_connection(&mut self, a: usize, b: usize, kind: ConnectionKind) -> GraphResult<usize> {
        self.add_connection_with(a, b, ConnectionAttrs::of_kind(kind))
    }

    /// Connects two nodes with explicit attributes.
    ///
    /// Fails with `InvalidArgument` for a self-loop, an out-of-range
    /// endpoint, a pair that is already connected in either orientation,
    /// or a negative or non-finite width.
    pub fn add_connection_with(
        &mut self,
        a: usize,
        b: usize,
        attrs: ConnectionAttrs,
    ) -> GraphResult<usize> {
        if a == b {
            return Err(GraphError::invalid(format!("self-loop on node {a}")));
        }
        check_width(attrs.width)?;
        let len = self.order.len();
        let (id_a, id_b) = match (self.node_id(a), self.node_id(b)) {
            (Some(id_a), Some(id_b)) => (id_a, id_b),
            _ => {
                return Err(GraphError::invalid(format!(
                    "connection {a}-{b} references a missing node (len: {len})"
                )))
            }
        };
        if self.connections.iter().any(|c| c.joins(id_a, id_b)) {
            return Err(GraphError::invalid(format!(
                "connection {a}-{b} already exists"
            )));
        }

        self.connections.push(StoredConnection {
            a: id_a,
            b: id_b,
            attrs,
        });
        Ok(self.connections.len() - 1)
    }

    /// Removes a connection and returns it. Later connections shift down.
    pub fn remove_connection(&mut self, index: usize) -> GraphResult<Connection> {
        let resolved = self.connection(index)?;
        self.connections.remove(index);
        Ok(resolved)
    }

    pub fn connection(&self, index: usize) -> GraphResult<Connection> {
        let stored = self.require_connection(index)?;
        Ok(self.resolve(stored))
    }

    /// Iterates connections in index order.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        self.connections.iter().map(|c| self.resolve(c))
    }

    pub fn set_connection_kind(&mut self, index: usize, kind: ConnectionKind) -> GraphResult<()> {
        self.connection_attrs_mut(index)?.kind = kind;
        Ok(())
    }

    pub fn set_connection_width(&mut self, index: usize, width: f64) -> GraphResult<()> {
        check_width(width)?;
        self.connection_attrs_mut(index)?.width = width;
        Ok(())
    }

    pub fn set_connection_cardinal(&mut self, index: usize, is_cardinal: bool) -> GraphResult<()> {
        self.connection_attrs_mut(index)?.is_cardinal = is_cardinal;
        Ok(())
    }

    fn connection_attrs_mut(&mut self, index: usize) -> GraphResult<&mut ConnectionAttrs> {
        let len = self.connections.len();
        self.connections
            .get_mut(index)
            .map(|c| &mut c.attrs)
            .ok_or_else(|| GraphError::connection_index(index, len))
    }

    /// Index of the connection joining `a` and `b` in either orientation.
    pub fn find_connection(&self, a: usize, b: usize) -> Option<usize> {
        let (id_a, id_b) = (self.node_id(a)?, self.node_id(b)?);
        self.connections.iter().position(|c| c.joins(id_a, id_b))
    }

    /// Number of connections incident to a node.
    pub fn degree(&self, index: usize) -> GraphResult<usize> {
        let id = self.require_node(index)?;
        Ok(self.connections.iter().filter(|c| c.touches(id)).count())
    }

    /// Removes every node and connection.
    pub fn clear(&mut self) {
        self.arena = NodeArena::new();
        self.order.clear();
        self.connections.clear();
    }
}
