//! # Persisted Graph Data
//!
//! Serializable form of a [`Graph`]: ordered node positions and
//! connections referencing nodes by positional index. Stable handles are
//! an in-memory detail and are rebuilt on load.
//!
//! ## Example
//!
//! ```rust
//! use floor_graph::{Graph, GraphData, GraphRole};
//! use glam::DVec2;
//!
//! let mut graph = Graph::new(GraphRole::Path);
//! graph.add_node(DVec2::new(1.0, 2.0));
//!
//! let json = GraphData::from_graph(&graph).to_json().unwrap();
//! let restored = GraphData::from_json(&json).unwrap().into_graph().unwrap();
//! assert_eq!(restored.node_count(), 1);
//! ```

use crate::error::GraphResult;
use crate::graph::{ConnectionAttrs, Graph};
use crate::kind::{ConnectionKind, GraphRole};
use config::constants::{DEFAULT_CONNECTION_CARDINAL, DEFAULT_CONNECTION_WIDTH};
use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

fn default_width() -> f64 {
    DEFAULT_CONNECTION_WIDTH
}

fn default_cardinal() -> bool {
    DEFAULT_CONNECTION_CARDINAL
}

/// One persisted connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionData {
    pub node_a: usize,
    pub node_b: usize,
    #[serde(default)]
    pub kind: ConnectionKind,
    #[serde(default = "default_width")]
    pub width: f64,
    #[serde(default = "default_cardinal")]
    pub is_cardinal: bool,
}

/// Persisted graph state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphData {
    #[serde(default)]
    pub role: GraphRole,
    #[serde(default)]
    pub origin: DVec3,
    #[serde(default)]
    pub nodes: Vec<DVec2>,
    #[serde(default)]
    pub connections: Vec<ConnectionData>,
}

impl GraphData {
    /// Captures a graph with compact positional indices.
    pub fn from_graph(graph: &Graph) -> Self {
        Self {
            role: graph.role(),
            origin: graph.origin(),
            nodes: graph.node_positions().collect(),
            connections: graph
                .connections()
                .map(|c| ConnectionData {
                    node_a: c.node_a,
                    node_b: c.node_b,
                    kind: c.kind,
                    width: c.width,
                    is_cardinal: c.is_cardinal,
                })
                .collect(),
        }
    }

    /// Rebuilds a graph, validating every connection.
    ///
    /// Fails with `InvalidArgument` on out-of-range endpoints, self-loops,
    /// duplicate pairs or negative widths.
    pub fn into_graph(self) -> GraphResult<Graph> {
        let mut graph = Graph::with_origin(self.role, self.origin);
        for position in self.nodes {
            graph.add_node(position);
        }
        for c in self.connections {
            let attrs = ConnectionAttrs {
                kind: c.kind,
                width: c.width,
                is_cardinal: c.is_cardinal,
            };
            graph.add_connection_with(c.node_a, c.node_b, attrs)?;
        }
        Ok(graph)
    }

    pub fn to_json(&self) -> GraphResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> GraphResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl From<&Graph> for GraphData {
    fn from(graph: &Graph) -> Self {
        Self::from_graph(graph)
    }
}
