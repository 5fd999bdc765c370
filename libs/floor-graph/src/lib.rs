//! # Floor Graph
//!
//! Planar node/connection graph used to author floor outlines and
//! navigation paths.
//!
//! ## Architecture
//!
//! ```text
//! GraphEditor (gestures, undo) → Graph (nodes, connections) → extract_loop → ordered ring
//!                                     ↕
//!                                GraphData (JSON)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use floor_graph::{extract_loop, GraphEditor};
//! use glam::DVec2;
//!
//! let mut editor = GraphEditor::default();
//! let a = editor.add_node(DVec2::new(0.0, 0.0)).unwrap();
//! let b = editor.add_node_connected(a, DVec2::new(1.0, 0.0)).unwrap();
//! let c = editor.add_node_connected(b, DVec2::new(0.0, 1.0)).unwrap();
//! editor.add_connection(c, a).unwrap();
//!
//! assert_eq!(extract_loop(editor.graph()).unwrap(), vec![0, 1, 2]);
//! ```

pub mod arena;
pub mod debug;
pub mod editor;
pub mod error;
pub mod graph;
pub mod kind;
pub mod loop_extract;
pub mod persist;

pub use arena::NodeId;
pub use debug::{debug_lines, rasterize_connections, DebugLine, LineStyle, RasterGrid};
pub use editor::{ConnectOutcome, GraphEditor, InsertionPreview, Pick};
pub use error::{GraphError, GraphResult};
pub use graph::{Connection, ConnectionAttrs, Graph};
pub use kind::{ConnectionKind, CycleDirection, GraphRole, LineType, WallType};
pub use loop_extract::extract_loop;
pub use persist::{ConnectionData, GraphData};
