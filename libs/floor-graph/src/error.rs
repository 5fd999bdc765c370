//! # Graph Errors
//!
//! Error types for graph mutation, loop extraction and persistence.

use thiserror::Error;

/// Errors that can occur while editing or reading a floor graph.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    /// A node or connection index does not reference a live element.
    #[error("{what} index {index} out of range (len: {len})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        len: usize,
    },

    /// Malformed mutation request (self-loop, duplicate edge, ...).
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// The connections do not form a single closed simple loop.
    #[error("Degenerate graph: {message}")]
    DegenerateGraph { message: String },

    /// Persisted graph data could not be encoded or decoded.
    #[error("Serialization failed: {message}")]
    Serialization { message: String },
}

impl GraphError {
    /// Creates an out-of-range node error.
    pub fn node_index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            what: "node",
            index,
            len,
        }
    }

    /// Creates an out-of-range connection error.
    pub fn connection_index(index: usize, len: usize) -> Self {
        Self::IndexOutOfRange {
            what: "connection",
            index,
            len,
        }
    }

    /// Creates an invalid argument error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates a degenerate graph error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGraph {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: err.to_string(),
        }
    }
}

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
