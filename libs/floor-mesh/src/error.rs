//! # Mesh Errors
//!
//! Error types for triangulation and artifact generation.

use floor_graph::GraphError;
use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Error from the graph layer (loop extraction, invalid indices)
    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    /// Fewer than 3 usable vertices
    #[error("Insufficient geometry: {message}")]
    InsufficientGeometry { message: String },

    /// Ear clipping hit its safety bound before finishing
    #[error("Numeric degeneracy: produced {produced} of {expected} triangles")]
    NumericDegeneracy { produced: usize, expected: usize },

    /// Invalid builder parameter (e.g. non-positive extrusion height)
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Settings could not be parsed
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },
}

impl MeshError {
    /// Creates an insufficient geometry error.
    pub fn insufficient(message: impl Into<String>) -> Self {
        Self::InsufficientGeometry {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for MeshError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidSettings {
            message: err.to_string(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
