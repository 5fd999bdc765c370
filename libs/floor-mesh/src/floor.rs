//! # Floor Session
//!
//! Owns an editable graph, its settings and the last generated artifact.
//! Hosts drive it explicitly: edit through [`Floor::editor_mut`], then call
//! [`Floor::regenerate`] (or [`Floor::regenerate_if_modified`] once per
//! frame) and query [`Floor::wall_placements`].
//!
//! Generated geometry is local to the graph origin.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use crate::ops::{build_surface_mesh, build_trigger_volume};
use crate::settings::FloorSettings;
use crate::triangulate::{triangulate_with_tolerance, Triangulation};
use crate::walls::{place_walls, WallPlacement};
use floor_graph::{debug_lines, extract_loop, DebugLine, Graph, GraphData, GraphEditor};
use glam::DVec2;
use tracing::{debug, warn};

/// Everything one successful regeneration produces.
#[derive(Debug, Clone, PartialEq)]
pub struct FloorArtifact {
    /// Node indices of the outline, in walk order.
    pub loop_indices: Vec<usize>,
    /// Node positions along the loop.
    pub outline: Vec<DVec2>,
    pub triangulation: Triangulation,
    /// Flat floor surface with planar UVs.
    pub mesh: Mesh,
    /// Extruded trigger solid, absent when the trigger height is zero.
    pub trigger: Option<Mesh>,
}

/// Runs loop extraction, triangulation and the mesh builders.
pub fn build_artifact(graph: &Graph, settings: &FloorSettings) -> MeshResult<FloorArtifact> {
    let loop_indices = extract_loop(graph)?;
    let outline = loop_indices
        .iter()
        .map(|&i| graph.node_position(i))
        .collect::<Result<Vec<_>, _>>()?;

    let triangulation = triangulate_with_tolerance(&outline, settings.mismatch_tolerance)?;
    let mesh = build_surface_mesh(&outline, &triangulation)?;
    let trigger = if settings.trigger_height > 0.0 {
        Some(build_trigger_volume(&outline, &triangulation, settings.trigger_height)?)
    } else {
        None
    };

    Ok(FloorArtifact {
        loop_indices,
        outline,
        triangulation,
        mesh,
        trigger,
    })
}

#[derive(Debug, Clone, Default)]
pub struct Floor {
    editor: GraphEditor,
    settings: FloorSettings,
    artifact: Option<FloorArtifact>,
}

impl Floor {
    pub fn new(graph: Graph, settings: FloorSettings) -> Self {
        Self {
            editor: GraphEditor::new(graph),
            settings,
            artifact: None,
        }
    }

    /// Loads a persisted graph.
    pub fn from_json(json: &str, settings: FloorSettings) -> MeshResult<Self> {
        let graph = GraphData::from_json(json)?.into_graph()?;
        Ok(Self::new(graph, settings))
    }

    /// Persists the graph with compact node indices.
    pub fn to_json(&self) -> MeshResult<String> {
        Ok(GraphData::from_graph(self.graph()).to_json()?)
    }

    #[inline]
    pub fn graph(&self) -> &Graph {
        self.editor.graph()
    }

    #[inline]
    pub fn editor(&self) -> &GraphEditor {
        &self.editor
    }

    #[inline]
    pub fn editor_mut(&mut self) -> &mut GraphEditor {
        &mut self.editor
    }

    #[inline]
    pub fn settings(&self) -> &FloorSettings {
        &self.settings
    }

    /// Replaces the settings and flags the floor for regeneration.
    pub fn set_settings(&mut self, settings: FloorSettings) {
        self.settings = settings;
        self.editor.mark_modified();
    }

    /// Last successful artifact. May be stale after a failed regeneration.
    pub fn artifact(&self) -> Option<&FloorArtifact> {
        self.artifact.as_ref()
    }

    /// Rebuilds the artifact from the current graph.
    ///
    /// On success the modified flag is cleared. On failure the previous
    /// artifact is kept and the graph stays flagged as modified.
    pub fn regenerate(&mut self) -> MeshResult<&FloorArtifact> {
        debug!(
            nodes = self.graph().node_count(),
            connections = self.graph().connection_count(),
            "regenerating floor"
        );

        match build_artifact(self.editor.graph(), &self.settings) {
            Ok(artifact) => {
                debug!(
                    vertices = artifact.mesh.vertex_count(),
                    triangles = artifact.mesh.triangle_count(),
                    "floor regenerated"
                );
                self.editor.mark_clean();
                Ok(self.artifact.insert(artifact))
            }
            Err(err) => {
                warn!(error = %err, stale = self.artifact.is_some(), "floor regeneration failed");
                Err(err)
            }
        }
    }

    /// Regenerates only when the graph changed since the last success.
    ///
    /// Returns whether a regeneration ran.
    pub fn regenerate_if_modified(&mut self) -> MeshResult<bool> {
        if !self.editor.is_modified() {
            return Ok(false);
        }
        self.regenerate()?;
        Ok(true)
    }

    pub fn wall_placements(&self) -> Vec<WallPlacement> {
        place_walls(self.graph(), &self.settings)
    }

    pub fn debug_lines(&self) -> Vec<DebugLine> {
        debug_lines(self.graph())
    }
}
