//! # Floor Settings
//!
//! Runtime configuration injected into a [`Floor`](crate::Floor): trigger
//! height, wall elevation and facing, triangulation tolerance and the wall
//! catalogue. Every field has a default, so a partial JSON document is a
//! valid settings file.
//!
//! ```rust
//! use floor_mesh::FloorSettings;
//!
//! let settings = FloorSettings::from_json(r#"{ "trigger_height": 2.5 }"#).unwrap();
//! assert_eq!(settings.trigger_height, 2.5);
//! assert_eq!(settings.walls.len(), 3);
//! ```

use crate::error::MeshResult;
use config::constants::{
    CONNECTION_KIND_COUNT, DEFAULT_TRIGGER_HEIGHT, EAR_CLIP_MISMATCH_TOLERANCE,
    WALL_ELEVATION_OFFSET,
};
use floor_graph::ConnectionKind;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Asset placed along a connection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallAsset {
    pub name: String,
    /// Pitch baked into the asset, applied before alignment.
    pub base_pitch_degrees: f64,
    /// Asset scale; `x` is replaced by the connection length.
    pub base_scale: DVec3,
}

impl Default for WallAsset {
    fn default() -> Self {
        Self {
            name: String::new(),
            base_pitch_degrees: 0.0,
            base_scale: DVec3::ONE,
        }
    }
}

impl WallAsset {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Wall assets indexed by connection kind ordinal.
///
/// A `None` slot is an unassigned asset; connections of that kind get no
/// placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WallCatalogue {
    slots: Vec<Option<WallAsset>>,
}

impl Default for WallCatalogue {
    fn default() -> Self {
        let slots = ["wall", "door", "handrail"]
            .into_iter()
            .map(|name| Some(WallAsset::named(name)))
            .collect::<Vec<_>>();
        debug_assert_eq!(slots.len(), CONNECTION_KIND_COUNT);
        Self { slots }
    }
}

impl WallCatalogue {
    pub fn new(slots: Vec<Option<WallAsset>>) -> Self {
        Self { slots }
    }

    /// Catalogue with no assigned assets.
    pub fn empty() -> Self {
        Self::new(vec![None; CONNECTION_KIND_COUNT])
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Asset for a kind, if its slot exists and is assigned.
    pub fn asset_for(&self, kind: ConnectionKind) -> Option<&WallAsset> {
        self.slots.get(kind.ordinal())?.as_ref()
    }

    /// Assigns a slot, growing the catalogue if needed.
    pub fn set(&mut self, ordinal: usize, asset: Option<WallAsset>) {
        if ordinal >= self.slots.len() {
            self.slots.resize(ordinal + 1, None);
        }
        self.slots[ordinal] = asset;
    }
}

/// Settings for regeneration and wall placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FloorSettings {
    /// Trigger volume height; `0` disables the trigger.
    pub trigger_height: f64,
    /// Vertical lift of wall placements above the edge midpoint.
    pub wall_elevation_offset: f64,
    /// Direction wall faces are turned towards.
    pub wall_target_normal: DVec3,
    /// Missing triangles accepted before regeneration fails.
    pub mismatch_tolerance: usize,
    pub walls: WallCatalogue,
}

impl Default for FloorSettings {
    fn default() -> Self {
        Self {
            trigger_height: DEFAULT_TRIGGER_HEIGHT,
            wall_elevation_offset: WALL_ELEVATION_OFFSET,
            wall_target_normal: DVec3::new(1.0, 0.0, 1.0),
            mismatch_tolerance: EAR_CLIP_MISMATCH_TOLERANCE,
            walls: WallCatalogue::default(),
        }
    }
}

impl FloorSettings {
    pub fn from_json(json: &str) -> MeshResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> MeshResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
