//! # Connection Kinds
//!
//! Typed edge attributes. Path graphs use [`LineType`], floor graphs use
//! [`WallType`]; both families have three members and share ordinals so
//! a wall catalogue can be indexed by either.

use serde::{Deserialize, Serialize};

/// Edge kind of a path graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineType {
    #[default]
    Normal,
    Path,
    Shortcut,
}

impl LineType {
    const ALL: [LineType; 3] = [LineType::Normal, LineType::Path, LineType::Shortcut];
}

/// Edge kind of a floor graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallType {
    #[default]
    Wall,
    Door,
    Handrail,
}

impl WallType {
    const ALL: [WallType; 3] = [WallType::Wall, WallType::Door, WallType::Handrail];
}

/// Which kind family a graph authors by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphRole {
    /// Navigation path (`Normal` / `Path` / `Shortcut`).
    Path,
    /// Floor outline with wall assets (`Wall` / `Door` / `Handrail`).
    #[default]
    Floor,
}

impl GraphRole {
    /// Kind given to connections created without an explicit kind.
    pub fn default_kind(self) -> ConnectionKind {
        match self {
            GraphRole::Path => ConnectionKind::Line(LineType::Normal),
            GraphRole::Floor => ConnectionKind::Wall(WallType::Wall),
        }
    }
}

/// Direction for cycling a connection kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleDirection {
    Next,
    Previous,
}

/// Kind tag carried by every connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionKind {
    Line(LineType),
    Wall(WallType),
}

impl Default for ConnectionKind {
    fn default() -> Self {
        GraphRole::default().default_kind()
    }
}

impl ConnectionKind {
    /// Position of the kind within its family.
    pub fn ordinal(self) -> usize {
        match self {
            ConnectionKind::Line(line) => line as usize,
            ConnectionKind::Wall(wall) => wall as usize,
        }
    }

    /// True for the first member of either family (`Normal` or `Wall`).
    pub fn is_primary(self) -> bool {
        self.ordinal() == 0
    }

    /// Rotates to the neighbouring kind of the same family, wrapping around.
    pub fn cycle(self, direction: CycleDirection) -> Self {
        let len = LineType::ALL.len();
        let ordinal = match direction {
            CycleDirection::Next => (self.ordinal() + 1) % len,
            CycleDirection::Previous => (self.ordinal() + len - 1) % len,
        };
        match self {
            ConnectionKind::Line(_) => ConnectionKind::Line(LineType::ALL[ordinal]),
            ConnectionKind::Wall(_) => ConnectionKind::Wall(WallType::ALL[ordinal]),
        }
    }
}
