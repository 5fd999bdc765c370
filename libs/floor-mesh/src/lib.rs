//! # Floor Mesh
//!
//! Turns a floor graph into renderable and collision geometry.
//!
//! ## Architecture
//!
//! ```text
//! Graph → extract_loop → outline → triangulate → build_surface_mesh  → Mesh
//!                                             └→ build_trigger_volume → Mesh
//! Graph + FloorSettings → place_walls → WallPlacement per connection
//! ```
//!
//! [`Floor`] bundles the pipeline into a session with `regenerate()` and
//! `wall_placements()`.
//!
//! ## Usage
//!
//! ```rust
//! use floor_graph::{Graph, GraphRole};
//! use floor_mesh::{Floor, FloorSettings};
//! use glam::DVec2;
//!
//! let mut graph = Graph::new(GraphRole::Floor);
//! for p in [[0.0, 0.0], [4.0, 0.0], [4.0, 3.0], [0.0, 3.0]] {
//!     graph.add_node(DVec2::from(p));
//! }
//! for i in 0..4 {
//!     graph.add_connection(i, (i + 1) % 4, GraphRole::Floor.default_kind()).unwrap();
//! }
//!
//! let mut floor = Floor::new(graph, FloorSettings::default());
//! let artifact = floor.regenerate().unwrap();
//! assert_eq!(artifact.mesh.triangle_count(), 2);
//! assert_eq!(floor.wall_placements().len(), 4);
//! ```

pub mod error;
pub mod floor;
pub mod mesh;
pub mod ops;
pub mod settings;
pub mod triangulate;
pub mod walls;

pub use error::{MeshError, MeshResult};
pub use floor::{build_artifact, Floor, FloorArtifact};
pub use mesh::Mesh;
pub use ops::{build_surface_mesh, build_trigger_volume, planar_uvs};
pub use settings::{FloorSettings, WallAsset, WallCatalogue};
pub use triangulate::{signed_area, triangulate, triangulate_with_tolerance, Triangulation};
pub use walls::{place_walls, wall_rotation, WallPlacement};
