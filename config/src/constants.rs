//! # Configuration Constants
//!
//! Centralized constants for the floor pipeline. Graph editing, loop
//! extraction, triangulation and artifact generation read their
//! tolerances and defaults from here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Connections**: Defaults for newly created connections
//! - **Editor**: Pick radii and history limits for authoring gestures
//! - **Triangulation**: Ear-clipping safety bounds
//! - **Artifacts**: Trigger volume and wall placement defaults

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum edge length for a connection to receive a wall placement.
///
/// Connections whose endpoints are closer than this are treated as
/// coincident and skipped.
pub const MIN_EDGE_LENGTH: f64 = 1e-6;

/// Tolerance for collapsing a UV bounding-box range.
///
/// When the polygon's extent along an axis is below this value the
/// range is replaced by `1.0` to avoid dividing by zero.
pub const UV_RANGE_EPSILON: f64 = 1e-6;

// =============================================================================
// CONNECTION CONSTANTS
// =============================================================================

/// Default width of a newly created connection.
pub const DEFAULT_CONNECTION_WIDTH: f64 = 0.5;

/// Default cardinality flag of a newly created connection.
///
/// Cardinal connections are expected to run axis-aligned.
pub const DEFAULT_CONNECTION_CARDINAL: bool = false;

// =============================================================================
// EDITOR CONSTANTS
// =============================================================================

/// Radius within which a point selects a node.
pub const NODE_PICK_RADIUS: f64 = 0.3;

/// Distance within which a point selects a connection.
///
/// Nodes always win over connections when both are in range.
pub const CONNECTION_PICK_RADIUS: f64 = 0.2;

/// Distance within which a point previews a mid-edge insertion.
pub const INSERT_PICK_RADIUS: f64 = 0.3;

/// Maximum number of snapshots kept on the editor undo stack.
///
/// The oldest snapshot is dropped once the limit is reached.
pub const MAX_UNDO_DEPTH: usize = 128;

// =============================================================================
// TRIANGULATION CONSTANTS
// =============================================================================

/// Multiplier for the ear-clipping iteration bound.
///
/// The triangulator gives up after `n * n * EAR_CLIP_SAFETY_FACTOR`
/// iterations on an `n`-vertex polygon.
///
/// # Example
///
/// ```rust
/// use config::constants::EAR_CLIP_SAFETY_FACTOR;
///
/// let n = 4;
/// assert_eq!(n * n * EAR_CLIP_SAFETY_FACTOR, 32);
/// ```
pub const EAR_CLIP_SAFETY_FACTOR: usize = 2;

/// Accepted difference between produced and expected triangle counts.
///
/// A triangulation missing more triangles than this fails with a
/// numeric degeneracy error. Zero means any shortfall fails.
pub const EAR_CLIP_MISMATCH_TOLERANCE: usize = 0;

// =============================================================================
// ARTIFACT CONSTANTS
// =============================================================================

/// Default height of the extruded room trigger volume.
pub const DEFAULT_TRIGGER_HEIGHT: f64 = 3.0;

/// Vertical offset applied to wall placements above the edge midpoint.
pub const WALL_ELEVATION_OFFSET: f64 = 0.5;

/// Base yaw (degrees) applied to every wall asset before alignment.
///
/// Wall assets are authored facing along their local X axis rotated by
/// this amount around the vertical axis.
pub const WALL_BASE_YAW_DEGREES: f64 = -90.0;

/// Number of connection kinds in either kind family.
///
/// Both `Normal/Path/Shortcut` and `Wall/Door/Handrail` have three
/// members; wall catalogues are indexed by this ordinal.
pub const CONNECTION_KIND_COUNT: usize = 3;
