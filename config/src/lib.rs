//! # Config Crate
//!
//! Centralized configuration constants for the floor graph and mesh
//! pipeline. Tolerances, editor pick radii and generation defaults are
//! defined here so the graph and mesh crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_TRIGGER_HEIGHT};
//!
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! assert!(value.abs() < EPSILON);
//! assert!(DEFAULT_TRIGGER_HEIGHT > 0.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Engine-Agnostic**: Values are plain numbers, no host engine types
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
