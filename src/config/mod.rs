//! Configuration module for band-lens
//!
//! Holds the tunable constants of the scene (square size, start position,
//! corner rounding, drag threshold, surface size) and their validation.

pub mod scene;

pub use scene::{ConfigError, SceneConfig, parse_surface_size};
