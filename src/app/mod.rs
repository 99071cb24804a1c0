//! Application orchestration layer
//!
//! This module coordinates between input, domain, UI, and platform layers.
//! It owns the scene state and turns host events into scene transitions.

pub mod controller;
pub mod state;

pub use controller::{AppError, SceneController};
pub use state::{SceneEvent, SceneState, Transition};
