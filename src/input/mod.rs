//! Input handling
//!
//! Converts platform pointer events into drag gestures for the scene.

pub mod gesture;

pub use gesture::{GestureEvent, GestureTracker, PointerEvent};
