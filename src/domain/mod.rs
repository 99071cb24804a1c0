//! Domain logic and core data structures
//!
//! This module contains the pure geometry and state machines of the scene.
//! Nothing here knows about windows, pixels on a device, or rendering.

pub mod band;
pub mod core;
pub mod drag;
pub mod intersection;
pub mod registry;

pub use band::{Band, BandMap};
pub use self::core::{Point, Rect, Size, Vector};
pub use drag::{DragController, DragState};
pub use intersection::{IntersectionMap, compute_intersections};
pub use registry::{BandRegistry, Readiness};
