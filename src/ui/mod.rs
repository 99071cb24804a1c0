//! Presentation layer
//!
//! Measures the band stack, picks colors and rasterizes frames. Nothing in
//! here mutates scene state.

pub mod layout;
pub mod palette;
pub mod renderer;

pub use layout::measure_bands;
pub use renderer::{RendererError, SceneLayout, SceneRenderer};
