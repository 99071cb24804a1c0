//! Band stack measurement
//!
//! Lays the four bands out top to bottom with no spacing, each taking an
//! equal share of the surface height. Edges are snapped to whole pixels so
//! the bands tile the surface with no gaps or overlaps.

use crate::domain::band::Band;
use crate::domain::core::{Rect, Size};

/// Measures the frame of every band for a surface of `surface` size
///
/// The surface origin is the global origin. Results are in stacking order.
pub fn measure_bands(surface: Size) -> [(Band, Rect); Band::COUNT] {
    let share = surface.height / Band::COUNT as f64;
    let edge = |position: usize| (position as f64 * share).round();

    Band::ALL.map(|band| {
        let top = edge(band.index());
        let bottom = edge(band.index() + 1);
        (band, Rect::new(0.0, top, surface.width, bottom - top))
    })
}
