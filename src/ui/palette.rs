//! Band colors and the contrast policy for the square
//!
//! The square paints each overlap in a foreground color that contrasts with
//! the band beneath it: dark on light bands, light on dark bands.

use tiny_skia::Color;

use crate::domain::band::Band;

/// Whether a band reads as light or dark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Light,
    Dark,
}

pub fn tone(band: Band) -> Tone {
    match band {
        Band::White | Band::Yellow => Tone::Light,
        Band::Pink | Band::Black => Tone::Dark,
    }
}

/// Fill color of the band itself
pub fn band_color(band: Band) -> Color {
    match band {
        Band::White => Color::from_rgba8(255, 255, 255, 255),
        Band::Pink => Color::from_rgba8(255, 45, 85, 255),
        Band::Yellow => Color::from_rgba8(255, 204, 0, 255),
        Band::Black => Color::from_rgba8(0, 0, 0, 255),
    }
}

/// Color of the square where it overlaps `band`
pub fn foreground_color(band: Band) -> Color {
    match tone(band) {
        Tone::Light => Color::BLACK,
        Tone::Dark => Color::WHITE,
    }
}
