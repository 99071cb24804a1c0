//! band-lens: four color bands and a draggable square that shows, band by
//! band, where it overlaps them.

pub mod app;
pub mod config;
pub mod domain;
pub mod input;
pub mod platform;
pub mod ui;
pub mod util;
