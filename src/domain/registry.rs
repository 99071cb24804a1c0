//! Band registry
//!
//! Holds the measured screen rectangle of each band. The registry also
//! reports when it first knows every band, so the first intersection pass
//! can be driven by data readiness instead of a guessed startup delay.

use crate::domain::band::{Band, BandMap};
use crate::domain::core::Rect;

/// Outcome of recording a band frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Readiness {
    /// Some bands have not been measured yet
    Pending { missing: Vec<Band> },
    /// This call completed the set of bands
    Ready,
    /// The set was already complete before this call
    AlreadyReady,
}

/// Measured rectangles of all bands
#[derive(Debug, Clone, Default)]
pub struct BandRegistry {
    frames: BandMap<Rect>,
}

impl BandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores or overwrites the rectangle for `band`
    ///
    /// Any rectangle is accepted, including degenerate ones.
    pub fn record_frame(&mut self, band: Band, rect: Rect) -> Readiness {
        let was_ready = self.frames.is_complete();
        self.frames.insert(band, rect);

        if was_ready {
            Readiness::AlreadyReady
        } else if self.frames.is_complete() {
            Readiness::Ready
        } else {
            Readiness::Pending {
                missing: self.frames.missing(),
            }
        }
    }

    /// Snapshot of the current frames
    pub fn all_frames(&self) -> BandMap<Rect> {
        self.frames
    }

    pub fn frame(&self, band: Band) -> Option<Rect> {
        self.frames.get(band).copied()
    }

    /// Returns true once every band has been measured
    pub fn is_ready(&self) -> bool {
        self.frames.is_complete()
    }
}
