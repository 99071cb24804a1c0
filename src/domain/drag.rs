//! Drag state machine for the square
//!
//! Gestures report their translation cumulatively from the point where they
//! started. The controller anchors the square's center when a gesture begins
//! and derives every later position from that anchor, so movement is never
//! applied twice and rounding never compounds.

use crate::domain::core::{Point, Vector};

/// Whether a gesture is currently moving the square
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragState {
    /// No gesture in progress
    Idle,
    /// A gesture is in progress; `anchor` is the center at gesture start
    Dragging { anchor: Point },
}

impl Default for DragState {
    fn default() -> Self {
        Self::Idle
    }
}

/// Converts gesture updates into an absolute square center
#[derive(Debug, Clone, PartialEq)]
pub struct DragController {
    center: Point,
    state: DragState,
}

impl DragController {
    /// Creates an idle controller with the square centered at `center`
    pub fn new(center: Point) -> Self {
        Self {
            center,
            state: DragState::Idle,
        }
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// Applies a movement event and returns the new center
    ///
    /// `translation` is measured from where the gesture started. The first
    /// event after idle anchors at the current center before applying it.
    pub fn on_drag_changed(&mut self, translation: Vector) -> Point {
        let anchor = match self.state {
            DragState::Dragging { anchor } => anchor,
            DragState::Idle => {
                self.state = DragState::Dragging {
                    anchor: self.center,
                };
                self.center
            }
        };

        self.center = anchor + translation;
        self.center
    }

    /// Ends the current gesture
    ///
    /// The square stays where the last movement put it. Returns false when
    /// no gesture was in progress.
    pub fn on_drag_ended(&mut self) -> bool {
        let was_dragging = self.is_dragging();
        self.state = DragState::Idle;
        was_dragging
    }
}
