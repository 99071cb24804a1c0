//! Pointer drag recognition
//!
//! Turns raw pointer presses, moves and releases into drag gestures that
//! report their translation cumulatively from the press point. A press only
//! becomes a drag once the pointer has travelled the minimum distance, and
//! only presses that land on the square are tracked at all.

use crate::domain::core::{Point, Vector};

/// Raw pointer input delivered by the platform layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Primary button went down; `on_square` is the hit-test result
    Pressed { position: Point, on_square: bool },
    Moved(Point),
    Released(Point),
    /// The platform took the pointer away mid-gesture
    Cancelled,
}

/// Drag updates for the scene
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Translation since the press that started the gesture
    Changed(Vector),
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    /// Pressed on the square, not yet past the drag threshold
    Armed { start: Point },
    Dragging { start: Point },
}

/// Recognizes one drag gesture at a time
#[derive(Debug, Clone)]
pub struct GestureTracker {
    min_distance: f64,
    phase: Phase,
}

impl GestureTracker {
    pub fn new(min_distance: f64) -> Self {
        Self {
            min_distance,
            phase: Phase::Idle,
        }
    }

    /// Returns true while a recognized drag is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging { .. })
    }

    /// Returns true between a press on the square and its release
    pub fn is_tracking(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Feeds one pointer event, returning the drag update it produces, if any
    pub fn handle(&mut self, event: PointerEvent) -> Option<GestureEvent> {
        match (self.phase, event) {
            (Phase::Idle, PointerEvent::Pressed { position, on_square: true }) => {
                self.phase = Phase::Armed { start: position };
                None
            }

            (Phase::Armed { start }, PointerEvent::Moved(position)) => {
                let translation = position - start;
                if translation.length() < self.min_distance {
                    return None;
                }
                self.phase = Phase::Dragging { start };
                Some(GestureEvent::Changed(translation))
            }

            (Phase::Dragging { start }, PointerEvent::Moved(position)) => {
                Some(GestureEvent::Changed(position - start))
            }

            (Phase::Dragging { .. }, PointerEvent::Released(_) | PointerEvent::Cancelled) => {
                self.phase = Phase::Idle;
                Some(GestureEvent::Ended)
            }

            // A press that never moved far enough is a tap, not a drag
            (Phase::Armed { .. }, PointerEvent::Released(_) | PointerEvent::Cancelled) => {
                self.phase = Phase::Idle;
                None
            }

            // Presses off the square, moves while idle, or a second press mid-gesture
            _ => None,
        }
    }
}
