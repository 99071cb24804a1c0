//! Scene state management
//!
//! Owns the band registry, the drag controller and the latest intersection
//! map, and defines how each incoming event changes them.

use crate::domain::band::{Band, BandMap};
use crate::domain::core::{Point, Rect, Size, Vector};
use crate::domain::drag::{DragController, DragState};
use crate::domain::intersection::{IntersectionMap, compute_intersections};
use crate::domain::registry::{BandRegistry, Readiness};

/// Events the scene reacts to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    /// Layout produced the frame of a band
    FrameMeasured(Band, Rect),
    /// The active gesture moved; translation is cumulative since its start
    DragChanged(Vector),
    /// The active gesture was released or cancelled
    DragEnded,
}

/// What processing an event did to the scene
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// Frame stored, still waiting for other bands
    AwaitingBands { missing: Vec<Band> },
    /// The last missing band arrived and intersections were computed for the first time
    BecameReady,
    /// Intersections were recomputed
    Recomputed,
    /// A new gesture anchored the square and moved it
    DragStarted { anchor: Point },
    /// The square moved before the bands were known, nothing was recomputed
    MovedBeforeReady,
    DragEnded { center: Point },
    /// The event did not apply in the current state
    Ignored,
}

/// Complete state of the scene
#[derive(Debug, Clone)]
pub struct SceneState {
    square_size: Size,
    registry: BandRegistry,
    drag: DragController,
    intersections: IntersectionMap,
}

impl SceneState {
    pub fn new(square_size: Size, initial_center: Point) -> Self {
        Self {
            square_size,
            registry: BandRegistry::new(),
            drag: DragController::new(initial_center),
            intersections: IntersectionMap::default(),
        }
    }

    pub fn square_center(&self) -> Point {
        self.drag.center()
    }

    pub fn square_size(&self) -> Size {
        self.square_size
    }

    /// Current rectangle of the square
    pub fn square_rect(&self) -> Rect {
        Rect::centered_at(self.drag.center(), self.square_size)
    }

    /// Latest intersection map; empty until every band is known
    pub fn intersections(&self) -> &IntersectionMap {
        &self.intersections
    }

    pub fn band_frames(&self) -> BandMap<Rect> {
        self.registry.all_frames()
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn is_ready(&self) -> bool {
        self.registry.is_ready()
    }

    /// Processes a scene event and reports the resulting transition
    pub fn process_event(&mut self, event: SceneEvent) -> Transition {
        match event {
            SceneEvent::FrameMeasured(band, rect) => match self.registry.record_frame(band, rect) {
                Readiness::Pending { missing } => Transition::AwaitingBands { missing },
                Readiness::Ready => {
                    self.recompute();
                    Transition::BecameReady
                }
                Readiness::AlreadyReady => {
                    self.recompute();
                    Transition::Recomputed
                }
            },

            SceneEvent::DragChanged(translation) => {
                let starting = !self.drag.is_dragging();
                self.drag.on_drag_changed(translation);

                if !self.registry.is_ready() {
                    return Transition::MovedBeforeReady;
                }
                self.recompute();

                match self.drag.state() {
                    DragState::Dragging { anchor } if starting => Transition::DragStarted { anchor },
                    _ => Transition::Recomputed,
                }
            }

            SceneEvent::DragEnded => {
                if self.drag.on_drag_ended() {
                    Transition::DragEnded {
                        center: self.drag.center(),
                    }
                } else {
                    Transition::Ignored
                }
            }
        }
    }

    /// Replaces the intersection map with a fresh computation
    fn recompute(&mut self) {
        self.intersections =
            compute_intersections(self.drag.center(), self.square_size, &self.registry.all_frames());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> SceneState {
        SceneState::new(Size::new(100.0, 100.0), Point::new(100.0, 200.0))
    }

    fn measure_all(state: &mut SceneState) -> Vec<Transition> {
        Band::ALL
            .into_iter()
            .map(|band| {
                let rect = Rect::new(0.0, band.index() as f64 * 200.0, 400.0, 200.0);
                state.process_event(SceneEvent::FrameMeasured(band, rect))
            })
            .collect()
    }

    #[test]
    fn nothing_is_published_before_ready() {
        let mut state = state();
        let transition = state.process_event(SceneEvent::FrameMeasured(
            Band::White,
            Rect::new(0.0, 0.0, 400.0, 200.0),
        ));

        assert!(matches!(transition, Transition::AwaitingBands { .. }));
        assert!(state.intersections().is_empty());
        assert!(!state.is_ready());
    }

    #[test]
    fn readiness_triggers_first_computation() {
        let mut state = state();
        let transitions = measure_all(&mut state);

        assert_eq!(transitions.last(), Some(&Transition::BecameReady));
        assert_eq!(state.intersections().len(), Band::COUNT);

        // Square spans y in [150, 250): White and Pink
        let visible: Vec<Band> = state.intersections().visible().map(|(band, _)| band).collect();
        assert_eq!(visible, vec![Band::White, Band::Pink]);
    }

    #[test]
    fn drag_recomputes_every_update() {
        let mut state = state();
        measure_all(&mut state);

        let started = state.process_event(SceneEvent::DragChanged(Vector::new(0.0, 0.0)));
        assert_eq!(
            started,
            Transition::DragStarted {
                anchor: Point::new(100.0, 200.0)
            }
        );

        let moved = state.process_event(SceneEvent::DragChanged(Vector::new(0.0, 100.0)));
        assert_eq!(moved, Transition::Recomputed);
        assert_eq!(state.square_center(), Point::new(100.0, 300.0));
        assert_eq!(
            state.intersections().get(Band::Pink),
            Some(Rect::new(50.0, 250.0, 100.0, 100.0))
        );
        assert!(!state.intersections().is_visible(Band::White));
    }

    #[test]
    fn drag_end_keeps_position_and_intersections() {
        let mut state = state();
        measure_all(&mut state);
        state.process_event(SceneEvent::DragChanged(Vector::new(20.0, 5.0)));
        let before = *state.intersections();

        assert_eq!(
            state.process_event(SceneEvent::DragEnded),
            Transition::DragEnded {
                center: Point::new(120.0, 205.0)
            }
        );
        assert_eq!(state.drag_state(), DragState::Idle);
        assert_eq!(*state.intersections(), before);
        assert_eq!(state.process_event(SceneEvent::DragEnded), Transition::Ignored);
    }

    #[test]
    fn drag_before_ready_moves_without_computing() {
        let mut state = state();
        let transition = state.process_event(SceneEvent::DragChanged(Vector::new(50.0, 0.0)));

        assert_eq!(transition, Transition::MovedBeforeReady);
        assert_eq!(state.square_center(), Point::new(150.0, 200.0));
        assert!(state.intersections().is_empty());

        // Readiness later computes against the moved square
        measure_all(&mut state);
        assert_eq!(
            state.intersections().get(Band::White),
            Some(Rect::new(100.0, 150.0, 100.0, 50.0))
        );
    }

    #[test]
    fn remeasuring_recomputes() {
        let mut state = state();
        measure_all(&mut state);

        // Surface shrank: White now covers the whole square
        let transition = state.process_event(SceneEvent::FrameMeasured(
            Band::White,
            Rect::new(0.0, 0.0, 400.0, 400.0),
        ));
        assert_eq!(transition, Transition::Recomputed);
        assert_eq!(
            state.intersections().get(Band::White),
            Some(Rect::new(50.0, 150.0, 100.0, 100.0))
        );
    }
}
