//! Application controller and coordination layer
//!
//! The controller sits between the platform host and the scene. It feeds
//! layout measurements and pointer input into the scene state, logs the
//! transitions that matter, and renders frames on request.

use tiny_skia::Pixmap;

use crate::app::state::{SceneEvent, SceneState, Transition};
use crate::config::{ConfigError, SceneConfig};
use crate::domain::band::{Band, BandMap};
use crate::domain::core::{Point, Rect, Size, Vector};
use crate::domain::drag::DragState;
use crate::domain::intersection::IntersectionMap;
use crate::input::{GestureEvent, GestureTracker, PointerEvent};
use crate::ui::layout::measure_bands;
use crate::ui::renderer::{RendererError, SceneLayout, SceneRenderer};
use crate::platform::PlatformError;
use crate::util::logging::SCENE;

/// Application errors that can occur during controller operations
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Rendering error: {0}")]
    Renderer(#[from] RendererError),

    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),
}

/// Main application controller
///
/// Everything runs on the event-loop thread, so the controller is owned
/// directly by the host and mutated through `&mut self`.
pub struct SceneController {
    config: SceneConfig,
    surface: Size,
    state: SceneState,
    gesture: GestureTracker,
    renderer: SceneRenderer,
}

impl SceneController {
    /// Creates a controller for a validated configuration
    ///
    /// Bands are not known yet; call `measure` once the surface size is.
    pub fn new(config: SceneConfig) -> Result<Self, AppError> {
        config.validate()?;

        Ok(Self {
            surface: config.surface_size,
            state: SceneState::new(config.square_size, config.initial_center),
            gesture: GestureTracker::new(config.min_drag_distance),
            renderer: SceneRenderer::new(),
            config,
        })
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn surface(&self) -> Size {
        self.surface
    }

    pub fn square_center(&self) -> Point {
        self.state.square_center()
    }

    pub fn square_rect(&self) -> Rect {
        self.state.square_rect()
    }

    pub fn intersections(&self) -> &IntersectionMap {
        self.state.intersections()
    }

    pub fn band_frames(&self) -> BandMap<Rect> {
        self.state.band_frames()
    }

    pub fn drag_state(&self) -> DragState {
        self.state.drag_state()
    }

    pub fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Lays the bands out on a surface of `surface` size and records them
    ///
    /// Called once the surface exists and again whenever it is resized.
    pub fn measure(&mut self, surface: Size) {
        if surface.is_empty() {
            crate::blog!(SCENE, "Ignoring layout for empty surface {}x{}", surface.width, surface.height);
            return;
        }

        self.surface = surface;
        for (band, rect) in measure_bands(surface) {
            self.record_frame(band, rect);
        }
    }

    /// Records the measured frame of one band
    pub fn record_frame(&mut self, band: Band, rect: Rect) {
        let transition = self.state.process_event(SceneEvent::FrameMeasured(band, rect));
        self.log_transition(&transition);
    }

    /// Applies a drag update with the gesture's cumulative translation
    pub fn on_drag_changed(&mut self, translation: Vector) -> Point {
        let transition = self.state.process_event(SceneEvent::DragChanged(translation));
        self.log_transition(&transition);
        self.state.square_center()
    }

    /// Ends the active drag, leaving the square where it is
    pub fn on_drag_ended(&mut self) {
        let transition = self.state.process_event(SceneEvent::DragEnded);
        self.log_transition(&transition);
    }

    /// Returns true if `point` lands on a visible part of the square
    pub fn hit_test(&self, point: Point) -> bool {
        self.state
            .intersections()
            .visible()
            .any(|(_, rect)| rect.contains_point(point))
    }

    /// Feeds raw pointer input; returns true when the scene changed
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match self.gesture.handle(event) {
            Some(GestureEvent::Changed(translation)) => {
                self.on_drag_changed(translation);
                true
            }
            Some(GestureEvent::Ended) => {
                self.on_drag_ended();
                false
            }
            None => false,
        }
    }

    /// Primary button pressed at `position`
    pub fn pointer_pressed(&mut self, position: Point) -> bool {
        let on_square = self.hit_test(position);
        self.handle_pointer(PointerEvent::Pressed { position, on_square })
    }

    pub fn pointer_moved(&mut self, position: Point) -> bool {
        self.handle_pointer(PointerEvent::Moved(position))
    }

    pub fn pointer_released(&mut self, position: Point) -> bool {
        self.handle_pointer(PointerEvent::Released(position))
    }

    pub fn pointer_cancelled(&mut self) -> bool {
        self.handle_pointer(PointerEvent::Cancelled)
    }

    /// Returns true while a press on the square is being tracked
    pub fn is_tracking_pointer(&self) -> bool {
        self.gesture.is_tracking()
    }

    /// Builds the layout for the current frame
    pub fn layout(&self) -> Result<SceneLayout, AppError> {
        let layout = SceneLayout::new(
            self.surface,
            &self.state.band_frames(),
            self.state.square_rect(),
            self.state.intersections(),
            self.config.corner_radius,
        )?;
        Ok(layout)
    }

    /// Renders the current frame
    pub fn render(&mut self) -> Result<Pixmap, AppError> {
        let layout = self.layout()?;
        Ok(self.renderer.render_layout(&layout)?)
    }

    fn log_transition(&self, transition: &Transition) {
        match transition {
            Transition::BecameReady => {
                crate::blog!(SCENE, "All bands measured, {} visible overlap(s)", self.visible_count());
            }
            Transition::DragStarted { anchor } => {
                crate::blog!(SCENE, "Idle -> Dragging, anchored at ({}, {})", anchor.x, anchor.y);
            }
            Transition::DragEnded { center } => {
                crate::blog!(
                    SCENE,
                    "Dragging -> Idle, square at ({}, {}) over {} band(s)",
                    center.x,
                    center.y,
                    self.visible_count()
                );
            }
            Transition::MovedBeforeReady => {
                crate::blog!(SCENE, "Square moved before bands were measured");
            }
            Transition::AwaitingBands { .. } | Transition::Recomputed | Transition::Ignored => {}
        }
    }

    fn visible_count(&self) -> usize {
        self.state.intersections().visible().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controller() -> SceneController {
        let config = SceneConfig::default().with_surface_size(Size::new(400.0, 800.0));
        let mut controller = SceneController::new(config).unwrap();
        controller.measure(Size::new(400.0, 800.0));
        controller
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SceneConfig {
            corner_radius: -3.0,
            ..SceneConfig::default()
        };
        assert!(matches!(
            SceneController::new(config),
            Err(AppError::Config(ConfigError::NegativeCornerRadius(_)))
        ));
    }

    #[test]
    fn measuring_makes_scene_ready() {
        let controller = controller();
        assert!(controller.is_ready());
        assert_eq!(controller.band_frames().len(), Band::COUNT);
        assert_eq!(controller.intersections().len(), Band::COUNT);
    }

    #[test]
    fn empty_surface_is_ignored() {
        let mut controller = SceneController::new(SceneConfig::default()).unwrap();
        controller.measure(Size::new(0.0, 0.0));
        assert!(!controller.is_ready());
    }

    #[test]
    fn hit_test_covers_only_visible_square() {
        let controller = controller();
        // Default square spans x in [50, 150), y in [150, 250)
        assert!(controller.hit_test(Point::new(100.0, 200.0)));
        assert!(!controller.hit_test(Point::new(300.0, 200.0)));
        assert!(!controller.hit_test(Point::new(100.0, 260.0)));
    }

    #[test]
    fn pointer_drag_moves_square() {
        let mut controller = controller();

        assert!(!controller.pointer_pressed(Point::new(100.0, 200.0)));
        assert!(controller.pointer_moved(Point::new(100.0, 300.0)));
        assert_eq!(controller.square_center(), Point::new(100.0, 300.0));
        assert!(matches!(controller.drag_state(), DragState::Dragging { .. }));

        controller.pointer_released(Point::new(100.0, 300.0));
        assert_eq!(controller.drag_state(), DragState::Idle);
        assert_eq!(controller.square_center(), Point::new(100.0, 300.0));

        let visible: Vec<Band> = controller.intersections().visible().map(|(b, _)| b).collect();
        assert_eq!(visible, vec![Band::Pink]);
    }

    #[test]
    fn press_beside_square_does_not_drag() {
        let mut controller = controller();
        controller.pointer_pressed(Point::new(350.0, 700.0));
        assert!(!controller.pointer_moved(Point::new(10.0, 10.0)));
        assert_eq!(controller.square_center(), Point::new(100.0, 200.0));
    }

    #[test]
    fn small_jitter_is_not_a_drag() {
        let mut controller = controller();
        controller.pointer_pressed(Point::new(100.0, 200.0));
        assert!(!controller.pointer_moved(Point::new(104.0, 203.0)));
        controller.pointer_released(Point::new(104.0, 203.0));
        assert_eq!(controller.square_center(), Point::new(100.0, 200.0));
    }

    #[test]
    fn drag_continuity_through_inbound_interface() {
        let mut controller = controller();

        assert_eq!(controller.on_drag_changed(Vector::new(0.0, 0.0)), Point::new(100.0, 200.0));
        assert_eq!(controller.on_drag_changed(Vector::new(10.0, 5.0)), Point::new(110.0, 205.0));
        assert_eq!(controller.on_drag_changed(Vector::new(20.0, 5.0)), Point::new(120.0, 205.0));
        controller.on_drag_ended();
        assert_eq!(controller.on_drag_changed(Vector::new(0.0, 0.0)), Point::new(120.0, 205.0));
    }

    #[test]
    fn resize_remeasures_bands() {
        let mut controller = controller();
        controller.measure(Size::new(400.0, 400.0));

        assert_eq!(controller.surface(), Size::new(400.0, 400.0));
        assert_eq!(
            controller.band_frames().get(Band::Black),
            Some(&Rect::new(0.0, 300.0, 400.0, 100.0))
        );
        // Square spans y in [150, 250): Pink [100, 200) and Yellow [200, 300)
        let visible: Vec<Band> = controller.intersections().visible().map(|(b, _)| b).collect();
        assert_eq!(visible, vec![Band::Pink, Band::Yellow]);
    }

    #[test]
    fn renders_frame_of_surface_size() {
        let mut controller = controller();
        let pixmap = controller.render().unwrap();
        assert_eq!((pixmap.width(), pixmap.height()), (400, 800));
    }
}
