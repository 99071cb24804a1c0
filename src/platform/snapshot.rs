//! Headless snapshot host
//!
//! Replays a scripted pointer drag against the scene, then renders the final
//! frame and writes it as PNG. Used for the non-interactive command line mode
//! and on platforms without a window host.

use std::path::Path;

use crate::app::controller::{AppError, SceneController};
use crate::config::SceneConfig;
use crate::domain::band::Band;
use crate::domain::core::{Point, Vector};
use crate::input::PointerEvent;
use crate::ui::renderer::save_png;
use crate::util::logging::SNAPSHOT;

/// Number of pointer moves in the scripted drag
const DRAG_STEPS: usize = 12;

/// Result of a snapshot run
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotSummary {
    pub final_center: Point,
    /// Bands the square overlaps in the written frame, top to bottom
    pub visible_bands: Vec<Band>,
}

/// Pointer events that press at `start`, move in `steps` even increments by
/// `offset`, and release at the end point
pub fn scripted_drag(start: Point, offset: Vector, steps: usize) -> Vec<PointerEvent> {
    let steps = steps.max(1);
    let mut events = Vec::with_capacity(steps + 2);

    events.push(PointerEvent::Pressed {
        position: start,
        on_square: true,
    });
    for step in 1..=steps {
        let fraction = step as f64 / steps as f64;
        events.push(PointerEvent::Moved(
            start + Vector::new(offset.dx * fraction, offset.dy * fraction),
        ));
    }
    events.push(PointerEvent::Released(start + offset));

    events
}

/// Runs the scripted drag for `config` and writes the final frame to `output`
///
/// The square is dragged from its initial center to the middle of the
/// boundary between the second and third band, so the frame shows it split.
pub fn run_snapshot(config: SceneConfig, output: &Path) -> Result<SnapshotSummary, AppError> {
    let surface = config.surface_size;
    let mut controller = SceneController::new(config)?;
    controller.measure(surface);

    let start = controller.square_center();
    let target = Point::new(surface.width / 2.0, surface.height / 2.0);
    for event in scripted_drag(start, target - start, DRAG_STEPS) {
        controller.handle_pointer(event);
    }

    let pixmap = controller.render()?;
    save_png(&pixmap, output)?;

    let summary = SnapshotSummary {
        final_center: controller.square_center(),
        visible_bands: controller
            .intersections()
            .visible()
            .map(|(band, _)| band)
            .collect(),
    };

    crate::blog!(
        SNAPSHOT,
        "Wrote {}x{} frame to {} (square at ({}, {}), over {:?})",
        pixmap.width(),
        pixmap.height(),
        output.display(),
        summary.final_center.x,
        summary.final_center.y,
        summary.visible_bands
    );

    Ok(summary)
}
