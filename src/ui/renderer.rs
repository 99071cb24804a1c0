//! Scene rendering
//!
//! Renders the band stack and the square with tiny-skia. Layout calculation
//! is kept apart from rasterization so the geometry can be tested without
//! touching pixels.

use std::path::Path;

use tiny_skia::{Color, FillRule, Mask, Paint, Path as SkiaPath, PathBuilder, Pixmap, Rect as SkiaRect, Transform};

use crate::domain::band::{Band, BandMap};
use crate::domain::core::{Rect, Size};
use crate::domain::intersection::IntersectionMap;
use crate::ui::palette::{band_color, foreground_color};

/// Rendering errors
#[derive(Debug, thiserror::Error)]
pub enum RendererError {
    #[error("Failed to create pixmap for rendering")]
    PixmapCreationFailed,

    #[error("Failed to create clip mask for the square")]
    MaskCreationFailed,

    #[error("Invalid canvas dimensions: {width}x{height}")]
    InvalidCanvasDimensions { width: f64, height: f64 },

    #[error("Failed to encode PNG: {0}")]
    PngEncodingFailed(String),
}

/// A solid rectangle with its color
#[derive(Debug, Clone)]
pub struct FilledRect {
    pub band: Band,
    pub rect: SkiaRect,
    pub color: Color,
}

/// Geometry of the square: its rounded outline and the overlap pieces
#[derive(Debug, Clone)]
pub struct SquareLayout {
    /// Outline of the whole square, used as the rounding clip
    pub outline: SkiaRect,
    pub corner_radius: f32,
    /// One piece per band the square overlaps, top to bottom
    pub pieces: Vec<FilledRect>,
}

/// Pre-calculated layout for one frame
#[derive(Debug, Clone)]
pub struct SceneLayout {
    pub canvas_width: u32,
    pub canvas_height: u32,
    pub bands: Vec<FilledRect>,
    /// `None` when the square overlaps no band
    pub square: Option<SquareLayout>,
}

impl SceneLayout {
    /// Builds the layout from the scene's current geometry
    pub fn new(
        surface: Size,
        band_frames: &BandMap<Rect>,
        square_rect: Rect,
        intersections: &IntersectionMap,
        corner_radius: f64,
    ) -> Result<Self, RendererError> {
        if surface.is_empty() || !surface.width.is_finite() || !surface.height.is_finite() {
            return Err(RendererError::InvalidCanvasDimensions {
                width: surface.width,
                height: surface.height,
            });
        }

        let bands = band_frames
            .iter()
            .filter_map(|(band, frame)| {
                to_skia_rect(frame).map(|rect| FilledRect {
                    band,
                    rect,
                    color: band_color(band),
                })
            })
            .collect();

        let pieces: Vec<FilledRect> = intersections
            .visible()
            .filter_map(|(band, overlap)| {
                to_skia_rect(&overlap).map(|rect| FilledRect {
                    band,
                    rect,
                    color: foreground_color(band),
                })
            })
            .collect();

        let square = match to_skia_rect(&square_rect) {
            Some(outline) if !pieces.is_empty() => Some(SquareLayout {
                outline,
                corner_radius: corner_radius as f32,
                pieces,
            }),
            _ => None,
        };

        Ok(Self {
            canvas_width: surface.width.ceil() as u32,
            canvas_height: surface.height.ceil() as u32,
            bands,
            square,
        })
    }
}

/// Software renderer for scene layouts
#[derive(Debug, Default)]
pub struct SceneRenderer {
    /// Clip mask reused between frames while the canvas size is unchanged
    mask_cache: Option<Mask>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Render a scene layout to a new pixmap
    pub fn render_layout(&mut self, layout: &SceneLayout) -> Result<Pixmap, RendererError> {
        let mut pixmap = Pixmap::new(layout.canvas_width, layout.canvas_height)
            .ok_or(RendererError::PixmapCreationFailed)?;

        pixmap.fill(Color::TRANSPARENT);

        for band in &layout.bands {
            fill(&mut pixmap, band, None);
        }

        if let Some(square) = &layout.square {
            self.render_square(&mut pixmap, square)?;
        }

        Ok(pixmap)
    }

    fn render_square(&mut self, pixmap: &mut Pixmap, square: &SquareLayout) -> Result<(), RendererError> {
        let mask = self.clip_mask(pixmap.width(), pixmap.height())?;

        if let Some(path) = rounded_rect_path(square.outline, square.corner_radius) {
            mask.fill_path(&path, FillRule::Winding, true, Transform::identity());
        }

        for piece in &square.pieces {
            fill(pixmap, piece, Some(&*mask));
        }

        Ok(())
    }

    /// Returns a cleared mask of the requested size
    fn clip_mask(&mut self, width: u32, height: u32) -> Result<&mut Mask, RendererError> {
        let reusable = self
            .mask_cache
            .as_ref()
            .is_some_and(|mask| mask.width() == width && mask.height() == height);

        if !reusable {
            self.mask_cache = Some(Mask::new(width, height).ok_or(RendererError::MaskCreationFailed)?);
        }

        let mask = self.mask_cache.as_mut().ok_or(RendererError::MaskCreationFailed)?;
        mask.data_mut().fill(0);
        Ok(mask)
    }
}

fn fill(pixmap: &mut Pixmap, filled: &FilledRect, mask: Option<&Mask>) {
    let mut paint = Paint::default();
    paint.set_color(filled.color);
    paint.anti_alias = false;

    pixmap.fill_rect(filled.rect, &paint, Transform::identity(), mask);
}

fn to_skia_rect(rect: &Rect) -> Option<SkiaRect> {
    SkiaRect::from_xywh(rect.x as f32, rect.y as f32, rect.w as f32, rect.h as f32)
}

/// Builds a rectangle path with circular corners
///
/// The radius is clamped to half of the shorter side.
fn rounded_rect_path(rect: SkiaRect, radius: f32) -> Option<SkiaPath> {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    if radius == 0.0 {
        return Some(PathBuilder::from_rect(rect));
    }

    // Cubic approximation of a quarter circle
    let k = radius * 0.552_284_8;
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());

    let mut pb = PathBuilder::new();
    pb.move_to(l + radius, t);
    pb.line_to(r - radius, t);
    pb.cubic_to(r - radius + k, t, r, t + radius - k, r, t + radius);
    pb.line_to(r, b - radius);
    pb.cubic_to(r, b - radius + k, r - radius + k, b, r - radius, b);
    pb.line_to(l + radius, b);
    pb.cubic_to(l + radius - k, b, l, b - radius + k, l, b - radius);
    pb.line_to(l, t + radius);
    pb.cubic_to(l, t + radius - k, l + radius - k, t, l + radius, t);
    pb.close();
    pb.finish()
}

/// Converts the premultiplied RGBA pixmap into the BGRA order GDI expects
pub fn pixmap_to_bgra(pixmap: &Pixmap) -> Vec<u8> {
    let mut bytes = pixmap.data().to_vec();
    for px in bytes.chunks_exact_mut(4) {
        px.swap(0, 2);
    }
    bytes
}

/// Writes the pixmap to `path` as PNG
pub fn save_png(pixmap: &Pixmap, path: &Path) -> Result<(), RendererError> {
    pixmap
        .save_png(path)
        .map_err(|err| RendererError::PngEncodingFailed(err.to_string()))
}
