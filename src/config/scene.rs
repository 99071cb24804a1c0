use crate::domain::core::{Point, Size};
use thiserror::Error;

/// User-facing configuration for the scene
#[derive(Debug, Clone, PartialEq)]
pub struct SceneConfig {
    /// Fixed size of the draggable square
    pub square_size: Size,
    /// Center of the square before any drag
    pub initial_center: Point,
    /// Corner radius applied to the rendered square
    pub corner_radius: f64,
    /// Pointer travel required before a press turns into a drag
    pub min_drag_distance: f64,
    /// Size of the drawing surface the bands are laid out on
    pub surface_size: Size,
}

impl SceneConfig {
    pub const DEFAULT_SQUARE_SIDE: f64 = 100.0;
    pub const DEFAULT_CENTER: Point = Point { x: 100.0, y: 200.0 };
    pub const DEFAULT_CORNER_RADIUS: f64 = 20.0;
    pub const DEFAULT_MIN_DRAG_DISTANCE: f64 = 10.0;
    pub const DEFAULT_SURFACE: Size = Size {
        width: 390.0,
        height: 844.0,
    };

    /// Returns a copy with a different surface size
    pub fn with_surface_size(mut self, surface_size: Size) -> Self {
        self.surface_size = surface_size;
        self
    }

    /// Checks that every value can drive the scene
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.square_size.is_empty() {
            return Err(ConfigError::InvalidSquareSize {
                width: self.square_size.width,
                height: self.square_size.height,
            });
        }

        if self.corner_radius < 0.0 {
            return Err(ConfigError::NegativeCornerRadius(self.corner_radius));
        }

        if self.min_drag_distance < 0.0 {
            return Err(ConfigError::NegativeDragDistance(self.min_drag_distance));
        }

        if self.surface_size.is_empty() {
            return Err(ConfigError::EmptySurface {
                width: self.surface_size.width,
                height: self.surface_size.height,
            });
        }

        Ok(())
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            square_size: Size::new(Self::DEFAULT_SQUARE_SIDE, Self::DEFAULT_SQUARE_SIDE),
            initial_center: Self::DEFAULT_CENTER,
            corner_radius: Self::DEFAULT_CORNER_RADIUS,
            min_drag_distance: Self::DEFAULT_MIN_DRAG_DISTANCE,
            surface_size: Self::DEFAULT_SURFACE,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Square size must be positive, got {width}x{height}")]
    InvalidSquareSize { width: f64, height: f64 },
    #[error("Corner radius must not be negative, got {0}")]
    NegativeCornerRadius(f64),
    #[error("Minimum drag distance must not be negative, got {0}")]
    NegativeDragDistance(f64),
    #[error("Surface must have a positive area, got {width}x{height}")]
    EmptySurface { width: f64, height: f64 },
    #[error("Invalid surface size '{0}', expected <width>x<height>")]
    MalformedSurfaceSize(String),
    #[error("Missing value for {0}")]
    MissingArgumentValue(String),
    #[error("Unknown argument '{0}'")]
    UnknownArgument(String),
}

/// Parses a `<width>x<height>` surface size such as `390x844`
pub fn parse_surface_size(value: &str) -> Result<Size, ConfigError> {
    let malformed = || ConfigError::MalformedSurfaceSize(value.to_string());

    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(malformed)?;
    let width: u32 = width.trim().parse().map_err(|_| malformed())?;
    let height: u32 = height.trim().parse().map_err(|_| malformed())?;

    let size = Size::new(width as f64, height as f64);
    if size.is_empty() {
        return Err(ConfigError::EmptySurface {
            width: size.width,
            height: size.height,
        });
    }

    Ok(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SceneConfig::default();
        assert_eq!(config.square_size, Size::new(100.0, 100.0));
        assert_eq!(config.initial_center, Point::new(100.0, 200.0));
        assert_eq!(config.corner_radius, 20.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_square() {
        let config = SceneConfig {
            square_size: Size::new(0.0, 100.0),
            ..SceneConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSquareSize { .. })
        ));
    }

    #[test]
    fn rejects_negative_radius_and_distance() {
        let config = SceneConfig {
            corner_radius: -1.0,
            ..SceneConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeCornerRadius(-1.0)));

        let config = SceneConfig {
            min_drag_distance: -0.5,
            ..SceneConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::NegativeDragDistance(-0.5)));
    }

    #[test]
    fn surface_override_is_validated() {
        let config = SceneConfig::default().with_surface_size(Size::new(800.0, 0.0));
        assert!(matches!(config.validate(), Err(ConfigError::EmptySurface { .. })));
    }

    #[test]
    fn parses_surface_sizes() {
        assert_eq!(parse_surface_size("390x844"), Ok(Size::new(390.0, 844.0)));
        assert_eq!(parse_surface_size("1920X1080"), Ok(Size::new(1920.0, 1080.0)));
        assert!(matches!(
            parse_surface_size("wide"),
            Err(ConfigError::MalformedSurfaceSize(_))
        ));
        assert!(matches!(
            parse_surface_size("100x-4"),
            Err(ConfigError::MalformedSurfaceSize(_))
        ));
        assert!(matches!(
            parse_surface_size("0x400"),
            Err(ConfigError::EmptySurface { .. })
        ));
    }
}
