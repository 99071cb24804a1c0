//! Core geometric value types
//!
//! All coordinates live in a single global space measured in logical pixels,
//! with the origin at the top-left corner of the drawing surface and y growing
//! downwards.

use std::ops::{Add, Sub};

/// A position in the global coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A displacement between two points
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const ZERO: Vector = Vector { dx: 0.0, dy: 0.0 };

    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    /// Euclidean length of the displacement
    pub fn length(&self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<Point> for Point {
    type Output = Vector;

    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of an axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Returns true if either dimension is zero or negative
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// Axis-aligned rectangle
///
/// A rectangle with a non-positive width or height is "empty": it covers no
/// area, even though its origin is still meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    /// Creates a new rectangle
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Creates a rectangle of `size` whose center sits at `center`
    pub fn centered_at(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    pub fn min_x(&self) -> f64 {
        self.x
    }

    pub fn min_y(&self) -> f64 {
        self.y
    }

    /// Returns the right edge coordinate
    pub fn max_x(&self) -> f64 {
        self.x + self.w
    }

    /// Returns the bottom edge coordinate
    pub fn max_y(&self) -> f64 {
        self.y + self.h
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Returns true if the rectangle covers no area
    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }

    /// Returns true if this rectangle contains the given point
    ///
    /// The left and top edges are inclusive, the right and bottom edges exclusive.
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// Returns the overlap of two rectangles
    ///
    /// The result always exists. When the rectangles are disjoint or merely
    /// share an edge the width and/or height are clamped to zero, so the
    /// result reports `is_empty()`.
    pub fn intersection(&self, other: &Rect) -> Rect {
        let x = self.min_x().max(other.min_x());
        let y = self.min_y().max(other.min_y());
        let w = (self.max_x().min(other.max_x()) - x).max(0.0);
        let h = (self.max_y().min(other.max_y()) - y).max(0.0);

        Rect::new(x, y, w, h)
    }

    pub fn area(&self) -> f64 {
        if self.is_empty() { 0.0 } else { self.w * self.h }
    }
}
