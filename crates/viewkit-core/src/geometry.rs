//! Scene and screen geometry value types.
//!
//! All types are plain owned values: the viewport controller and grid cache
//! mutate their own copies and hand rectangles around by value, so the math
//! can be exercised without any windowing environment.

use std::fmt;
use std::ops::{Add, Neg, Sub};

use serde::{Deserialize, Serialize};

/// A 2D point, in scene or screen coordinates depending on context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub fn origin() -> Self {
        Self::default()
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, other: Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, other: Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }
}

impl Neg for Point {
    type Output = Point;

    fn neg(self) -> Point {
        Point::new(-self.x, -self.y)
    }
}

/// A 2D extent (window pixel size or rectangle size).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned rectangle in scene coordinates.
///
/// Invariant: `right >= left` and `bottom >= top`. The viewport rectangle is
/// the region of the scene currently mapped onto the visible window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ViewRect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl ViewRect {
    /// Creates a rectangle from its four edges.
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Creates a rectangle from its top-left corner and a size.
    pub fn from_origin_size(left: f64, top: f64, size: Size) -> Self {
        Self::new(left, top, left + size.width, top + size.height)
    }

    /// The rectangle width.
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// The rectangle height.
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// The rectangle size.
    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// The top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// The bottom-right corner.
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right, self.bottom)
    }

    /// The center point.
    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Returns this rectangle moved by `delta` (all four edges shift).
    pub fn translated(&self, delta: Point) -> Self {
        Self::new(
            self.left + delta.x,
            self.top + delta.y,
            self.right + delta.x,
            self.bottom + delta.y,
        )
    }

    /// Returns this rectangle with all four edges multiplied by `factor`.
    ///
    /// Scaling is about the scene origin; zoom-about-pivot is expressed as
    /// translate-scale-translate on top of this.
    pub fn scaled(&self, factor: f64) -> Self {
        Self::new(
            self.left * factor,
            self.top * factor,
            self.right * factor,
            self.bottom * factor,
        )
    }

    /// Whether `other` lies entirely inside this rectangle (edges inclusive).
    pub fn contains_rect(&self, other: &ViewRect) -> bool {
        self.left <= other.left
            && self.top <= other.top
            && self.right >= other.right
            && self.bottom >= other.bottom
    }
}

impl fmt::Display for ViewRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({:.1}, {:.1}, {:.1}, {:.1})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
