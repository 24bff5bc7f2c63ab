//! Geometric primitives for diagram positioning.
//!
//! This module provides the small set of geometric types Flujo needs to
//! place fixed-position diagram elements and to size the rendered output.
//!
//! # Coordinate System
//!
//! Flujo uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! - **Origin**: Top-left corner at `(0, 0)`
//! - **X-axis**: Increases rightward
//! - **Y-axis**: Increases downward
//!
//! This convention matches SVG and most screen coordinate systems.

/// A 2D point representing a position in diagram coordinate space.
///
/// Points use `f32` coordinates. The coordinate system has origin at
/// top-left with Y increasing downward (see [module documentation](self)).
///
/// # Examples
///
/// ```
/// # use flujo_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

/// Width and height dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    /// Creates a new size with the specified dimensions
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height
    pub fn height(self) -> f32 {
        self.height
    }
}

/// A rectangular bounding box defined by minimum and maximum coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min: Point,
    max: Point,
}

impl Bounds {
    /// Creates bounds centered on a point with the given size.
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half = Point::new(size.width() / 2.0, size.height() / 2.0);
        Self {
            min: center.sub_point(half),
            max: center.add_point(half),
        }
    }

    /// Returns the minimum x-coordinate
    pub fn min_x(self) -> f32 {
        self.min.x
    }

    /// Returns the minimum y-coordinate
    pub fn min_y(self) -> f32 {
        self.min.y
    }

    /// Returns the maximum x-coordinate
    pub fn max_x(self) -> f32 {
        self.max.x
    }

    /// Returns the maximum y-coordinate
    pub fn max_y(self) -> f32 {
        self.max.y
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max.x - self.min.x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max.y - self.min.y
    }

    /// Merge this bounds with another, returning a bounds covering both.
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min: Point::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Point::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }

    /// Expand the bounds by a uniform margin on all four sides.
    pub fn add_margin(&self, margin: f32) -> Self {
        let offset = Point::new(margin, margin);
        Self {
            min: self.min.sub_point(offset),
            max: self.max.add_point(offset),
        }
    }
}
