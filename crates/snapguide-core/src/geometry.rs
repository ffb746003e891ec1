#![forbid(unsafe_code)]

//! Geometric primitives in device-independent `f64` units.
//!
//! All types are plain value types. A [`Rect`] is an origin plus a size;
//! nothing here assumes which way the y axis grows, so the same math serves
//! y-up and y-down hosts.
//!
//! # Invariants
//!
//! 1. Sizes are non-negative by caller contract. A zero-size rect is valid
//!    (its span collapses to a single coordinate).
//! 2. `clamp_within` evaluates all four edge conditions against the input
//!    rect and applies corrections in min-x, min-y, max-x, max-y order, so
//!    for a rect larger than the container the max-edge correction wins.
//! 3. `contains` is half-open: min edges inclusive, max edges exclusive.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Axis
// ---------------------------------------------------------------------------

/// Orientation of a guide line.
///
/// Named for the direction the line runs: a [`Axis::Vertical`] guide is a
/// vertical line at a fixed x (it pins the x coordinate), and a
/// [`Axis::Horizontal`] guide is a horizontal line at a fixed y (it pins y).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    /// A horizontal line `y = c`; constrains the y coordinate.
    Horizontal,
    /// A vertical line `x = c`; constrains the x coordinate.
    Vertical,
}

impl Axis {
    /// Both axes, in the order transition events are reported.
    pub const BOTH: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A 2D position (or displacement, when used as a pointer offset).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The origin point.
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    /// Create a point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both components are finite (no NaN, no infinities).
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// ---------------------------------------------------------------------------
// Size
// ---------------------------------------------------------------------------

/// Width and height of a rect. Non-negative by caller contract.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// The empty size.
    pub const ZERO: Size = Size {
        width: 0.0,
        height: 0.0,
    };

    /// Create a size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when both dimensions are finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

// ---------------------------------------------------------------------------
// Span
// ---------------------------------------------------------------------------

/// The extent of a rect across one axis: its min edge, midpoint, and max
/// edge coordinates. These are the three candidate coordinates snap
/// resolution compares against guide lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub min: f64,
    pub mid: f64,
    pub max: f64,
}

impl Span {
    /// Build a span from its endpoints; the midpoint is derived.
    #[inline]
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            mid: min + (max - min) / 2.0,
            max,
        }
    }

    /// Extent length (`max - min`).
    #[inline]
    #[must_use]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle: origin plus size.
///
/// Represents both the moving box's frame and the container's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a rect from scalar origin and size components.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Create a rect from an origin point and a size.
    #[inline]
    #[must_use]
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    /// Same rect moved to a new origin.
    #[inline]
    #[must_use]
    pub const fn with_origin(&self, origin: Point) -> Self {
        Self {
            origin,
            size: self.size,
        }
    }

    /// Left edge.
    #[inline]
    #[must_use]
    pub const fn min_x(&self) -> f64 {
        self.origin.x
    }

    /// Horizontal midpoint.
    #[inline]
    #[must_use]
    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    /// Bottom edge in y-up hosts, top edge in y-down hosts.
    #[inline]
    #[must_use]
    pub const fn min_y(&self) -> f64 {
        self.origin.y
    }

    /// Vertical midpoint.
    #[inline]
    #[must_use]
    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    /// Far edge on the y axis.
    #[inline]
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    /// Center point.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.mid_x(), self.mid_y())
    }

    /// The rect's extent across one axis: the x extent for [`Axis::Vertical`]
    /// guides, the y extent for [`Axis::Horizontal`] guides.
    #[inline]
    #[must_use]
    pub fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::Vertical => Span::new(self.min_x(), self.max_x()),
            Axis::Horizontal => Span::new(self.min_y(), self.max_y()),
        }
    }

    /// Hit test. Half-open: min edges inclusive, max edges exclusive, so
    /// adjacent rects never both claim a shared edge.
    #[inline]
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min_x()
            && point.x < self.max_x()
            && point.y >= self.min_y()
            && point.y < self.max_y()
    }

    /// True when origin and size are all finite.
    #[inline]
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.origin.is_finite() && self.size.is_finite()
    }

    /// Push the rect back inside `container`, preserving its size.
    ///
    /// Conditions are evaluated against `self`, corrections applied in
    /// min-x, min-y, max-x, max-y order. A rect wider or taller than the
    /// container ends up flush with the container's max edge, its min edge
    /// hanging outside.
    #[must_use]
    pub fn clamp_within(&self, container: Rect) -> Rect {
        let mut origin = self.origin;
        if self.min_x() < container.min_x() {
            origin.x = container.min_x();
        }
        if self.min_y() < container.min_y() {
            origin.y = container.min_y();
        }
        if self.max_x() > container.max_x() {
            origin.x = container.max_x() - self.size.width;
        }
        if self.max_y() > container.max_y() {
            origin.y = container.max_y() - self.size.height;
        }
        self.with_origin(origin)
    }
}
