#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Coordinates are `f32` logical pixels with the origin at the top-left.
//! Unlike integer cell geometry, these types are `PartialEq` only; callers
//! that need exact comparison in tests compare fields directly.

use serde::{Deserialize, Serialize};

/// Axis along which a split lays its two panes.
///
/// `Horizontal` places the panes side by side (main axis = width);
/// `Vertical` stacks them (main axis = height). Fixed for the lifetime of
/// one split instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitAxis {
    Horizontal,
    Vertical,
}

/// A point in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Coordinate along the given main axis.
    #[inline]
    pub const fn along(&self, axis: SplitAxis) -> f32 {
        match axis {
            SplitAxis::Horizontal => self.x,
            SplitAxis::Vertical => self.y,
        }
    }
}

/// A size in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Extent along the given main axis.
    #[inline]
    pub const fn span(&self, axis: SplitAxis) -> f32 {
        match axis {
            SplitAxis::Horizontal => self.width,
            SplitAxis::Vertical => self.height,
        }
    }

    /// Extent along the cross axis.
    #[inline]
    pub const fn cross(&self, axis: SplitAxis) -> f32 {
        match axis {
            SplitAxis::Horizontal => self.height,
            SplitAxis::Vertical => self.width,
        }
    }
}

/// A rectangle for layout bounds and hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with the given size.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0.0, 0.0, size.width, size.height)
    }

    /// Build a rectangle from a main-axis interval and a full cross extent.
    ///
    /// `start` and `span` are along `axis`; the cross axis covers
    /// `0..cross`.
    #[inline]
    pub const fn from_main(axis: SplitAxis, start: f32, span: f32, cross: f32) -> Self {
        match axis {
            SplitAxis::Horizontal => Self::new(start, 0.0, span, cross),
            SplitAxis::Vertical => Self::new(0.0, start, cross, span),
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Leading edge along the given main axis.
    #[inline]
    pub const fn main_start(&self, axis: SplitAxis) -> f32 {
        match axis {
            SplitAxis::Horizontal => self.x,
            SplitAxis::Vertical => self.y,
        }
    }

    /// Extent along the given main axis.
    #[inline]
    pub const fn main_span(&self, axis: SplitAxis) -> f32 {
        match axis {
            SplitAxis::Horizontal => self.width,
            SplitAxis::Vertical => self.height,
        }
    }

    /// Check if the rectangle has zero (or degenerate) area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point is inside the rectangle.
    ///
    /// Left/top edges are inclusive, right/bottom exclusive, matching hit
    /// testing on adjacent regions without double-claiming the boundary.
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}
