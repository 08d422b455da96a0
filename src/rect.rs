// Copyright 2026 the Bezseg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A rectangle.

use crate::Point;

/// An axis-aligned rectangle.
///
/// `(x0, y0)` is the minimum corner and `(x1, y1)` the maximum corner.
/// The constructors that take points normalize the corners; nothing else
/// checks the ordering.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// The minimum x coordinate (left edge).
    pub x0: f64,
    /// The minimum y coordinate (top edge in y-down spaces).
    pub y0: f64,
    /// The maximum x coordinate (right edge).
    pub x1: f64,
    /// The maximum y coordinate (bottom edge in y-down spaces).
    pub y1: f64,
}

impl Rect {
    /// A new rectangle from minimum and maximum coordinates.
    #[inline(always)]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
        Rect { x0, y0, x1, y1 }
    }

    /// A new rectangle from two points.
    ///
    /// The result will have non-negative width and height.
    #[inline]
    pub fn from_points(p0: impl Into<Point>, p1: impl Into<Point>) -> Rect {
        let p0 = p0.into();
        let p1 = p1.into();
        Rect::new(p0.x.min(p1.x), p0.y.min(p1.y), p0.x.max(p1.x), p0.y.max(p1.y))
    }

    /// The minimum corner.
    #[inline]
    pub fn min_corner(&self) -> Point {
        Point::new(self.x0, self.y0)
    }

    /// The maximum corner.
    #[inline]
    pub fn max_corner(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// The width of the rectangle.
    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    /// The height of the rectangle.
    #[inline]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    /// Whether this rectangle has zero area.
    ///
    /// A degenerate box around a straight horizontal or vertical segment, or
    /// around a single point, has zero area.
    #[inline]
    pub fn is_zero_area(&self) -> bool {
        self.width() * self.height() == 0.0
    }

    /// Whether `pt` lies inside the rectangle or on its boundary.
    #[inline]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x0 && pt.x <= self.x1 && pt.y >= self.y0 && pt.y <= self.y1
    }

    /// The smallest rectangle enclosing two rectangles.
    ///
    /// Results are valid only if width and height are non-negative.
    #[inline]
    pub fn union(&self, other: Rect) -> Rect {
        Rect {
            x0: self.x0.min(other.x0),
            y0: self.y0.min(other.y0),
            x1: self.x1.max(other.x1),
            y1: self.y1.max(other.y1),
        }
    }

    /// Is this rectangle [finite]?
    ///
    /// [finite]: f64::is_finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x0.is_finite() && self.x1.is_finite() && self.y0.is_finite() && self.y1.is_finite()
    }
}

impl From<(Point, Point)> for Rect {
    #[inline(always)]
    fn from(points: (Point, Point)) -> Rect {
        Rect::from_points(points.0, points.1)
    }
}
