// Copyright 2026 the Bezseg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use arrayvec::ArrayVec;

use crate::common::{cubic_bernstein, cubic_extrema, polyline_arclen};
use crate::{
    Axis, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, QuadBez, CUBIC_ARCLEN_STEP,
};

/// A single cubic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct CubicBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline(always)]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        CubicBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
            p3: p3.into(),
        }
    }

    /// Returns a cubic Bézier segment that exactly represents `q`.
    ///
    /// The control points are placed two thirds of the way from each
    /// endpoint towards the quadratic's control point.
    pub fn from_quad(q: QuadBez) -> CubicBez {
        CubicBez::new(
            q.p0,
            q.p0 + (2.0 / 3.0) * (q.p1 - q.p0),
            q.p2 + (2.0 / 3.0) * (q.p1 - q.p2),
            q.p2,
        )
    }

    /// Returns a copy of this segment traversed in the opposite direction.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> CubicBez {
        CubicBez {
            p0: self.p3,
            p1: self.p2,
            p2: self.p1,
            p3: self.p0,
        }
    }

    /// Is this cubic Bezier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }

    /// Is this cubic Bezier curve NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan() || self.p3.is_nan()
    }
}

impl From<QuadBez> for CubicBez {
    #[inline]
    fn from(q: QuadBez) -> CubicBez {
        CubicBez::from_quad(q)
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        Point::new(
            cubic_bernstein(self.p0.x, self.p1.x, self.p2.x, self.p3.x, t),
            cubic_bernstein(self.p0.y, self.p1.y, self.p2.y, self.p3.y, t),
        )
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveArclen for CubicBez {
    /// Arclength of a cubic Bézier segment.
    ///
    /// Sums 200 chords of parameter width [`CUBIC_ARCLEN_STEP`].
    #[inline]
    fn arclen(&self) -> f64 {
        polyline_arclen(self, CUBIC_ARCLEN_STEP)
    }
}

impl ParamCurveExtrema for CubicBez {
    fn axis_extrema(&self, axis: Axis) -> ArrayVec<f64, 2> {
        cubic_extrema(
            self.p0.get_coord(axis),
            self.p1.get_coord(axis),
            self.p2.get_coord(axis),
            self.p3.get_coord(axis),
        )
    }
}
