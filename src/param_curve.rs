// Copyright 2026 the Bezseg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A trait for curves parametrized by a scalar.

use arrayvec::ArrayVec;

use crate::common::min_max;
use crate::{Axis, Point, Rect};

/// The step used to approximate the arc length of a quadratic Bézier.
pub const QUAD_ARCLEN_STEP: f64 = 0.01;

/// The step used to approximate the arc length of a cubic Bézier.
///
/// Finer than [`QUAD_ARCLEN_STEP`] since cubics can bend twice.
pub const CUBIC_ARCLEN_STEP: f64 = 0.005;

/// The maximum number of extrema that can be reported in the `ParamCurveExtrema` trait.
///
/// This is 2 per axis, which is sufficient for cubic Béziers.
pub const MAX_EXTREMA: usize = 4;

/// A curve parametrized by a scalar.
///
/// Evaluation is defined for every `t`; values outside `[0, 1]`
/// extrapolate the curve's polynomial.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A parametrized curve that can have its arc length measured.
pub trait ParamCurveArclen: ParamCurve {
    /// The arc length of the curve.
    ///
    /// For Bézier segments this is a fixed-step polyline approximation and
    /// slightly underestimates the true length.
    fn arclen(&self) -> f64;
}

/// A parametrized curve that reports its extrema.
pub trait ParamCurveExtrema: ParamCurve {
    /// Compute the parameters in `[0, 1]` at which the coordinate along
    /// `axis` has zero derivative.
    ///
    /// The order of the returned values is unspecified.
    fn axis_extrema(&self, axis: Axis) -> ArrayVec<f64, 2>;

    /// Compute the extrema of the curve over both axes.
    ///
    /// Only extrema within the interior of the curve count. The result is
    /// sorted by parameter.
    fn extrema(&self) -> ArrayVec<f64, MAX_EXTREMA> {
        let mut result = ArrayVec::new();
        for axis in Axis::ALL {
            for t in self.axis_extrema(axis) {
                if t > 0.0 && t < 1.0 {
                    result.push(t);
                }
            }
        }
        result.sort_unstable_by(f64::total_cmp);
        result
    }

    /// The range of coordinates the curve covers along `axis`.
    ///
    /// Seeded from the two endpoints, then widened by the coordinate at each
    /// of [`axis_extrema`](Self::axis_extrema). Only the coordinate along
    /// `axis` is folded in.
    fn axis_range(&self, axis: Axis) -> (f64, f64) {
        let extrema = self.axis_extrema(axis);
        min_max(
            self.start().get_coord(axis),
            self.end().get_coord(axis),
            extrema.iter().map(|&t| self.eval(t).get_coord(axis)),
        )
    }

    /// Return the smallest axis-aligned rectangle enclosing the curve.
    fn bounding_box(&self) -> Rect {
        let (x0, x1) = self.axis_range(Axis::Horizontal);
        let (y0, y1) = self.axis_range(Axis::Vertical);
        Rect::new(x0, y0, x1, y1)
    }
}
