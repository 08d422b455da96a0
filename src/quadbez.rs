// Copyright 2026 the Bezseg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use arrayvec::ArrayVec;

use crate::common::{polyline_arclen, quad_bernstein, quad_extremum};
use crate::{Axis, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, QUAD_ARCLEN_STEP};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[allow(missing_docs)]
pub struct QuadBez {
    pub p0: Point,
    pub p1: Point,
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline(always)]
    pub fn new<V: Into<Point>>(p0: V, p1: V, p2: V) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Returns a copy of this segment traversed in the opposite direction.
    #[must_use]
    #[inline]
    pub fn reversed(&self) -> QuadBez {
        QuadBez {
            p0: self.p2,
            p1: self.p1,
            p2: self.p0,
        }
    }

    /// Is this quadratic Bezier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite()
    }

    /// Is this quadratic Bezier curve NaN?
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.p0.is_nan() || self.p1.is_nan() || self.p2.is_nan()
    }
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        Point::new(
            quad_bernstein(self.p0.x, self.p1.x, self.p2.x, t),
            quad_bernstein(self.p0.y, self.p1.y, self.p2.y, t),
        )
    }

    #[inline(always)]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline(always)]
    fn end(&self) -> Point {
        self.p2
    }
}

impl ParamCurveArclen for QuadBez {
    /// Arclength of a quadratic Bézier segment.
    ///
    /// Sums 100 chords of parameter width [`QUAD_ARCLEN_STEP`].
    #[inline]
    fn arclen(&self) -> f64 {
        polyline_arclen(self, QUAD_ARCLEN_STEP)
    }
}

impl ParamCurveExtrema for QuadBez {
    fn axis_extrema(&self, axis: Axis) -> ArrayVec<f64, 2> {
        let mut result = ArrayVec::new();
        if let Some(t) = quad_extremum(
            self.p0.get_coord(axis),
            self.p1.get_coord(axis),
            self.p2.get_coord(axis),
        ) {
            result.push(t);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use crate::{Axis, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, QuadBez, Rect};

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    fn assert_encloses(q: &QuadBez, epsilon: f64) {
        let bbox = q.bounding_box();
        let n = 1000;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let p = q.eval(t);
            assert!(
                p.x >= bbox.x0 - epsilon
                    && p.x <= bbox.x1 + epsilon
                    && p.y >= bbox.y0 - epsilon
                    && p.y <= bbox.y1 + epsilon,
                "{p:?} at t={t} outside {bbox:?}"
            );
        }
    }

    #[test]
    fn quadbez_eval_endpoints() {
        let q = QuadBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8));
        assert_eq!(q.eval(0.0), q.start());
        assert_eq!(q.eval(1.0), q.end());
        assert_eq!(q.start(), Point::new(3.1, 4.1));
        assert_eq!(q.end(), Point::new(5.3, 5.8));
    }

    #[test]
    fn quadbez_eval() {
        // y = x^2
        let q = QuadBez::new((-1.0, 1.0), (0.0, -1.0), (1.0, 1.0));
        let n = 10;
        for i in 0..=n {
            let t = (i as f64) * (n as f64).recip();
            let p = q.eval(t);
            assert!((p.y - p.x * p.x).abs() < 1e-12);
            assert!((p.x - (2.0 * t - 1.0)).abs() < 1e-12);
        }
        // Extrapolation follows the same parabola.
        let p = q.eval(1.5);
        assert_near(p, Point::new(2.0, 4.0), 1e-12);
    }

    #[test]
    fn quadbez_bounding_box_arch() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
        let bbox = q.bounding_box();
        assert_eq!(bbox, Rect::new(0.0, 0.0, 2.0, 1.0));
        assert_eq!(q.axis_extrema(Axis::Horizontal).len(), 0);
        assert_eq!(q.axis_extrema(Axis::Vertical).as_slice(), &[0.5]);
    }

    #[test]
    fn quadbez_bounding_box_degenerate() {
        // 2B - A - C == 0 on both axes.
        let q = QuadBez::new((0.0, 0.0), (1.0, 3.0), (2.0, 6.0));
        assert_eq!(q.bounding_box(), Rect::new(0.0, 0.0, 2.0, 6.0));
        assert!(q.extrema().is_empty());

        // Every point the same.
        let q = QuadBez::new((1.5, -2.0), (1.5, -2.0), (1.5, -2.0));
        let bbox = q.bounding_box();
        assert_eq!(bbox, Rect::new(1.5, -2.0, 1.5, -2.0));
        assert!(bbox.is_zero_area());
    }

    #[test]
    fn quadbez_bounding_box_control_outside() {
        // Control point beyond the end; the curve turns back at t = 4/5.
        let q = QuadBez::new((0.0, 0.0), (4.0, 1.0), (3.0, 2.0));
        let bbox = q.bounding_box();
        let x_max = q.eval(4.0 / 5.0).x;
        assert!((bbox.x1 - x_max).abs() < 1e-12);
        assert!(bbox.x1 < 4.0);
        assert_encloses(&q, 1e-12);
    }

    #[test]
    fn quadbez_bounding_box_encloses() {
        let quads = [
            QuadBez::new((3.1, 4.1), (5.9, 2.6), (5.3, 5.8)),
            QuadBez::new((0.0, 0.5), (1.0, 1.0), (0.5, 0.0)),
            QuadBez::new((-1.0, 1.0), (0.0, -1.0), (1.0, 1.0)),
            QuadBez::new((10.0, -3.0), (-4.0, 8.0), (2.0, 2.0)),
        ];
        for q in &quads {
            assert_encloses(q, 1e-12);
            let bbox = q.bounding_box();
            assert!(bbox.contains(q.start()) && bbox.contains(q.end()));
        }
    }

    #[test]
    fn quadbez_bounding_box_reversed() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
        assert_eq!(q.reversed().bounding_box(), q.bounding_box());
        let q = QuadBez::new((10.0, -3.0), (-4.0, 8.0), (2.0, 2.0));
        let (a, b) = (q.bounding_box(), q.reversed().bounding_box());
        assert_near(a.min_corner(), b.min_corner(), 1e-12);
        assert_near(a.max_corner(), b.max_corner(), 1e-12);
    }

    #[test]
    fn quadbez_extrema() {
        // y = x^2
        let q = QuadBez::new((-1.0, 1.0), (0.0, -1.0), (1.0, 1.0));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 1);
        assert!((extrema[0] - 0.5).abs() < 1e-6);

        let q = QuadBez::new((0.0, 0.5), (1.0, 1.0), (0.5, 0.0));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 2);
        assert!((extrema[0] - 1.0 / 3.0).abs() < 1e-6);
        assert!((extrema[1] - 2.0 / 3.0).abs() < 1e-6);

        // Reverse direction
        let q = QuadBez::new((0.5, 0.0), (1.0, 1.0), (0.0, 0.5));
        let extrema = q.extrema();
        assert_eq!(extrema.len(), 2);
        assert!((extrema[0] - 1.0 / 3.0).abs() < 1e-6);
        assert!((extrema[1] - 2.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn quadbez_arclen_straight() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 0.0), (2.0, 0.0));
        let len = q.arclen();
        // The last chord ends at the accumulated t = 1.0000000000000007.
        assert!((len - 2.0000000000000013).abs() < 1e-12, "got {len}");
    }

    #[test]
    fn quadbez_arclen_chords() {
        let q = QuadBez::new((0.0, 0.0), (0.0, 0.5), (1.0, 1.0));
        let mut len = 0.0;
        let mut chords = 0;
        let mut t = 0.0;
        while t < 1.0 {
            len += q.eval(t).distance(q.eval(t + 0.01));
            t += 0.01;
            chords += 1;
        }
        assert_eq!(chords, 100);
        assert_eq!(q.arclen(), len);
    }

    #[test]
    fn quadbez_arclen() {
        let q = QuadBez::new((0.0, 0.0), (0.0, 0.5), (1.0, 1.0));
        let true_arclen = 0.5 * 5.0f64.sqrt() + 0.25 * (2.0 + 5.0f64.sqrt()).ln();
        let len = q.arclen();
        // The polyline is inscribed, so it never overshoots by more than the
        // sliver past t = 1 picked up by float accumulation.
        assert!(len < true_arclen + 1e-9, "got {len}, want {true_arclen}");
        assert!(true_arclen - len < 1e-4, "got {len}, want {true_arclen}");
    }

    #[test]
    fn quadbez_arclen_point() {
        // The Bernstein weights only sum to one up to rounding.
        let q = QuadBez::new((4.0, 4.0), (4.0, 4.0), (4.0, 4.0));
        assert!(q.arclen() < 1e-12);
    }
}
