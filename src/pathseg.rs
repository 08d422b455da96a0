// Copyright 2026 the Bezseg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Path segments of mixed degree.

use core::fmt;

use arrayvec::ArrayVec;

use crate::{
    Axis, CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveExtrema, Point, QuadBez, Rect,
};

/// A segment of a Bézier path.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "schemars", derive(schemars::JsonSchema))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathSeg {
    /// A line segment.
    Line(Line),
    /// A quadratic bezier segment.
    Quad(QuadBez),
    /// A cubic bezier segment.
    Cubic(CubicBez),
}

/// An error which can be returned when building a [`PathSeg`] from points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentError {
    /// A segment needs 2, 3 or 4 points; this many were given.
    PointCount(usize),
}

impl PathSeg {
    /// Returns a new `PathSeg` describing the same path as `self`, but with
    /// the points reversed.
    #[must_use]
    pub fn reversed(&self) -> PathSeg {
        match self {
            PathSeg::Line(line) => PathSeg::Line(line.reversed()),
            PathSeg::Quad(q) => PathSeg::Quad(q.reversed()),
            PathSeg::Cubic(c) => PathSeg::Cubic(c.reversed()),
        }
    }

    /// Convert this segment to a cubic bezier with the same parametrization.
    pub fn to_cubic(&self) -> CubicBez {
        match *self {
            PathSeg::Line(Line { p0, p1 }) => {
                CubicBez::new(p0, p0.lerp(p1, 1.0 / 3.0), p0.lerp(p1, 2.0 / 3.0), p1)
            }
            PathSeg::Quad(q) => CubicBez::from_quad(q),
            PathSeg::Cubic(c) => c,
        }
    }

    /// Is this segment finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        match self {
            PathSeg::Line(line) => line.is_finite(),
            PathSeg::Quad(q) => q.is_finite(),
            PathSeg::Cubic(c) => c.is_finite(),
        }
    }
}

impl ParamCurve for PathSeg {
    fn eval(&self, t: f64) -> Point {
        match *self {
            PathSeg::Line(line) => line.eval(t),
            PathSeg::Quad(quad) => quad.eval(t),
            PathSeg::Cubic(cubic) => cubic.eval(t),
        }
    }

    fn start(&self) -> Point {
        match *self {
            PathSeg::Line(line) => line.start(),
            PathSeg::Quad(quad) => quad.start(),
            PathSeg::Cubic(cubic) => cubic.start(),
        }
    }

    fn end(&self) -> Point {
        match *self {
            PathSeg::Line(line) => line.end(),
            PathSeg::Quad(quad) => quad.end(),
            PathSeg::Cubic(cubic) => cubic.end(),
        }
    }
}

impl ParamCurveArclen for PathSeg {
    fn arclen(&self) -> f64 {
        match *self {
            PathSeg::Line(line) => line.arclen(),
            PathSeg::Quad(quad) => quad.arclen(),
            PathSeg::Cubic(cubic) => cubic.arclen(),
        }
    }
}

impl ParamCurveExtrema for PathSeg {
    fn axis_extrema(&self, axis: Axis) -> ArrayVec<f64, 2> {
        match *self {
            PathSeg::Line(line) => line.axis_extrema(axis),
            PathSeg::Quad(quad) => quad.axis_extrema(axis),
            PathSeg::Cubic(cubic) => cubic.axis_extrema(axis),
        }
    }

    fn bounding_box(&self) -> Rect {
        match *self {
            PathSeg::Line(line) => line.bounding_box(),
            PathSeg::Quad(quad) => quad.bounding_box(),
            PathSeg::Cubic(cubic) => cubic.bounding_box(),
        }
    }
}

impl From<Line> for PathSeg {
    #[inline(always)]
    fn from(line: Line) -> PathSeg {
        PathSeg::Line(line)
    }
}

impl From<QuadBez> for PathSeg {
    #[inline(always)]
    fn from(quad: QuadBez) -> PathSeg {
        PathSeg::Quad(quad)
    }
}

impl From<CubicBez> for PathSeg {
    #[inline(always)]
    fn from(cubic: CubicBez) -> PathSeg {
        PathSeg::Cubic(cubic)
    }
}

impl TryFrom<&[Point]> for PathSeg {
    type Error = SegmentError;

    /// Build the segment whose degree matches the number of points: a line
    /// from two, a quadratic from three, a cubic from four.
    fn try_from(pts: &[Point]) -> Result<PathSeg, SegmentError> {
        match *pts {
            [p0, p1] => Ok(PathSeg::Line(Line::new(p0, p1))),
            [p0, p1, p2] => Ok(PathSeg::Quad(QuadBez::new(p0, p1, p2))),
            [p0, p1, p2, p3] => Ok(PathSeg::Cubic(CubicBez::new(p0, p1, p2, p3))),
            _ => {
                log::debug!("cannot build a path segment from {} points", pts.len());
                Err(SegmentError::PointCount(pts.len()))
            }
        }
    }
}

impl fmt::Display for SegmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SegmentError::PointCount(n) => {
                write!(f, "a path segment needs 2 to 4 points, got {n}")
            }
        }
    }
}

impl core::error::Error for SegmentError {}

/// The smallest rectangle enclosing every segment, or `None` if there are no
/// segments.
pub fn segments_bounding_box(segs: impl IntoIterator<Item = PathSeg>) -> Option<Rect> {
    segs.into_iter()
        .map(|seg| seg.bounding_box())
        .reduce(|acc, bbox| acc.union(bbox))
}

/// The total arc length of a sequence of segments.
pub fn segments_arclen(segs: impl IntoIterator<Item = PathSeg>) -> f64 {
    segs.into_iter().map(|seg| seg.arclen()).sum()
}

#[cfg(test)]
mod tests {
    use crate::{
        segments_arclen, segments_bounding_box, CubicBez, Line, ParamCurve, ParamCurveArclen,
        ParamCurveExtrema, PathSeg, Point, QuadBez, Rect, SegmentError,
    };

    fn assert_send_sync<T: Send + Sync + Copy>() {}

    #[test]
    fn segments_are_plain_values() {
        assert_send_sync::<PathSeg>();
        assert_send_sync::<QuadBez>();
        assert_send_sync::<CubicBez>();
        assert_send_sync::<Rect>();
    }

    #[test]
    fn try_from_points() {
        let pts = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 2.0),
            Point::new(2.0, 0.0),
            Point::new(3.0, 1.0),
            Point::new(4.0, 4.0),
        ];
        assert_eq!(
            PathSeg::try_from(&pts[..2]),
            Ok(PathSeg::Line(Line::new(pts[0], pts[1])))
        );
        assert_eq!(
            PathSeg::try_from(&pts[..3]),
            Ok(PathSeg::Quad(QuadBez::new(pts[0], pts[1], pts[2])))
        );
        assert_eq!(
            PathSeg::try_from(&pts[..4]),
            Ok(PathSeg::Cubic(CubicBez::new(pts[0], pts[1], pts[2], pts[3])))
        );
        assert_eq!(PathSeg::try_from(&pts[..]), Err(SegmentError::PointCount(5)));
        assert_eq!(PathSeg::try_from(&pts[..1]), Err(SegmentError::PointCount(1)));
        assert_eq!(PathSeg::try_from(&pts[..0]), Err(SegmentError::PointCount(0)));
    }

    #[test]
    fn segment_error_display() {
        assert_eq!(
            SegmentError::PointCount(5).to_string(),
            "a path segment needs 2 to 4 points, got 5"
        );
    }

    #[test]
    fn dispatch_matches_variant() {
        let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
        let c = CubicBez::new((0.0, 0.0), (4.0, 1.0), (-3.0, 2.0), (1.0, 3.0));
        let l = Line::new((5.0, 1.0), (2.0, -3.0));

        let seg = PathSeg::from(q);
        assert_eq!(seg.eval(0.3), q.eval(0.3));
        assert_eq!(seg.start(), q.p0);
        assert_eq!(seg.end(), q.p2);
        assert_eq!(seg.bounding_box(), q.bounding_box());
        assert_eq!(seg.arclen(), q.arclen());
        assert_eq!(seg.extrema(), q.extrema());

        let seg = PathSeg::from(c);
        assert_eq!(seg.eval(0.3), c.eval(0.3));
        assert_eq!(seg.start(), c.p0);
        assert_eq!(seg.end(), c.p3);
        assert_eq!(seg.bounding_box(), c.bounding_box());
        assert_eq!(seg.arclen(), c.arclen());

        let seg = PathSeg::from(l);
        assert_eq!(seg.eval(0.25), l.eval(0.25));
        assert_eq!(seg.bounding_box(), Rect::new(2.0, -3.0, 5.0, 1.0));
        assert_eq!(seg.arclen(), 5.0);
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let seg = PathSeg::from(CubicBez::new((0.0, 0.0), (4.0, 1.0), (-3.0, 2.0), (1.0, 3.0)));
        let rev = seg.reversed();
        assert_eq!(rev.start(), seg.end());
        assert_eq!(rev.end(), seg.start());
        assert_eq!(rev.reversed(), seg);
    }

    #[test]
    fn to_cubic_preserves_shape() {
        let segs = [
            PathSeg::from(Line::new((5.0, 1.0), (2.0, -3.0))),
            PathSeg::from(QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0))),
        ];
        for seg in segs {
            let c = seg.to_cubic();
            for i in 0..=10 {
                let t = i as f64 / 10.0;
                assert!((c.eval(t) - seg.eval(t)).hypot() < 1e-12);
            }
        }
    }

    #[test]
    fn sequence_bounds_and_length() {
        let empty: [PathSeg; 0] = [];
        assert_eq!(segments_bounding_box(empty), None);
        assert_eq!(segments_arclen(empty), 0.0);

        let segs = [
            PathSeg::from(Line::new((0.0, 0.0), (2.0, 0.0))),
            PathSeg::from(QuadBez::new((2.0, 0.0), (3.0, 2.0), (4.0, 0.0))),
            PathSeg::from(Line::new((4.0, 0.0), (4.0, -3.0))),
        ];
        assert_eq!(
            segments_bounding_box(segs),
            Some(Rect::new(0.0, -3.0, 4.0, 1.0))
        );
        let len = segments_arclen(segs);
        let expected = 2.0 + segs[1].arclen() + 3.0;
        assert!((len - expected).abs() < 1e-12);
        assert!(segs.iter().all(PathSeg::is_finite));
    }
}
