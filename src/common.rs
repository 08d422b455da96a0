// Copyright 2026 the Bezseg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scalar Bernstein polynomials and their critical points.
//!
//! These operate on one coordinate at a time; the segment types call them
//! once per axis. The fixed-step polyline length sum lives here too.

#![allow(missing_docs)]

use arrayvec::ArrayVec;

use crate::{Line, ParamCurve};

/// Defines a trait that chooses between libstd or libm implementations of float methods.
macro_rules! define_float_funcs {
    ($(
        fn $name:ident(self $(,$arg:ident: $arg_ty:ty)*) -> $ret:ty
        => $lname:ident;
    )+) => {
        #[cfg(not(feature = "std"))]
        pub(crate) trait FloatFuncs : Sized {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret;)+
        }

        #[cfg(not(feature = "std"))]
        impl FloatFuncs for f64 {
            $(fn $name(self $(,$arg: $arg_ty)*) -> $ret {
                #[cfg(feature = "libm")]
                return libm::$lname(self $(,$arg as _)*);

                #[cfg(not(feature = "libm"))]
                compile_error!("bezseg requires either the `std` or `libm` feature")
            })+
        }
    }
}

define_float_funcs! {
    fn sqrt(self) -> Self => sqrt;
}

/// Evaluate the quadratic Bernstein polynomial with coefficients `a`, `b`, `c` at `t`.
///
/// `a` and `c` are the endpoint coordinates, `b` the control coordinate.
#[inline]
pub fn quad_bernstein(a: f64, b: f64, c: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    mt * mt * a + 2.0 * mt * t * b + t * t * c
}

/// Evaluate the cubic Bernstein polynomial with coefficients `a`, `b`, `c`, `d` at `t`.
#[inline]
pub fn cubic_bernstein(a: f64, b: f64, c: f64, d: f64, t: f64) -> f64 {
    let mt = 1.0 - t;
    a * (mt * mt * mt) + 3.0 * b * t * (mt * mt) + 3.0 * c * mt * t * t + d * t * t * t
}

/// The parameter in `[0, 1]` where the quadratic polynomial has zero derivative.
///
/// The candidate is `(b - a) / (2b - a - c)`. When the denominator is zero
/// the quotient is infinite or NaN and fails the range test, so collinear
/// evenly spaced coefficients report no extremum.
#[inline]
pub fn quad_extremum(a: f64, b: f64, c: f64) -> Option<f64> {
    let t = (b - a) / (2.0 * b - a - c);
    accept_root(t)
}

/// The parameters in `[0, 1]` where the cubic polynomial has zero derivative.
///
/// The derivative `a' t² + b' t + c'` is solved with the quadratic formula.
/// A negative discriminant contributes nothing. A vanishing leading
/// coefficient produces infinite or NaN roots, which are rejected by the
/// range test like any other out-of-range root.
pub fn cubic_extrema(a: f64, b: f64, c: f64, d: f64) -> ArrayVec<f64, 2> {
    let mut result = ArrayVec::new();
    let qa = 3.0 * d - 9.0 * c + 9.0 * b - 3.0 * a;
    let qb = 6.0 * a - 12.0 * b + 6.0 * c;
    let qc = 3.0 * (b - a);
    let disc = qb * qb - 4.0 * qa * qc;
    if disc < 0.0 {
        return result;
    }
    let sqrt_disc = disc.sqrt();
    let roots = [(-qb + sqrt_disc) / (2.0 * qa), (-qb - sqrt_disc) / (2.0 * qa)];
    for t in roots {
        if let Some(t) = accept_root(t) {
            result.push(t);
        }
    }
    result
}

#[inline]
fn accept_root(t: f64) -> Option<f64> {
    if (0.0..=1.0).contains(&t) {
        Some(t)
    } else {
        if !t.is_finite() {
            log::trace!("discarding degenerate extremum candidate t={t}");
        }
        None
    }
}

/// Sum the chord lengths of the polyline through `curve.eval(t)` for
/// `t = 0, step, 2·step, …` while `t < 1`.
///
/// `t` is advanced by repeated addition, so the parameter of the final chord
/// end is whatever the accumulated sum reaches; no extra chord is added to
/// land exactly on `t = 1`. A `step` that is not positive yields `0.0`.
pub(crate) fn polyline_arclen(curve: &impl ParamCurve, step: f64) -> f64 {
    if step.is_nan() || step <= 0.0 {
        log::trace!("no polyline for arclen step {step}");
        return 0.0;
    }
    let mut length = 0.0;
    let mut t = 0.0;
    while t < 1.0 {
        length += Line::new(curve.eval(t), curve.eval(t + step)).length();
        t += step;
    }
    length
}

/// Fold `values` into the closed interval spanned by `lo` and `hi`.
#[inline]
pub(crate) fn min_max(lo: f64, hi: f64, values: impl IntoIterator<Item = f64>) -> (f64, f64) {
    let mut min = lo.min(hi);
    let mut max = lo.max(hi);
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    (min, max)
}
