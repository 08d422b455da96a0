// Copyright 2026 the Bezseg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Geometry of quadratic and cubic Bézier path segments.
//!
//! The bezseg library computes the properties a vector-path model needs from
//! its curved segments: the point at a curve parameter, the tight
//! axis-aligned bounding box, and an approximate arc length. The small value
//! types it works with ([`Point`], [`Vec2`], [`Rect`], [`Line`]) are included
//! so the crate can be used on its own.
//!
//! # Examples
//!
//! Bounding box of a quadratic arch:
//! ```
//! use bezseg::{ParamCurve, ParamCurveExtrema, Point, QuadBez, Rect};
//!
//! let q = QuadBez::new((0.0, 0.0), (1.0, 2.0), (2.0, 0.0));
//! assert_eq!(q.eval(0.5), Point::new(1.0, 1.0));
//! assert_eq!(q.bounding_box(), Rect::new(0.0, 0.0, 2.0, 1.0));
//! ```
//!
//! Mixed segment kinds stored side by side:
//! ```
//! use bezseg::{segments_arclen, CubicBez, Line, PathSeg, Point};
//!
//! let segs = [
//!     PathSeg::from(Line::new((0.0, 0.0), (3.0, 4.0))),
//!     PathSeg::try_from(&[Point::new(3.0, 4.0), Point::new(3.0, 4.0)][..]).unwrap(),
//!     PathSeg::from(CubicBez::new((3.0, 4.0), (3.0, 4.0), (3.0, 4.0), (3.0, 4.0))),
//! ];
//! assert!((segments_arclen(segs) - 5.0).abs() < 1e-12);
//! ```
//!
//! # Features
//!
//! The following crate [feature flags](https://doc.rust-lang.org/cargo/reference/features.html#dependency-features) are available:
//!
//! - `std` (enabled by default): Get floating point functions from the standard library
//!   (likely using your target's libc).
//! - `libm`: Use floating point implementations from [libm][].
//!   This is useful for `no_std` environments.
//! - `mint`: Enable `From`/`Into` conversion of bezseg and [mint][] types.
//! - `serde`: Implement `serde::Deserialize` and `serde::Serialize` on the value types.
//! - `schemars`: Add support for using bezseg types in JSON schemas using [schemars][].
//!
//! At least one of `std` and `libm` is required; `std` overrides `libm`.
//!
//! [libm]: https://docs.rs/libm
//! [mint]: https://docs.rs/mint
//! [schemars]: https://docs.rs/schemars

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]
#![allow(clippy::many_single_char_names, clippy::excessive_precision)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::use_self,
    clippy::return_self_not_must_use,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::missing_assert_message
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("bezseg requires either the `std` or `libm` feature");

// Suppress the unused_crate_dependencies lint when both std and libm are specified.
#[cfg(all(feature = "std", feature = "libm"))]
use libm as _;

// Only exercised by the benchmarks.
#[cfg(test)]
use criterion as _;

mod axis;
pub mod common;
mod cubicbez;
mod line;
mod param_curve;
mod pathseg;
mod point;
mod quadbez;
mod rect;
mod vec2;

pub use crate::axis::Axis;
pub use crate::cubicbez::CubicBez;
pub use crate::line::Line;
pub use crate::param_curve::{
    ParamCurve, ParamCurveArclen, ParamCurveExtrema, CUBIC_ARCLEN_STEP, MAX_EXTREMA,
    QUAD_ARCLEN_STEP,
};
pub use crate::pathseg::{segments_arclen, segments_bounding_box, PathSeg, SegmentError};
pub use crate::point::Point;
pub use crate::quadbez::QuadBez;
pub use crate::rect::Rect;
pub use crate::vec2::Vec2;
