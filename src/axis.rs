// Copyright 2026 the Bezseg Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// An axis in the plane.
///
/// Bounding boxes are computed one axis at a time; this selects which
/// coordinate of each control point takes part.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum Axis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl Axis {
    /// Both axes, x first.
    pub const ALL: [Axis; 2] = [Axis::Horizontal, Axis::Vertical];
}
