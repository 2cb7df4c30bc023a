// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use prism_math::Vec2;

/// Rectangle given by its origin corner and a signed size.
///
/// `width`/`height` may be zero or negative; geometric queries go through
/// [`Rect::min_corner`]/[`Rect::max_corner`], which normalise the extents.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    /// Origin X.
    pub x: f32,
    /// Origin Y.
    pub y: f32,
    /// Extent along X; may be negative.
    pub width: f32,
    /// Extent along Y; may be negative.
    pub height: f32,
}

impl Rect {
    /// The zero rect, also returned by [`crate::get_collision_rec`] when two
    /// rects do not overlap.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a rect from its origin and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds the rect spanning two corners, in any order.
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(&b);
        let max = a.max(&b);
        Self::new(min.x(), min.y(), max.x() - min.x(), max.y() - min.y())
    }

    /// Origin as a vector.
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Size as a vector (signed).
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Smallest corner after normalising negative extents.
    pub fn min_corner(&self) -> Vec2 {
        Vec2::new(
            self.x.min(self.x + self.width),
            self.y.min(self.y + self.height),
        )
    }

    /// Largest corner after normalising negative extents.
    pub fn max_corner(&self) -> Vec2 {
        Vec2::new(
            self.x.max(self.x + self.width),
            self.y.max(self.y + self.height),
        )
    }

    /// Centre point.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Unsigned area.
    pub fn area(&self) -> f32 {
        (self.width * self.height).abs()
    }
}
