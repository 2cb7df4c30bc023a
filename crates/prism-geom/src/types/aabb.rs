// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use prism_math::{Mat4, Vec3};

use crate::GeomError;

/// Axis-aligned bounding box in world coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components for a
///   well-formed box. [`BoundingBox::try_new`] and [`BoundingBox::from_points`]
///   enforce this; [`BoundingBox::new`] does not.
/// - Degenerate boxes (`min == max` on any axis) are valid and have zero
///   volume.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    min: Vec3,
    max: Vec3,
}

impl BoundingBox {
    /// Constructs a box from its corners without validating them.
    pub const fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Constructs a box, rejecting corners with `min > max` on any axis.
    pub fn try_new(min: Vec3, max: Vec3) -> Result<Self, GeomError> {
        let lo = min.to_array();
        let hi = max.to_array();
        match (0..3).find(|&axis| lo[axis] > hi[axis]) {
            Some(axis) => Err(GeomError::InvertedBounds { axis }),
            None => Ok(Self { min, max }),
        }
    }

    /// Returns the minimum corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Returns the maximum corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Builds a box centred at `center` with half-extents `hx, hy, hz`.
    ///
    /// Negative half-extents are taken by absolute value.
    pub fn from_center_half_extents(center: Vec3, hx: f32, hy: f32, hz: f32) -> Self {
        let he = Vec3::new(hx.abs(), hy.abs(), hz.abs());
        Self::new(center.sub(&he), center.add(&he))
    }

    /// Builds the minimal box containing all `points`.
    pub fn from_points(points: &[Vec3]) -> Result<Self, GeomError> {
        let (first, rest) = points.split_first().ok_or(GeomError::EmptyPointSet)?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(p), max.max(p)));
        Ok(Self { min, max })
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> Vec3 {
        self.min.add(&self.max).scale(0.5)
    }

    /// Half the size along each axis.
    pub fn half_extents(&self) -> Vec3 {
        self.max.sub(&self.min).scale(0.5)
    }

    /// Returns `true` if `point` lies inside or on the surface.
    pub fn contains_point(&self, point: &Vec3) -> bool {
        let p = point.to_array();
        let lo = self.min.to_array();
        let hi = self.max.to_array();
        (0..3).all(|i| p[i] >= lo[i] && p[i] <= hi[i])
    }

    /// Point of the box nearest to `point` (the point itself when inside).
    pub fn closest_point(&self, point: &Vec3) -> Vec3 {
        point.clamp(&self.min, &self.max)
    }

    /// Returns `true` if this box overlaps another (inclusive on faces).
    pub fn overlaps(&self, other: &Self) -> bool {
        let a_min = self.min.to_array();
        let a_max = self.max.to_array();
        let b_min = other.min.to_array();
        let b_max = other.max.to_array();
        // Touching faces count as overlap.
        (0..3).all(|i| a_max[i] >= b_min[i] && a_min[i] <= b_max[i])
    }

    /// Returns the union of two boxes.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.min(&other.min),
            max: self.max.max(&other.max),
        }
    }

    /// Grows the box by a uniform margin `m` in all directions.
    pub fn inflate(&self, m: f32) -> Self {
        let delta = Vec3::new(m, m, m);
        Self {
            min: self.min.sub(&delta),
            max: self.max.add(&delta),
        }
    }

    /// Box bounding this one after transformation by `mat`.
    ///
    /// Evaluates the eight corners under the affine transform and bounds the
    /// results.
    pub fn transformed(&self, mat: &Mat4) -> Self {
        let [minx, miny, minz] = self.min.to_array();
        let [maxx, maxy, maxz] = self.max.to_array();
        let corners = [
            Vec3::new(minx, miny, minz),
            Vec3::new(minx, miny, maxz),
            Vec3::new(minx, maxy, minz),
            Vec3::new(minx, maxy, maxz),
            Vec3::new(maxx, miny, minz),
            Vec3::new(maxx, miny, maxz),
            Vec3::new(maxx, maxy, minz),
            Vec3::new(maxx, maxy, maxz),
        ];
        let first = mat.transform_point(&corners[0]);
        let (min, max) = corners[1..].iter().fold((first, first), |(min, max), c| {
            let p = mat.transform_point(c);
            (min.min(&p), max.max(&p))
        });
        Self { min, max }
    }
}
