// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use prism_math::Vec3;

/// Half-line `origin + t * direction` for `t >= 0`.
///
/// The direction is stored as given. Ray casts report the parameter `t`, so
/// their distances are in units of `direction`'s length.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ray {
    /// Start point.
    pub origin: Vec3,
    /// Direction; not required to be unit length.
    pub direction: Vec3,
}

impl Ray {
    /// Creates a ray.
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Point at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin.add(&self.direction.scale(t))
    }
}

/// Result of a ray cast that reports where it hit.
///
/// When `hit` is `false` the remaining fields carry no meaning; casts return
/// [`RayHitInfo::MISS`], which zeroes them.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RayHitInfo {
    /// Whether the ray hit.
    pub hit: bool,
    /// Ray parameter `t` of the hit.
    pub distance: f32,
    /// World-space hit point, `origin + distance * direction`.
    pub position: Vec3,
    /// Unit surface normal at the hit point.
    pub normal: Vec3,
}

impl RayHitInfo {
    /// The no-hit result.
    pub const MISS: Self = Self {
        hit: false,
        distance: 0.0,
        position: Vec3::ZERO,
        normal: Vec3::ZERO,
    };

    pub(crate) fn at(ray: &Ray, distance: f32, normal: Vec3) -> Self {
        Self {
            hit: true,
            distance,
            position: ray.at(distance),
            normal,
        }
    }

    /// Returns `true` when the cast hit.
    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

impl Default for RayHitInfo {
    fn default() -> Self {
        Self::MISS
    }
}
