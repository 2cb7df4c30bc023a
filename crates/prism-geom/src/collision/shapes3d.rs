// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use prism_math::Vec3;

use crate::BoundingBox;

/// Returns `true` if two spheres touch or overlap.
pub fn check_collision_spheres(center1: &Vec3, radius1: f32, center2: &Vec3, radius2: f32) -> bool {
    let reach = radius1 + radius2;
    center1.distance_squared(center2) <= reach * reach
}

/// Returns `true` if two boxes overlap, touching faces included.
pub fn check_collision_boxes(a: &BoundingBox, b: &BoundingBox) -> bool {
    a.overlaps(b)
}

/// Returns `true` if a box and a sphere touch or overlap.
///
/// Clamps the centre into the box and compares the squared distance to the
/// squared radius.
pub fn check_collision_box_sphere(bounds: &BoundingBox, center: &Vec3, radius: f32) -> bool {
    center.distance_squared(&bounds.closest_point(center)) <= radius * radius
}
