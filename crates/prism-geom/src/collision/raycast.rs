// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Ray casts.
//!
//! All casts accept a non-unit direction and report the ray parameter `t`
//! as the hit distance. Only hits with `t >= 0` count; a ray starting inside
//! a closed shape hits the surface on its way out.
//!
//! Parallelism tolerances are relative to the direction length, so scaling
//! a direction never changes whether it hits. A zero or non-finite
//! direction never hits.

use prism_math::{Vec3, EPSILON};
use tracing::trace;

use crate::{BoundingBox, Ray, RayHitInfo};

/// Length of the ray direction, or `None` when it is zero or non-finite.
fn direction_scale(ray: &Ray) -> Option<f32> {
    let len = ray.direction.length();
    (len > 0.0 && len.is_finite()).then_some(len)
}

/// Nearest non-negative root of `|origin + t * dir - center|² = radius²`.
fn ray_sphere_t(ray: &Ray, center: &Vec3, radius: f32) -> Option<f32> {
    let a = ray.direction.length_squared();
    if a <= 0.0 || !a.is_finite() {
        return None;
    }
    let oc = ray.origin.sub(center);
    let half_b = oc.dot(&ray.direction);
    let c = oc.length_squared() - radius * radius;
    let discriminant = half_b * half_b - a * c;
    if discriminant < 0.0 {
        return None;
    }
    let root = discriminant.sqrt();
    let far = (-half_b + root) / a;
    if far < 0.0 {
        return None;
    }
    let near = (-half_b - root) / a;
    let t = if near >= 0.0 { near } else { far };
    t.is_finite().then_some(t)
}

/// Returns `true` if the ray hits the sphere at some `t >= 0`.
pub fn check_collision_ray_sphere(ray: &Ray, center: &Vec3, radius: f32) -> bool {
    ray_sphere_t(ray, center, radius).is_some()
}

/// Nearest point where the ray meets the sphere, if any.
///
/// # Examples
/// ```
/// use prism_geom::{check_collision_ray_sphere_ex, Ray};
/// use prism_math::Vec3;
/// let ray = Ray::new(Vec3::new(0.0, 0.0, -5.0), Vec3::UNIT_Z);
/// let hit = check_collision_ray_sphere_ex(&ray, &Vec3::ZERO, 1.0);
/// assert_eq!(hit, Some(Vec3::new(0.0, 0.0, -1.0)));
/// ```
pub fn check_collision_ray_sphere_ex(ray: &Ray, center: &Vec3, radius: f32) -> Option<Vec3> {
    ray_sphere_t(ray, center, radius).map(|t| ray.at(t))
}

/// Ray cast against a sphere; the normal points away from the centre.
pub fn get_ray_collision_sphere(ray: &Ray, center: &Vec3, radius: f32) -> RayHitInfo {
    match ray_sphere_t(ray, center, radius) {
        Some(t) => RayHitInfo::at(ray, t, ray.at(t).sub(center).normalize()),
        None => RayHitInfo::MISS,
    }
}

/// Entry/exit parameters of a ray against a box, with the axis that bounded
/// each end.
struct SlabSpan {
    t_enter: f32,
    enter_axis: usize,
    t_exit: f32,
    exit_axis: usize,
}

fn slab_span(ray: &Ray, bounds: &BoundingBox) -> Option<SlabSpan> {
    let parallel = EPSILON * direction_scale(ray)?;
    let origin = ray.origin.to_array();
    let dir = ray.direction.to_array();
    let lo = bounds.min().to_array();
    let hi = bounds.max().to_array();

    let mut span = SlabSpan {
        t_enter: f32::NEG_INFINITY,
        enter_axis: 0,
        t_exit: f32::INFINITY,
        exit_axis: 0,
    };
    for axis in 0..3 {
        if dir[axis].abs() <= parallel {
            // Parallel to this slab: either always inside it or never.
            if origin[axis] < lo[axis] || origin[axis] > hi[axis] {
                return None;
            }
            continue;
        }
        let inv = 1.0 / dir[axis];
        let t1 = (lo[axis] - origin[axis]) * inv;
        let t2 = (hi[axis] - origin[axis]) * inv;
        let (near, far) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
        if near > span.t_enter {
            span.t_enter = near;
            span.enter_axis = axis;
        }
        if far < span.t_exit {
            span.t_exit = far;
            span.exit_axis = axis;
        }
        if span.t_enter > span.t_exit || span.t_exit < 0.0 {
            return None;
        }
    }
    (span.t_enter.is_finite() && span.t_exit.is_finite()).then_some(span)
}

/// Returns `true` if the ray hits the box at some `t >= 0` (slab method).
pub fn check_collision_ray_box(ray: &Ray, bounds: &BoundingBox) -> bool {
    slab_span(ray, bounds).is_some()
}

/// Ray cast against a box.
///
/// Reports the entry face with its outward normal. When the origin is inside
/// the box, reports the exit face instead, again with its outward normal.
pub fn get_ray_collision_box(ray: &Ray, bounds: &BoundingBox) -> RayHitInfo {
    let Some(span) = slab_span(ray, bounds) else {
        return RayHitInfo::MISS;
    };
    let dir = ray.direction.to_array();
    let (t, axis, outward_sign) = if span.t_enter >= 0.0 {
        (span.t_enter, span.enter_axis, -dir[span.enter_axis].signum())
    } else {
        (span.t_exit, span.exit_axis, dir[span.exit_axis].signum())
    };
    let mut normal = [0.0; 3];
    normal[axis] = outward_sign;
    RayHitInfo::at(ray, t, Vec3::from(normal))
}

/// Ray cast against triangle `(a, b, c)` using Möller–Trumbore.
///
/// Misses when the ray is parallel to the triangle's plane (the determinant
/// is within `EPSILON` of zero relative to `|dir|·|b - a|·|c - a|`), when the
/// barycentric coordinates leave the triangle, or when the hit lies behind
/// the origin. The reported normal is unit length and follows the winding,
/// `normalize((b - a) × (c - a))`, whichever side the ray came from.
///
/// # Examples
/// ```
/// use prism_geom::{collision_ray_triangle, Ray};
/// use prism_math::Vec3;
/// let (a, b, c) = (Vec3::new(-1.0, -1.0, 0.0), Vec3::new(1.0, -1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
/// let ray = Ray::new(Vec3::new(0.0, 0.0, 3.0), Vec3::new(0.0, 0.0, -1.0));
/// let hit = collision_ray_triangle(&ray, &a, &b, &c);
/// assert!(hit.is_hit());
/// assert_eq!(hit.distance, 3.0);
/// assert_eq!(hit.normal, Vec3::UNIT_Z);
/// ```
pub fn collision_ray_triangle(ray: &Ray, a: &Vec3, b: &Vec3, c: &Vec3) -> RayHitInfo {
    let edge1 = b.sub(a);
    let edge2 = c.sub(a);
    let p = ray.direction.cross(&edge2);
    let det = edge1.dot(&p);
    let scale = ray.direction.length() * edge1.length() * edge2.length();
    if det.abs() <= EPSILON * scale || !det.is_finite() {
        trace!(det, "ray parallel to triangle plane");
        return RayHitInfo::MISS;
    }
    let inv_det = 1.0 / det;

    let tvec = ray.origin.sub(a);
    let u = tvec.dot(&p) * inv_det;
    if !(0.0..=1.0).contains(&u) {
        return RayHitInfo::MISS;
    }
    let q = tvec.cross(&edge1);
    let v = ray.direction.dot(&q) * inv_det;
    if v < 0.0 || u + v > 1.0 {
        return RayHitInfo::MISS;
    }
    let t = edge2.dot(&q) * inv_det;
    if t < 0.0 || !t.is_finite() {
        return RayHitInfo::MISS;
    }
    // A non-zero determinant implies a non-zero face normal, however small.
    let face = edge1.cross(&edge2);
    RayHitInfo::at(ray, t, face.scale(face.length().recip()))
}

/// Ray cast against the planar quad `a, b, c, d` (in order around its edge).
///
/// Tested as triangles `(a, b, d)` then `(b, c, d)`.
pub fn collision_ray_quad(ray: &Ray, a: &Vec3, b: &Vec3, c: &Vec3, d: &Vec3) -> RayHitInfo {
    let first = collision_ray_triangle(ray, a, b, d);
    if first.hit {
        return first;
    }
    collision_ray_triangle(ray, b, c, d)
}

/// Ray cast against the horizontal plane `y = height`.
///
/// Misses when the ray runs parallel to the plane (`|dir.y|` within
/// `EPSILON` of zero relative to the direction length) or points away from
/// it.
/// The normal is always `+Y`.
pub fn collision_ray_ground(ray: &Ray, height: f32) -> RayHitInfo {
    let Some(scale) = direction_scale(ray) else {
        return RayHitInfo::MISS;
    };
    let dy = ray.direction.y();
    if dy.abs() <= EPSILON * scale {
        return RayHitInfo::MISS;
    }
    let t = (height - ray.origin.y()) / dy;
    if t < 0.0 || !t.is_finite() {
        return RayHitInfo::MISS;
    }
    RayHitInfo::at(ray, t, Vec3::UNIT_Y)
}
