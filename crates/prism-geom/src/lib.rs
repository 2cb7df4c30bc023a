// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![deny(
    warnings,
    clippy::all,
    clippy::pedantic,
    rust_2018_idioms,
    missing_docs,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic
)]
#![doc = r"Geometry and collision queries for Prism.

This crate provides:
- Primitive shapes (`Rect`, `BoundingBox`, `Ray`) and the `RayHitInfo` result.
- 2D overlap predicates over rects, circles, triangles, polygons, and lines.
- 3D overlap predicates over spheres and axis-aligned boxes.
- Ray casts against spheres, boxes, triangles, quads, and the ground plane.

Design notes:
- Every query is a pure function of its inputs; nothing is cached.
- Misses are data (`false`, `None`, `RayHitInfo::MISS`), never errors.
- Box overlap is inclusive on faces; rect overlap is strict.
- Ray distances are the ray parameter `t`, i.e. world units only for a unit
  direction.
"]

/// 2D and 3D overlap predicates and ray casts.
pub mod collision;
mod error;
/// Foundational geometric types.
pub mod types;

pub use collision::raycast::{
    check_collision_ray_box, check_collision_ray_sphere, check_collision_ray_sphere_ex,
    collision_ray_ground, collision_ray_quad, collision_ray_triangle, get_ray_collision_box,
    get_ray_collision_sphere,
};
pub use collision::shapes2d::{
    check_collision_circle_rec, check_collision_circles, check_collision_lines,
    check_collision_point_circle, check_collision_point_line, check_collision_point_poly,
    check_collision_point_rec, check_collision_point_triangle, check_collision_recs,
    get_collision_rec, rec_match,
};
pub use collision::shapes3d::{
    check_collision_box_sphere, check_collision_boxes, check_collision_spheres,
};
pub use error::GeomError;
pub use types::aabb::BoundingBox;
pub use types::ray::{Ray, RayHitInfo};
pub use types::rect::Rect;
