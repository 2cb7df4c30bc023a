// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Ray casts returning booleans, points, or [`crate::RayHitInfo`].
pub mod raycast;
/// 2D predicates over rects, circles, triangles, polygons, and segments.
pub mod shapes2d;
/// 3D predicates over spheres and axis-aligned boxes.
pub mod shapes3d;
