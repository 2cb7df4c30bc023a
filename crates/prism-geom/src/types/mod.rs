// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shape and query-result types consumed by the collision routines.
//!
//! - `Rect` is screen-space style: origin corner plus signed size.
//! - `BoundingBox` keeps `min <= max` per axis for boxes built through the
//!   checked constructors; `BoundingBox::new` trusts the caller.
//! - `Ray` does not normalise its direction.

#[doc = "Axis-aligned bounding boxes (world space)."]
pub mod aabb;
#[doc = "Rays and ray-cast results."]
pub mod ray;
#[doc = "2D rectangles."]
pub mod rect;
