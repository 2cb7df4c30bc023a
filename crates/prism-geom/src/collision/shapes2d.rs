// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use prism_math::{Vec2, EPSILON};
use tracing::trace;

use crate::Rect;

/// Exact field-wise equality of two rects.
pub fn rec_match(a: &Rect, b: &Rect) -> bool {
    a == b
}

/// Returns `true` if the interiors of two rects overlap.
///
/// Overlap is strict: rects that only share an edge do not collide.
/// Negative sizes are normalised first.
pub fn check_collision_recs(a: &Rect, b: &Rect) -> bool {
    let (a_min, a_max) = (a.min_corner(), a.max_corner());
    let (b_min, b_max) = (b.min_corner(), b.max_corner());
    a_min.x() < b_max.x() && a_max.x() > b_min.x() && a_min.y() < b_max.y() && a_max.y() > b_min.y()
}

/// Returns `true` if two circles touch or overlap.
pub fn check_collision_circles(center1: &Vec2, radius1: f32, center2: &Vec2, radius2: f32) -> bool {
    let reach = radius1 + radius2;
    center1.distance_squared(center2) <= reach * reach
}

/// Returns `true` if a circle touches or overlaps a rect.
///
/// Tests the distance from the centre to the closest point of the rect.
pub fn check_collision_circle_rec(center: &Vec2, radius: f32, rec: &Rect) -> bool {
    let closest = center.clamp(&rec.min_corner(), &rec.max_corner());
    center.distance_squared(&closest) <= radius * radius
}

/// Returns `true` if `point` lies in `rec`.
///
/// Half-open: the min edges are inside, the max edges are not, so a point on
/// the shared edge of two adjacent tiles belongs to exactly one of them.
pub fn check_collision_point_rec(point: &Vec2, rec: &Rect) -> bool {
    let (min, max) = (rec.min_corner(), rec.max_corner());
    point.x() >= min.x() && point.x() < max.x() && point.y() >= min.y() && point.y() < max.y()
}

/// Returns `true` if `point` lies inside or on a circle.
pub fn check_collision_point_circle(point: &Vec2, center: &Vec2, radius: f32) -> bool {
    point.distance_squared(center) <= radius * radius
}

/// Returns `true` if `point` lies inside or on triangle `(a, b, c)`.
///
/// Either winding is accepted: the point must sit on the same side of all
/// three edges. A zero-area triangle contains nothing.
pub fn check_collision_point_triangle(point: &Vec2, a: &Vec2, b: &Vec2, c: &Vec2) -> bool {
    let area = b.sub(a).cross(&c.sub(a));
    if area.abs() <= EPSILON {
        trace!(area, "degenerate triangle in point test");
        return false;
    }
    let d1 = b.sub(a).cross(&point.sub(a));
    let d2 = c.sub(b).cross(&point.sub(b));
    let d3 = a.sub(c).cross(&point.sub(c));
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}

/// Returns `true` if `point` is inside the polygon described by `points`.
///
/// Uses the even-odd crossing rule, so self-intersecting outlines alternate
/// between inside and outside. Fewer than three vertices contain nothing.
pub fn check_collision_point_poly(point: &Vec2, points: &[Vec2]) -> bool {
    if points.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut prev = points[points.len() - 1];
    for current in points {
        let straddles = (current.y() > point.y()) != (prev.y() > point.y());
        if straddles {
            let cross_x = (prev.x() - current.x()) * (point.y() - current.y())
                / (prev.y() - current.y())
                + current.x();
            if point.x() < cross_x {
                inside = !inside;
            }
        }
        prev = *current;
    }
    inside
}

/// Intersection point of segments `start1..end1` and `start2..end2`.
///
/// Returns `None` for disjoint segments and for parallel or collinear ones.
pub fn check_collision_lines(start1: &Vec2, end1: &Vec2, start2: &Vec2, end2: &Vec2) -> Option<Vec2> {
    let d1 = end1.sub(start1);
    let d2 = end2.sub(start2);
    let denom = d1.cross(&d2);
    if denom.abs() <= EPSILON {
        return None;
    }
    let offset = start2.sub(start1);
    let t1 = offset.cross(&d2) / denom;
    let t2 = offset.cross(&d1) / denom;
    if (0.0..=1.0).contains(&t1) && (0.0..=1.0).contains(&t2) {
        Some(start1.add(&d1.scale(t1)))
    } else {
        None
    }
}

/// Returns `true` if `point` is within `threshold` of segment `p1..p2`.
///
/// A zero-length segment degrades to a point-distance test against `p1`.
pub fn check_collision_point_line(point: &Vec2, p1: &Vec2, p2: &Vec2, threshold: f32) -> bool {
    let seg = p2.sub(p1);
    let len_sq = seg.length_squared();
    let closest = if len_sq <= EPSILON * EPSILON {
        *p1
    } else {
        let t = (point.sub(p1).dot(&seg) / len_sq).clamp(0.0, 1.0);
        p1.add(&seg.scale(t))
    };
    point.distance_squared(&closest) <= threshold * threshold
}

/// Overlap of two rects, or [`Rect::ZERO`] when they do not overlap.
///
/// The result always has non-negative size.
pub fn get_collision_rec(a: &Rect, b: &Rect) -> Rect {
    if !check_collision_recs(a, b) {
        return Rect::ZERO;
    }
    let min = a.min_corner().max(&b.min_corner());
    let max = a.max_corner().min(&b.max_corner());
    Rect::from_corners(min, max)
}
