//! Pairwise collision predicates.
//!
//! All bounds are inclusive: shapes that only touch are reported as
//! overlapping. Circle tests compare squared distances, so no square root is
//! taken and no epsilon is applied.
//!
//! The predicates do not validate their input. Boxes are expected to have
//! `min <= max` and radii are expected to be non-negative.

use crate::{AxisAlignedBox, Vector2};

/// Returns `true` if the two boxes overlap or touch on both axes.
pub fn boxes_overlap(a: AxisAlignedBox, b: AxisAlignedBox) -> bool {
    a.min.x <= b.max.x && a.max.x >= b.min.x && a.min.y <= b.max.y && a.max.y >= b.min.y
}

/// Returns `true` if `point` lies inside the box or on its boundary.
pub fn point_in_box(point: Vector2, aabb: AxisAlignedBox) -> bool {
    point.x >= aabb.min.x && point.x <= aabb.max.x && point.y >= aabb.min.y && point.y <= aabb.max.y
}

/// Returns `true` if two circles overlap or touch.
///
/// # Arguments
///
/// * `center_a`, `radius_a`: The first circle.
/// * `center_b`, `radius_b`: The second circle.
pub fn circles_overlap(center_a: Vector2, radius_a: f32, center_b: Vector2, radius_b: f32) -> bool {
    let radius_sum = radius_a + radius_b;
    center_a.distance_squared(center_b) <= radius_sum * radius_sum
}

/// Returns `true` if a circle overlaps or touches a box.
///
/// The circle center is clamped onto the box to find the closest point, which
/// is then tested against the radius. A center inside the box clamps to itself
/// and always overlaps.
pub fn circle_overlaps_box(center: Vector2, radius: f32, aabb: AxisAlignedBox) -> bool {
    let closest = aabb.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}
