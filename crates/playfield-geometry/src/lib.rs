#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![doc = "A `no_std` library of 2D geometry primitives and collision queries."]
#![doc = ""]
#![doc = "This crate provides vectors, axis-aligned boxes, circles and integer grid"]
#![doc = "coordinates, plus inclusive overlap tests between boxes, points and circles."]

use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};
use libm::sqrtf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod collision;
pub mod error;
pub use collision::{boxes_overlap, circle_overlaps_box, circles_overlap, point_in_box};
pub use error::GeometryError;

/// A 2‑D vector of single-precision components.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2 {
    /// Horizontal component.
    pub x: f32,
    /// Vertical component.
    pub y: f32,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Construct a new vector.
    pub const fn new(x: f32, y: f32) -> Self {
        Vector2 { x, y }
    }

    /// Dot product of `self` and `other`.
    pub fn dot(self, other: Vector2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// Squared Euclidean length. Prefer this over [`Vector2::length`] for comparisons.
    pub fn length_squared(self) -> f32 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        sqrtf(self.length_squared())
    }

    /// Squared distance between two points.
    pub fn distance_squared(self, other: Vector2) -> f32 {
        (self - other).length_squared()
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vector2 {
    type Output = Vector2;

    fn mul(self, scalar: f32) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// An axis-aligned box spanning `min` to `max`.
///
/// The box is expected to satisfy `min.x <= max.x` and `min.y <= max.y`.
/// [`AxisAlignedBox::new`] does not check or normalize the corners; use
/// [`AxisAlignedBox::try_new`] when the input is not already trusted.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AxisAlignedBox {
    /// Lower-left corner.
    pub min: Vector2,
    /// Upper-right corner.
    pub max: Vector2,
}

impl AxisAlignedBox {
    /// Construct a box from its corners without validation.
    ///
    /// # Arguments
    ///
    /// * `min`: The corner with the smallest coordinates.
    /// * `max`: The corner with the largest coordinates.
    pub const fn new(min: Vector2, max: Vector2) -> Self {
        AxisAlignedBox { min, max }
    }

    /// Construct a box from its corners, rejecting malformed input.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::InvalidBounds)` if any coordinate is NaN or
    /// if `min` exceeds `max` on either axis.
    pub fn try_new(min: Vector2, max: Vector2) -> Result<Self, GeometryError> {
        if min.x.is_nan() || min.y.is_nan() || max.x.is_nan() || max.y.is_nan() {
            return Err(GeometryError::InvalidBounds("corners must not be NaN"));
        }
        if min.x > max.x || min.y > max.y {
            return Err(GeometryError::InvalidBounds("min must not exceed max"));
        }
        Ok(AxisAlignedBox { min, max })
    }

    /// Construct a box centered on `center` extending `half_extents` along each axis.
    ///
    /// Negative half extents produce an inverted box.
    pub fn from_center_half_extents(center: Vector2, half_extents: Vector2) -> Self {
        AxisAlignedBox::new(center - half_extents, center + half_extents)
    }

    /// Extent along x.
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Extent along y.
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Midpoint of the two corners.
    pub fn center(&self) -> Vector2 {
        Vector2::new((self.min.x + self.max.x) * 0.5, (self.min.y + self.max.y) * 0.5)
    }

    /// Returns `true` if `min <= max` on both axes.
    pub fn is_well_formed(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// The point of the box closest to `point`, found by clamping each coordinate.
    ///
    /// Points inside the box map to themselves.
    pub fn closest_point(&self, point: Vector2) -> Vector2 {
        // `f32::clamp` panics when min > max; a malformed box must not panic here.
        Vector2::new(
            point.x.max(self.min.x).min(self.max.x),
            point.y.max(self.min.y).min(self.max.y),
        )
    }
}

impl fmt::Display for AxisAlignedBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} .. {}]", self.min, self.max)
    }
}

/// A circle described by its center and radius.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    /// Center point.
    pub center: Vector2,
    /// Radius, expected to be non-negative.
    pub radius: f32,
}

impl Circle {
    /// Construct a circle without validation.
    pub const fn new(center: Vector2, radius: f32) -> Self {
        Circle { center, radius }
    }

    /// Construct a circle, rejecting negative or NaN radii.
    ///
    /// # Errors
    ///
    /// Returns `Err(GeometryError::InvalidRadius)` if `radius` is negative or NaN.
    pub fn try_new(center: Vector2, radius: f32) -> Result<Self, GeometryError> {
        if radius.is_nan() {
            return Err(GeometryError::InvalidRadius("must not be NaN"));
        }
        if radius < 0.0 {
            return Err(GeometryError::InvalidRadius("must be non-negative"));
        }
        Ok(Circle { center, radius })
    }

    /// See [`circles_overlap`].
    pub fn overlaps_circle(&self, other: &Circle) -> bool {
        circles_overlap(self.center, self.radius, other.center, other.radius)
    }

    /// See [`circle_overlaps_box`].
    pub fn overlaps_box(&self, aabb: &AxisAlignedBox) -> bool {
        circle_overlaps_box(self.center, self.radius, *aabb)
    }

    /// Returns `true` if `point` lies inside or on the circle.
    pub fn contains_point(&self, point: Vector2) -> bool {
        circles_overlap(self.center, self.radius, point, 0.0)
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Circle (c: {}, r: {:.2})", self.center, self.radius)
    }
}

/// Integer cell coordinate on a grid; `x` is the column and `y` the row.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoordinate {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridCoordinate {
    /// Creates a new `GridCoordinate`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The coordinate shifted by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Sum of the absolute coordinate differences, saturating at `u32::MAX`.
    pub fn manhattan_distance(self, other: GridCoordinate) -> u32 {
        self.x.abs_diff(other.x).saturating_add(self.y.abs_diff(other.y))
    }

    /// The four 4-directional neighbours, in the order `+x, -x, +y, -y`.
    ///
    /// No bounds are applied; callers discard the ones outside their grid.
    pub const fn neighbors(self) -> [GridCoordinate; 4] {
        [
            self.offset(1, 0),
            self.offset(-1, 0),
            self.offset(0, 1),
            self.offset(0, -1),
        ]
    }
}

impl From<(i32, i32)> for GridCoordinate {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPSILON: f32 = 1e-6;

    #[test]
    fn test_vector_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(3.0, -4.0);
        assert_eq!(a + b, Vector2::new(4.0, -2.0));
        assert_eq!(a - b, Vector2::new(-2.0, 6.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        // 1*3 + 2*(-4) = -5
        assert!((a.dot(b) - (-5.0)).abs() < EPSILON);
    }

    #[test]
    fn test_vector_lengths() {
        let v = Vector2::new(3.0, 4.0);
        assert!((v.length_squared() - 25.0).abs() < EPSILON);
        assert!((v.length() - 5.0).abs() < EPSILON);
        assert!((Vector2::ZERO.distance_squared(v) - 25.0).abs() < EPSILON);
    }

    #[test]
    fn test_box_accessors() {
        let b = AxisAlignedBox::new(Vector2::new(-1.0, 2.0), Vector2::new(3.0, 8.0));
        assert!((b.width() - 4.0).abs() < EPSILON);
        assert!((b.height() - 6.0).abs() < EPSILON);
        assert_eq!(b.center(), Vector2::new(1.0, 5.0));
        assert!(b.is_well_formed());
    }

    #[test]
    fn test_box_from_center_half_extents() {
        let b = AxisAlignedBox::from_center_half_extents(Vector2::new(2.0, 2.0), Vector2::new(1.0, 0.5));
        assert_eq!(b.min, Vector2::new(1.0, 1.5));
        assert_eq!(b.max, Vector2::new(3.0, 2.5));
    }

    #[test]
    fn test_box_try_new_rejects_inverted_corners() {
        let inverted = AxisAlignedBox::try_new(Vector2::new(2.0, 0.0), Vector2::new(1.0, 1.0));
        assert!(matches!(inverted, Err(GeometryError::InvalidBounds("min must not exceed max"))));

        let nan = AxisAlignedBox::try_new(Vector2::new(f32::NAN, 0.0), Vector2::new(1.0, 1.0));
        assert!(matches!(nan, Err(GeometryError::InvalidBounds("corners must not be NaN"))));

        // A zero-area box is valid.
        let point_box = AxisAlignedBox::try_new(Vector2::new(1.0, 1.0), Vector2::new(1.0, 1.0));
        assert!(point_box.is_ok());
    }

    #[test]
    fn test_closest_point() {
        let b = AxisAlignedBox::new(Vector2::new(0.0, 0.0), Vector2::new(2.0, 2.0));
        assert_eq!(b.closest_point(Vector2::new(1.0, 1.0)), Vector2::new(1.0, 1.0));
        assert_eq!(b.closest_point(Vector2::new(5.0, -3.0)), Vector2::new(2.0, 0.0));
        assert_eq!(b.closest_point(Vector2::new(-1.0, 1.5)), Vector2::new(0.0, 1.5));
    }

    #[test]
    fn test_closest_point_on_inverted_box_does_not_panic() {
        let inverted = AxisAlignedBox::new(Vector2::new(2.0, 2.0), Vector2::new(0.0, 0.0));
        let _ = inverted.closest_point(Vector2::new(1.0, 1.0));
        assert!(!inverted.is_well_formed());
    }

    #[test]
    fn test_circle_try_new() {
        assert!(Circle::try_new(Vector2::ZERO, 0.0).is_ok());
        assert!(matches!(
            Circle::try_new(Vector2::ZERO, -1.0),
            Err(GeometryError::InvalidRadius("must be non-negative"))
        ));
        assert!(matches!(
            Circle::try_new(Vector2::ZERO, f32::NAN),
            Err(GeometryError::InvalidRadius("must not be NaN"))
        ));
    }

    #[test]
    fn test_circle_methods() {
        let c = Circle::new(Vector2::new(0.0, 0.0), 1.0);
        let touching = Circle::new(Vector2::new(2.0, 0.0), 1.0);
        let b = AxisAlignedBox::new(Vector2::new(1.0, -1.0), Vector2::new(2.0, 1.0));
        assert!(c.overlaps_circle(&touching));
        assert!(c.overlaps_box(&b));
        assert!(c.contains_point(Vector2::new(0.0, 1.0)));
        assert!(!c.contains_point(Vector2::new(1.0, 1.0)));
    }

    #[test]
    fn test_grid_coordinate_neighbors_order() {
        let p = GridCoordinate::new(3, 5);
        assert_eq!(
            p.neighbors(),
            [
                GridCoordinate::new(4, 5),
                GridCoordinate::new(2, 5),
                GridCoordinate::new(3, 6),
                GridCoordinate::new(3, 4),
            ]
        );
    }

    #[test]
    fn test_grid_coordinate_manhattan() {
        let a = GridCoordinate::new(-2, 3);
        let b = GridCoordinate::new(4, -1);
        assert_eq!(a.manhattan_distance(b), 10);
        assert_eq!(b.manhattan_distance(a), 10);
        assert_eq!(a.manhattan_distance(a), 0);
        assert_eq!(GridCoordinate::from((4, -1)), b);
    }

    #[test]
    fn test_grid_coordinate_manhattan_saturates() {
        let near = GridCoordinate::new(0, 0);
        let far = GridCoordinate::new(i32::MIN, i32::MIN);
        assert_eq!(near.manhattan_distance(far), u32::MAX);
        let corner = GridCoordinate::new(i32::MAX, i32::MAX);
        assert_eq!(corner.manhattan_distance(far), u32::MAX);
        assert_eq!(GridCoordinate::new(i32::MIN, 0).manhattan_distance(near), 1 << 31);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", GridCoordinate::new(1, -2)), "(1, -2)");
        assert_eq!(format!("{}", Vector2::new(1.0, 0.5)), "(1.00, 0.50)");
        let b = AxisAlignedBox::new(Vector2::ZERO, Vector2::new(1.0, 1.0));
        assert_eq!(format!("{}", b), "[(0.00, 0.00) .. (1.00, 1.00)]");
    }
}
