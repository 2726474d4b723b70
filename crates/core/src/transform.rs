//! Rigid 2D transforms and axis-aligned bounding boxes.

use nalgebra::{Isometry2, Point2, Vector2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rigid motion in the plane: rotation about the origin, then translation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Transform2D {
    /// Translation in x direction.
    pub tx: f64,
    /// Translation in y direction.
    pub ty: f64,
    /// Rotation angle in radians.
    pub angle: f64,
}

impl Transform2D {
    /// Creates the identity transform.
    pub fn identity() -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            angle: 0.0,
        }
    }

    /// Creates a pure translation.
    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            angle: 0.0,
        }
    }

    /// Creates a pure rotation about the origin.
    pub fn rotation(angle: f64) -> Self {
        Self {
            tx: 0.0,
            ty: 0.0,
            angle,
        }
    }

    /// Creates a transform that rotates about the origin, then translates.
    pub fn new(tx: f64, ty: f64, angle: f64) -> Self {
        Self { tx, ty, angle }
    }

    /// Converts to a nalgebra isometry.
    pub fn to_isometry(&self) -> Isometry2<f64> {
        Isometry2::new(Vector2::new(self.tx, self.ty), self.angle)
    }

    /// Applies the transform to a single point.
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let p = self.to_isometry().transform_point(&Point2::new(x, y));
        (p.x, p.y)
    }

    /// Applies the transform to a sequence of points.
    pub fn transform_points(&self, points: &[(f64, f64)]) -> Vec<(f64, f64)> {
        let iso = self.to_isometry();
        points
            .iter()
            .map(|&(x, y)| {
                let p = iso.transform_point(&Point2::new(x, y));
                (p.x, p.y)
            })
            .collect()
    }

    /// Returns the inverse motion.
    pub fn inverse(&self) -> Self {
        let iso = self.to_isometry().inverse();
        Self {
            tx: iso.translation.x,
            ty: iso.translation.y,
            angle: iso.rotation.angle(),
        }
    }
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AABB2D {
    /// Minimum x coordinate.
    pub min_x: f64,
    /// Minimum y coordinate.
    pub min_y: f64,
    /// Maximum x coordinate.
    pub max_x: f64,
    /// Maximum y coordinate.
    pub max_y: f64,
}

impl AABB2D {
    /// Creates a box from min/max coordinates.
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// The box containing nothing. Union with it is the identity.
    pub fn empty() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
        }
    }

    /// Returns true if this box contains no points.
    pub fn is_empty(&self) -> bool {
        self.min_x > self.max_x || self.min_y > self.max_y
    }

    /// Bounding box of a set of points.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let mut bbox = Self::empty();
        for &(x, y) in points {
            bbox.min_x = bbox.min_x.min(x);
            bbox.min_y = bbox.min_y.min(y);
            bbox.max_x = bbox.max_x.max(x);
            bbox.max_y = bbox.max_y.max(y);
        }
        bbox
    }

    /// Width of the box.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Height of the box.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Area of the box; zero when empty.
    pub fn area(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.width() * self.height()
        }
    }

    /// Smallest box containing both operands.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// The box shifted by the given offset.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        Self {
            min_x: self.min_x + dx,
            min_y: self.min_y + dy,
            max_x: self.max_x + dx,
            max_y: self.max_y + dy,
        }
    }

    /// Checks if the box contains a point (boundary included).
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    #[test]
    fn translation_only() {
        let t = Transform2D::translation(10.0, 20.0);
        let (x, y) = t.transform_point(1.0, 2.0);
        assert_relative_eq!(x, 11.0, epsilon = 1e-12);
        assert_relative_eq!(y, 22.0, epsilon = 1e-12);
    }

    #[test]
    fn rotation_only() {
        let t = Transform2D::rotation(PI / 2.0);
        let (x, y) = t.transform_point(1.0, 0.0);
        assert_relative_eq!(x, 0.0, epsilon = 1e-12);
        assert_relative_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn rotates_before_translating() {
        let t = Transform2D::new(5.0, 0.0, PI / 2.0);
        let (x, y) = t.transform_point(1.0, 0.0);
        assert_relative_eq!(x, 5.0, epsilon = 1e-12);
        assert_relative_eq!(y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_round_trip() {
        let t = Transform2D::new(10.0, 20.0, PI / 4.0);
        let inv = t.inverse();
        let (x, y) = t.transform_point(3.0, 7.0);
        let (x, y) = inv.transform_point(x, y);
        assert_relative_eq!(x, 3.0, epsilon = 1e-10);
        assert_relative_eq!(y, 7.0, epsilon = 1e-10);
    }

    #[test]
    fn bbox_from_points() {
        let points = vec![(0.0, 0.0), (10.0, 5.0), (3.0, 8.0)];
        let bbox = AABB2D::from_points(&points);
        assert_relative_eq!(bbox.min_x, 0.0);
        assert_relative_eq!(bbox.max_x, 10.0);
        assert_relative_eq!(bbox.max_y, 8.0);
        assert_relative_eq!(bbox.area(), 80.0);
    }

    #[test]
    fn empty_bbox_union_is_identity() {
        let empty = AABB2D::empty();
        assert!(empty.is_empty());
        assert_eq!(empty.area(), 0.0);

        let b = AABB2D::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(empty.union(&b), b);
    }
}
