//! Placement records produced by the packing driver.

use crate::transform::Transform2D;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A committed placement: which input polygon, and the rigid motion that
/// positions it on its sheet.
///
/// The translation is in sheet-local coordinates; the rotation is in degrees
/// and is applied about the origin before the translation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Placement {
    /// Index of the polygon in the input list.
    pub polygon_id: usize,
    /// Translation applied after rotation.
    pub translation: (f64, f64),
    /// Rotation in degrees, applied about the origin.
    pub rotation_degrees: f64,
}

impl Placement {
    /// Creates a new placement record.
    pub fn new(polygon_id: usize, translation: (f64, f64), rotation_degrees: f64) -> Self {
        Self {
            polygon_id,
            translation,
            rotation_degrees,
        }
    }

    /// The placement as a rigid transform (rotation converted to radians).
    pub fn to_transform(&self) -> Transform2D {
        Transform2D::new(
            self.translation.0,
            self.translation.1,
            self.rotation_degrees.to_radians(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transform_conversion() {
        let p = Placement::new(3, (10.0, 20.0), 90.0);
        let t = p.to_transform();
        assert_eq!(t.tx, 10.0);
        assert_eq!(t.ty, 20.0);
        assert!((t.angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }
}
