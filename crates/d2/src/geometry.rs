//! Polygon and sheet types.

use geo::{Area, ConvexHull, Coord, LineString, Polygon as GeoPolygon};
use quicknest_core::robust::{self, ScalingConfig};
use quicknest_core::transform::{Transform2D, AABB2D};
use quicknest_core::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A closed chain of vertices. The closing edge back to the first vertex is
/// implicit.
pub type Contour = Vec<(f64, f64)>;

/// A simple polygon with optional holes.
///
/// Construction normalizes winding: the exterior is counter-clockwise, every
/// hole is clockwise. Holes are assumed to lie inside the exterior and to be
/// pairwise disjoint; this is not validated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    exterior: Contour,
    holes: Vec<Contour>,
}

impl Polygon {
    /// Creates a polygon from its outer boundary, reorienting it
    /// counter-clockwise if necessary. Reorientation keeps the first vertex
    /// first, since that vertex is the polygon's reference point.
    pub fn new(mut exterior: Contour) -> Self {
        if exterior.len() >= 3 && !robust::is_ccw(&exterior) {
            exterior.reverse();
            exterior.rotate_right(1);
        }
        Self {
            exterior,
            holes: Vec::new(),
        }
    }

    /// Adds a hole, reorienting it clockwise if necessary.
    pub fn with_hole(mut self, mut hole: Contour) -> Self {
        if hole.len() >= 3 && robust::is_ccw(&hole) {
            hole.reverse();
            hole.rotate_right(1);
        }
        self.holes.push(hole);
        self
    }

    /// Creates an axis-aligned rectangle anchored at the origin.
    pub fn rectangle(width: f64, height: f64) -> Self {
        Self::new(vec![
            (0.0, 0.0),
            (width, 0.0),
            (width, height),
            (0.0, height),
        ])
    }

    /// Creates an L-shape: a `width` by `height` rectangle with the top-right
    /// part removed beyond the notch dimensions.
    pub fn l_shape(width: f64, height: f64, notch_width: f64, notch_height: f64) -> Self {
        Self::new(vec![
            (0.0, 0.0),
            (width, 0.0),
            (width, notch_height),
            (notch_width, notch_height),
            (notch_width, height),
            (0.0, height),
        ])
    }

    /// The outer boundary, counter-clockwise.
    pub fn exterior(&self) -> &[(f64, f64)] {
        &self.exterior
    }

    /// The holes, each clockwise.
    pub fn holes(&self) -> &[Contour] {
        &self.holes
    }

    /// The first vertex of the outer boundary, the polygon's reference point.
    pub fn first_vertex(&self) -> (f64, f64) {
        self.exterior[0]
    }

    /// Checks that the outer boundary and every hole have at least three
    /// vertices.
    pub fn validate(&self) -> Result<()> {
        if self.exterior.len() < 3 {
            return Err(Error::InvalidGeometry(format!(
                "outer boundary has {} vertices, need at least 3",
                self.exterior.len()
            )));
        }
        for (i, hole) in self.holes.iter().enumerate() {
            if hole.len() < 3 {
                return Err(Error::InvalidGeometry(format!(
                    "hole {} has {} vertices, need at least 3",
                    i,
                    hole.len()
                )));
            }
        }
        Ok(())
    }

    /// Bounding box of the outer boundary.
    pub fn bbox(&self) -> AABB2D {
        AABB2D::from_points(&self.exterior)
    }

    /// The polygon translated by an offset.
    pub fn translated(&self, dx: f64, dy: f64) -> Self {
        self.map_contours(|&(x, y)| (x + dx, y + dy))
    }

    /// The polygon rotated about the origin.
    pub fn rotated(&self, angle: f64) -> Self {
        if angle == 0.0 {
            return self.clone();
        }
        self.transformed(&Transform2D::rotation(angle))
    }

    /// The polygon under an arbitrary rigid motion.
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        Self {
            exterior: transform.transform_points(&self.exterior),
            holes: self
                .holes
                .iter()
                .map(|h| transform.transform_points(h))
                .collect(),
        }
    }

    /// Applies a placement returned by the packing driver to this polygon.
    ///
    /// Placements position a polygon by its first outer-boundary vertex: the
    /// polygon is rotated about that vertex and the vertex lands on the
    /// placement's translation.
    pub fn place(&self, placement: &quicknest_core::Placement) -> Self {
        let (fx, fy) = self.first_vertex();
        self.translated(-fx, -fy)
            .transformed(&placement.to_transform())
    }

    /// The polygon reflected through the origin.
    ///
    /// Point reflection preserves winding, so no reorientation is needed.
    pub fn reflected(&self) -> Self {
        self.map_contours(|&(x, y)| (-x, -y))
    }

    /// The polygon with every coordinate snapped to the given grid.
    pub fn snapped(&self, grid: &ScalingConfig) -> Self {
        Self {
            exterior: grid.snap_contour(&self.exterior),
            holes: self.holes.iter().map(|h| grid.snap_contour(h)).collect(),
        }
    }

    /// Area of the polygon, holes subtracted.
    pub fn area(&self) -> f64 {
        self.to_geo_polygon().unsigned_area()
    }

    /// Convex hull of the outer boundary, counter-clockwise.
    pub fn convex_hull(&self) -> Contour {
        let hull = self.to_geo_polygon().convex_hull();
        let mut points: Contour = hull.exterior().points().map(|p| (p.x(), p.y())).collect();
        // geo closes the ring; drop the duplicate vertex.
        if points.len() > 1 && points.first() == points.last() {
            points.pop();
        }
        if !robust::is_ccw(&points) {
            points.reverse();
        }
        points
    }

    /// Returns true if the polygon has no holes and a convex boundary.
    pub fn is_convex(&self) -> bool {
        self.holes.is_empty() && robust::is_convex(&self.exterior)
    }

    fn map_contours(&self, f: impl Fn(&(f64, f64)) -> (f64, f64) + Copy) -> Self {
        Self {
            exterior: self.exterior.iter().map(f).collect(),
            holes: self
                .holes
                .iter()
                .map(|h| h.iter().map(f).collect())
                .collect(),
        }
    }

    fn to_geo_polygon(&self) -> GeoPolygon<f64> {
        let ring = |c: &Contour| {
            LineString::from(c.iter().map(|&(x, y)| Coord { x, y }).collect::<Vec<_>>())
        };
        GeoPolygon::new(ring(&self.exterior), self.holes.iter().map(ring).collect())
    }
}

/// An axis-aligned rectangular sheet anchored at the origin, with forbidden
/// regions already consumed by previous work.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Sheet {
    /// Sheet width.
    pub width: f64,
    /// Sheet height.
    pub height: f64,
    holes: Vec<Polygon>,
}

impl Sheet {
    /// Creates an empty sheet of the given dimensions.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            holes: Vec::new(),
        }
    }

    /// Replaces the sheet's forbidden regions.
    pub fn set_holes(&mut self, holes: Vec<Polygon>) {
        self.holes = holes;
    }

    /// The forbidden regions.
    pub fn holes(&self) -> &[Polygon] {
        &self.holes
    }

    /// The sheet rectangle as a bounding box.
    pub fn bbox(&self) -> AABB2D {
        AABB2D::new(0.0, 0.0, self.width, self.height)
    }

    /// Checks that the sheet has positive, finite dimensions.
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0)
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(Error::InvalidSheet(format!(
                "dimensions must be positive and finite, got {} x {}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}
