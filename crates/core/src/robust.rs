//! Robust geometric predicates.
//!
//! Boolean set operations on no-fit polygons are only as reliable as the
//! orientation decisions feeding them. This module wraps Shewchuk's adaptive
//! precision predicates (via the `robust` crate) behind a floating-point
//! filter: the fast cross-product path answers the overwhelming majority of
//! queries, and the exact path is consulted only when the determinant is too
//! close to zero to trust.
//!
//! It also provides [`ScalingConfig`], the fixed decimal grid that input
//! coordinates are snapped to so that identical geometry is represented by
//! identical bit patterns everywhere downstream.

use robust::{orient2d as orient2d_exact, Coord};

/// Result of an orientation test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Left turn.
    CounterClockwise,
    /// Right turn.
    Clockwise,
    /// All three points on one line.
    Collinear,
}

impl Orientation {
    /// Returns true if the orientation is counter-clockwise.
    #[inline]
    pub fn is_ccw(self) -> bool {
        matches!(self, Orientation::CounterClockwise)
    }

    /// Returns true if the points are collinear.
    #[inline]
    pub fn is_collinear(self) -> bool {
        matches!(self, Orientation::Collinear)
    }
}

/// Determines the orientation of three points using exact arithmetic.
///
/// Returns [`Orientation::CounterClockwise`] if `pc` lies to the left of the
/// directed line from `pa` to `pb`.
#[inline]
pub fn orient2d(pa: (f64, f64), pb: (f64, f64), pc: (f64, f64)) -> Orientation {
    let det = orient2d_exact(
        Coord { x: pa.0, y: pa.1 },
        Coord { x: pb.0, y: pb.1 },
        Coord { x: pc.0, y: pc.1 },
    );

    if det > 0.0 {
        Orientation::CounterClockwise
    } else if det < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Relative error bound below which the fast path result cannot be trusted.
const FILTER_EPSILON: f64 = 1e-12;

/// Orientation test with a fast approximate path and exact fallback.
#[inline]
pub fn orient2d_filtered(pa: (f64, f64), pb: (f64, f64), pc: (f64, f64)) -> Orientation {
    let acx = pa.0 - pc.0;
    let bcx = pb.0 - pc.0;
    let acy = pa.1 - pc.1;
    let bcy = pb.1 - pc.1;

    let det = acx * bcy - acy * bcx;
    let det_sum = (acx * bcy).abs() + (acy * bcx).abs();

    if det.abs() > FILTER_EPSILON * det_sum {
        return if det > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        };
    }

    orient2d(pa, pb, pc)
}

/// Checks if a point lies strictly inside the triangle `abc`.
pub fn point_in_triangle(p: (f64, f64), a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> bool {
    let o1 = orient2d_filtered(a, b, p);
    let o2 = orient2d_filtered(b, c, p);
    let o3 = orient2d_filtered(c, a, p);

    (o1 == Orientation::CounterClockwise
        && o2 == Orientation::CounterClockwise
        && o3 == Orientation::CounterClockwise)
        || (o1 == Orientation::Clockwise
            && o2 == Orientation::Clockwise
            && o3 == Orientation::Clockwise)
}

/// Checks if a contour is convex.
///
/// Collinear runs of vertices are permitted; the test only fails when two
/// turns with opposite signs are found.
pub fn is_convex(contour: &[(f64, f64)]) -> bool {
    let n = contour.len();
    if n < 3 {
        return false;
    }

    let mut expected: Option<Orientation> = None;
    for i in 0..n {
        let o = orient2d_filtered(contour[i], contour[(i + 1) % n], contour[(i + 2) % n]);
        if o.is_collinear() {
            continue;
        }
        match expected {
            None => expected = Some(o),
            Some(e) if e != o => return false,
            _ => {}
        }
    }
    true
}

/// Checks if a contour is wound counter-clockwise.
///
/// Decided at the lowest-leftmost vertex, which is guaranteed convex, so a
/// single orientation test suffices.
pub fn is_ccw(contour: &[(f64, f64)]) -> bool {
    if contour.len() < 3 {
        return false;
    }

    let mut min_idx = 0;
    for (i, &(x, y)) in contour.iter().enumerate() {
        let (mx, my) = contour[min_idx];
        if y < my || (y == my && x < mx) {
            min_idx = i;
        }
    }

    let n = contour.len();
    let prev = contour[(min_idx + n - 1) % n];
    let curr = contour[min_idx];
    let next = contour[(min_idx + 1) % n];

    orient2d(prev, curr, next).is_ccw()
}

/// Signed area of a contour via the shoelace formula.
///
/// Positive for counter-clockwise winding. Kahan summation keeps the result
/// stable for contours with many vertices.
pub fn signed_area(contour: &[(f64, f64)]) -> f64 {
    let n = contour.len();
    if n < 3 {
        return 0.0;
    }

    let mut sum = 0.0;
    let mut c = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        let term = contour[i].0 * contour[j].1 - contour[j].0 * contour[i].1;

        let y = term - c;
        let t = sum + y;
        c = (t - sum) - y;
        sum = t;
    }

    sum / 2.0
}

/// Fixed decimal grid used to snap input coordinates.
#[derive(Debug, Clone, Copy)]
pub struct ScalingConfig {
    scale: f64,
    inv_scale: f64,
}

impl ScalingConfig {
    /// Creates a grid preserving the given number of decimal places.
    pub fn new(precision: u32) -> Self {
        let scale = 10.0_f64.powi(precision as i32);
        Self {
            scale,
            inv_scale: 1.0 / scale,
        }
    }

    /// Snaps a single coordinate to the grid.
    #[inline]
    pub fn snap_coord(&self, x: f64) -> f64 {
        (x * self.scale).round() * self.inv_scale
    }

    /// Snaps a point to the grid.
    #[inline]
    pub fn snap_point(&self, p: (f64, f64)) -> (f64, f64) {
        (self.snap_coord(p.0), self.snap_coord(p.1))
    }

    /// Snaps an entire contour to the grid.
    pub fn snap_contour(&self, contour: &[(f64, f64)]) -> Vec<(f64, f64)> {
        contour.iter().map(|&p| self.snap_point(p)).collect()
    }
}

impl Default for ScalingConfig {
    /// The default grid preserves 6 decimal places.
    fn default() -> Self {
        Self::new(6)
    }
}
