//! Candidate placement point generation.
//!
//! The feasible region for a part's reference point is the inner-fit polygon
//! of the sheet minus the union of the no-fit polygons of everything already
//! on it. Any sensible placement metric is piecewise linear over that region,
//! so its minimum is attained at a vertex; enumerating the vertices of the
//! feasible region gives a finite, complete candidate set.

use crate::boolean;
use crate::geometry::{Contour, Polygon};

/// Collects the inner-fit boundary and the no-fit polygons for one part at
/// one rotation, and produces the candidate placement points.
#[derive(Debug, Clone)]
pub struct CandidatePoints {
    boundary: Option<Contour>,
    nfps: Vec<Polygon>,
}

impl CandidatePoints {
    /// Creates a candidate set from the inner-fit polygon of the sheet.
    ///
    /// `None` means the part does not fit the sheet at this rotation; such a
    /// set never yields any points.
    pub fn new(boundary: Option<Contour>) -> Self {
        Self {
            boundary,
            nfps: Vec::new(),
        }
    }

    /// Adds the no-fit polygon of one already-placed shape.
    pub fn add_nfp(&mut self, nfp: Polygon) {
        self.nfps.push(nfp);
    }

    /// Enumerates the vertices of the feasible region.
    pub fn get_points(&self) -> Vec<(f64, f64)> {
        let Some(boundary) = &self.boundary else {
            return Vec::new();
        };

        // Nothing to avoid: the feasible region is the boundary itself. This
        // also keeps degenerate (zero-area) inner-fit rectangles usable on an
        // empty sheet, where a boolean pass would dissolve them.
        if self.nfps.is_empty() {
            return boundary.clone();
        }

        let feasible = boolean::difference(&Polygon::new(boundary.clone()), &self.nfps);

        let mut points = Vec::new();
        for component in &feasible {
            points.extend_from_slice(component.exterior());
            for hole in component.holes() {
                points.extend_from_slice(hole);
            }
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(size: f64) -> Contour {
        vec![(0.0, 0.0), (size, 0.0), (size, size), (0.0, size)]
    }

    #[test]
    fn no_boundary_means_no_fit() {
        let mut candidates = CandidatePoints::new(None);
        candidates.add_nfp(Polygon::rectangle(10.0, 10.0));
        assert!(candidates.get_points().is_empty());
    }

    #[test]
    fn empty_sheet_yields_boundary_corners() {
        let candidates = CandidatePoints::new(Some(square(200.0)));
        let points = candidates.get_points();
        assert_eq!(points.len(), 4);
        assert!(points.contains(&(0.0, 0.0)));
        assert!(points.contains(&(200.0, 200.0)));
    }

    #[test]
    fn nfp_carves_the_feasible_region() {
        // Boundary [0,200]^2 minus an NFP covering [-100,100]^2 leaves an
        // L-shaped region whose inner corner is a new candidate.
        let mut candidates = CandidatePoints::new(Some(square(200.0)));
        candidates.add_nfp(Polygon::rectangle(200.0, 200.0).translated(-100.0, -100.0));

        let points = candidates.get_points();
        assert!(points.contains(&(100.0, 0.0)));
        assert!(points.contains(&(0.0, 100.0)));
        assert!(points.contains(&(100.0, 100.0)));
        assert!(points.contains(&(200.0, 200.0)));
        // The covered corner is gone.
        assert!(!points.contains(&(0.0, 0.0)));
    }

    #[test]
    fn fully_covered_boundary_has_no_candidates() {
        let mut candidates = CandidatePoints::new(Some(square(10.0)));
        candidates.add_nfp(Polygon::rectangle(100.0, 100.0).translated(-20.0, -20.0));
        assert!(candidates.get_points().is_empty());
    }

    #[test]
    fn nfp_island_inside_boundary_contributes_hole_vertices() {
        let mut candidates = CandidatePoints::new(Some(square(100.0)));
        candidates.add_nfp(Polygon::rectangle(20.0, 20.0).translated(40.0, 40.0));

        let points = candidates.get_points();
        // Outer corners survive and the island's corners appear as hole
        // vertices of the feasible region.
        assert!(points.contains(&(0.0, 0.0)));
        assert!(points.contains(&(40.0, 40.0)));
        assert!(points.contains(&(60.0, 60.0)));
        assert_eq!(points.len(), 8);
    }
}
