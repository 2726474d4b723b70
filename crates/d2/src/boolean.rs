//! Boolean set operations on polygons.
//!
//! Thin wrapper around `i_overlay`, which runs the overlay itself in exact
//! integer arithmetic. Outer contours are counter-clockwise and holes
//! clockwise on both sides, so `FillRule::NonZero` reproduces the intended
//! regions.

use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;

use crate::geometry::{Contour, Polygon};

/// One polygon as `i_overlay` contours: outer boundary first, then holes.
fn overlay_shape(polygon: &Polygon) -> Vec<Vec<[f64; 2]>> {
    let mut shape = Vec::with_capacity(1 + polygon.holes().len());
    shape.push(overlay_contour(polygon.exterior()));
    for hole in polygon.holes() {
        shape.push(overlay_contour(hole));
    }
    shape
}

fn overlay_contour(contour: &[(f64, f64)]) -> Vec<[f64; 2]> {
    contour.iter().map(|&(x, y)| [x, y]).collect()
}

/// Reassembles overlay output into polygons. Within each output shape the
/// first contour is the outer boundary and the rest are holes.
fn polygons_from_shapes(shapes: &[Vec<Vec<[f64; 2]>>]) -> Vec<Polygon> {
    let mut out = Vec::new();
    for shape in shapes {
        let mut contours = shape.iter().filter(|c| c.len() >= 3);
        let Some(outer) = contours.next() else {
            continue;
        };
        let mut polygon = Polygon::new(contour_from_overlay(outer));
        for hole in contours {
            polygon = polygon.with_hole(contour_from_overlay(hole));
        }
        out.push(polygon);
    }
    out
}

fn contour_from_overlay(contour: &[[f64; 2]]) -> Contour {
    contour.iter().map(|&[x, y]| (x, y)).collect()
}

/// Union of a set of polygons.
///
/// Polygons are merged one at a time so that each operand's own fill is
/// evaluated independently; feeding all contours into a single non-zero fill
/// would let one polygon's outer boundary cancel another polygon's hole.
pub fn union(polygons: &[Polygon]) -> Vec<Polygon> {
    if polygons.is_empty() {
        return Vec::new();
    }

    let mut shapes = vec![overlay_shape(&polygons[0])];
    let mut subject = shapes[0].clone();
    for polygon in &polygons[1..] {
        shapes = subject.overlay(&overlay_shape(polygon), OverlayRule::Union, FillRule::NonZero);
        subject = shapes
            .iter()
            .flatten()
            .filter(|c| c.len() >= 3)
            .cloned()
            .collect();
    }

    polygons_from_shapes(&shapes)
}

/// Set difference `subject \ union(clip)`.
pub fn difference(subject: &Polygon, clip: &[Polygon]) -> Vec<Polygon> {
    if clip.is_empty() {
        return vec![subject.clone()];
    }

    // Merge the clip polygons first. The union output is a set of disjoint
    // regions with mutually consistent winding, which is safe to evaluate
    // under a single non-zero fill.
    let merged = union(clip);
    let clip_contours: Vec<Vec<[f64; 2]>> = merged.iter().flat_map(|p| overlay_shape(p)).collect();

    let shapes = overlay_shape(subject).overlay(
        &clip_contours,
        OverlayRule::Difference,
        FillRule::NonZero,
    );
    polygons_from_shapes(&shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn total_area(polygons: &[Polygon]) -> f64 {
        polygons.iter().map(|p| p.area()).sum()
    }

    #[test]
    fn union_of_disjoint_squares() {
        let a = Polygon::rectangle(10.0, 10.0);
        let b = Polygon::rectangle(10.0, 10.0).translated(20.0, 0.0);

        let merged = union(&[a, b]);
        assert_eq!(merged.len(), 2);
        assert_relative_eq!(total_area(&merged), 200.0, epsilon = 1e-6);
    }

    #[test]
    fn union_of_overlapping_squares() {
        let a = Polygon::rectangle(10.0, 10.0);
        let b = Polygon::rectangle(10.0, 10.0).translated(5.0, 0.0);

        let merged = union(&[a, b]);
        assert_eq!(merged.len(), 1);
        assert_relative_eq!(total_area(&merged), 150.0, epsilon = 1e-6);
    }

    #[test]
    fn union_covers_hole_of_other_operand() {
        let ring = Polygon::rectangle(30.0, 30.0)
            .with_hole(vec![(10.0, 10.0), (20.0, 10.0), (20.0, 20.0), (10.0, 20.0)]);
        let plug = Polygon::rectangle(10.0, 10.0).translated(10.0, 10.0);

        let merged = union(&[ring, plug]);
        assert_relative_eq!(total_area(&merged), 900.0, epsilon = 1e-6);
    }

    #[test]
    fn difference_carves_hole() {
        let outer = Polygon::rectangle(30.0, 30.0);
        let inner = Polygon::rectangle(10.0, 10.0).translated(10.0, 10.0);

        let result = difference(&outer, &[inner]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].holes().len(), 1);
        assert_relative_eq!(total_area(&result), 800.0, epsilon = 1e-6);
    }

    #[test]
    fn difference_with_full_cover_is_empty() {
        let small = Polygon::rectangle(10.0, 10.0);
        let big = Polygon::rectangle(30.0, 30.0).translated(-10.0, -10.0);

        assert!(difference(&small, &[big]).is_empty());
    }

    #[test]
    fn difference_with_empty_clip_returns_subject() {
        let subject = Polygon::rectangle(10.0, 10.0);
        let result = difference(&subject, &[]);
        assert_eq!(result, vec![subject]);
    }
}
