//! No-fit polygon and inner-fit polygon computation.
//!
//! The no-fit polygon NFP(A, B) is the locus of B's reference point (the
//! first vertex of its outer boundary, shifted to the origin) at which B
//! touches but does not overlap the fixed polygon A. It is computed as the
//! Minkowski sum `A ⊕ (−B)` with B reflected through the origin; B overlaps
//! A exactly when its reference point lies strictly inside the NFP.
//!
//! The inner-fit polygon is the dual construction for containment. Sheets
//! are axis-aligned rectangles, so only the rectangular special case is
//! needed and it reduces to bounding-box arithmetic.

use quicknest_core::AABB2D;

use crate::geometry::{Contour, Polygon};
use crate::minkowski;
use crate::state::{CanonicalId, NfpCacheKey, State};

/// Computes the no-fit polygon of `moving` with respect to `fixed`.
///
/// `moving` is translated so that its first outer-boundary vertex lies at the
/// origin before being reflected; the result is positioned relative to
/// `fixed` as given.
pub fn nfp(fixed: &Polygon, moving: &Polygon) -> Vec<Polygon> {
    let (fx, fy) = moving.first_vertex();
    let reflected = moving.translated(-fx, -fy).reflected();
    minkowski::minkowski_sum(fixed.exterior(), reflected.exterior())
}

/// Computes the no-fit polygon of canonical polygon `b` (rotated by
/// `rotation_b`) against canonical polygon `a` placed at `translation` with
/// rotation `rotation_a`, memoizing through the state's cache.
///
/// Cache entries hold the NFP of the origin-aligned rotated forms; only the
/// final translation by `a`'s placement is applied per call.
pub fn cached_nfp(
    state: &mut State,
    a: CanonicalId,
    translation: (f64, f64),
    rotation_a: f64,
    b: CanonicalId,
    rotation_b: f64,
) -> Vec<Polygon> {
    let key = NfpCacheKey::new(a, b, rotation_a, rotation_b);

    if !state.contains_nfp(&key) {
        let fixed = state.polygon(a).rotated(rotation_a);
        let moving = state.polygon(b).rotated(rotation_b).reflected();
        let parts = minkowski::minkowski_sum(fixed.exterior(), moving.exterior());
        log::trace!(
            "nfp cache miss for ({:?}, {:?}, {:.4}, {:.4}): {} part(s)",
            a,
            b,
            rotation_a,
            rotation_b,
            parts.len()
        );
        state.store_nfp(key, parts);
    }

    state
        .lookup_nfp(&key)
        .map(|parts| {
            parts
                .iter()
                .map(|p| p.translated(translation.0, translation.1))
                .collect()
        })
        .unwrap_or_default()
}

/// Computes the inner-fit polygon of `part` within an axis-aligned
/// rectangular `container`.
///
/// The part is referenced by its first outer-boundary vertex, which is
/// shifted to the origin before its extents are measured. Returns `None`
/// when the part does not fit at this orientation.
pub fn inner_fit_rect(container: &AABB2D, part: &Polygon) -> Option<Contour> {
    let (fx, fy) = part.first_vertex();
    let part_bbox = part.bbox().translated(-fx, -fy);

    if container.width() < part_bbox.width() || container.height() < part_bbox.height() {
        return None;
    }

    Some(vec![
        (
            container.min_x - part_bbox.min_x,
            container.min_y - part_bbox.min_y,
        ),
        (
            container.max_x - part_bbox.max_x,
            container.min_y - part_bbox.min_y,
        ),
        (
            container.max_x - part_bbox.max_x,
            container.max_y - part_bbox.max_y,
        ),
        (
            container.min_x - part_bbox.min_x,
            container.max_y - part_bbox.max_y,
        ),
    ])
}
