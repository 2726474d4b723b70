//! Greedy first-fit-decreasing packing driver.
//!
//! Parts are processed in decreasing order of bounding-box area and each one
//! lands on the first sheet that accepts it. Per sheet, every sampled
//! rotation and every candidate vertex is scored with an incrementally
//! maintained bounding-box heuristic, and the global best rotation/position
//! pair is committed. There is no backtracking and no retry; a part that no
//! sheet accepts is either skipped (`partial_solution`) or aborts the whole
//! packing.

use std::cmp::Ordering;
use std::f64::consts::TAU;

use quicknest_core::robust::ScalingConfig;
use quicknest_core::{Error, Placement, Result, AABB2D};

use crate::candidates::CandidatePoints;
use crate::geometry::{Polygon, Sheet};
use crate::nfp;
use crate::state::{CanonicalId, State};

/// An already-committed shape on a sheet: the canonical polygon, where it
/// sits, and how it is rotated. Enough to recompute its NFP against any new
/// part through the cache.
#[derive(Debug, Clone)]
pub struct TransformedShape {
    /// Canonical polygon handle.
    pub base: CanonicalId,
    /// Translation applied after rotation.
    pub translation: (f64, f64),
    /// Rotation about the origin, in radians.
    pub rotation: f64,
}

impl TransformedShape {
    /// Creates a transformed-shape record.
    pub fn new(base: CanonicalId, translation: (f64, f64), rotation: f64) -> Self {
        Self {
            base,
            translation,
            rotation,
        }
    }
}

/// Incrementally maintained bounding-box heuristic.
///
/// Scores a prospective placement as the area of the bounding box of
/// everything on the sheet (holes and placed parts) plus the area of the
/// bounding box of the newly placed parts alone. The doubled weight on new
/// parts clusters them tightly; counting the holes pulls placements toward
/// preexisting scrap.
#[derive(Debug, Clone)]
pub struct BboxHeuristic {
    combined: AABB2D,
    fresh: AABB2D,
}

impl BboxHeuristic {
    /// Creates the heuristic from the bounding box of the sheet's holes
    /// (empty when the sheet has none).
    pub fn new(holes_bbox: AABB2D) -> Self {
        Self {
            combined: holes_bbox,
            fresh: AABB2D::empty(),
        }
    }

    /// Scores the sheet as if a part with the given bounding box were added.
    pub fn eval_if_added(&self, bbox: &AABB2D) -> f64 {
        self.combined.union(bbox).area() + self.fresh.union(bbox).area()
    }

    /// Commits a part with the given bounding box.
    pub fn add(&mut self, bbox: &AABB2D) {
        self.combined = self.combined.union(bbox);
        self.fresh = self.fresh.union(bbox);
    }
}

struct BestCandidate {
    rotation_index: usize,
    point: (f64, f64),
    bbox: AABB2D,
    score: f64,
}

/// Packs polygons onto sheets in decreasing order of bounding-box area.
///
/// Sheets are tried in index order; `rotations` evenly spaced angles are
/// sampled per sheet (`1` means the original orientation only). With
/// `partial_solution` set, unplaceable parts are silently skipped and absent
/// from the output; without it, any unplaceable part makes the whole result
/// an empty list.
///
/// Returns one placement list per sheet, in commitment order. The `state`
/// may be reused across calls to amortize NFP computations.
pub fn pack(
    sheets: &[Sheet],
    polygons: &[Polygon],
    state: &mut State,
    partial_solution: bool,
    rotations: usize,
) -> Result<Vec<Vec<Placement>>> {
    if rotations == 0 {
        return Err(Error::Config("rotations must be at least 1".into()));
    }
    for sheet in sheets {
        sheet.validate()?;
    }

    let grid = ScalingConfig::default();
    let mut ids = Vec::with_capacity(polygons.len());
    let mut areas = Vec::with_capacity(polygons.len());
    for polygon in polygons {
        polygon.validate()?;
        let snapped = polygon.snapped(&grid);
        areas.push(snapped.bbox().area());
        ids.push(state.get_canonical(&snapped));
    }

    // Largest bounding box first; ties keep input order for determinism.
    let mut order: Vec<usize> = (0..polygons.len()).collect();
    order.sort_by(|&i, &j| {
        areas[j]
            .partial_cmp(&areas[i])
            .unwrap_or(Ordering::Equal)
            .then(i.cmp(&j))
    });

    log::debug!(
        "packing {} polygons onto {} sheets ({} rotations)",
        polygons.len(),
        sheets.len(),
        rotations
    );

    let result = pack_ordered_first_fit(sheets, &order, &ids, state, partial_solution, rotations);

    log::debug!(
        "state holds {} canonical polygons, {} cached NFPs",
        state.interned_len(),
        state.cache_len()
    );

    Ok(result.unwrap_or_default())
}

/// Packs canonical polygons in the given order using first-fit bin selection.
///
/// `order` indexes into `ids`, which must hold handles interned in `state`.
/// Returns `None` when a part cannot be placed and `partial_solution` is
/// unset, losing all partial progress.
pub fn pack_ordered_first_fit(
    sheets: &[Sheet],
    order: &[usize],
    ids: &[CanonicalId],
    state: &mut State,
    partial_solution: bool,
    rotations: usize,
) -> Option<Vec<Vec<Placement>>> {
    let rotations = rotations.max(1);
    let grid = ScalingConfig::default();

    let mut sheet_parts: Vec<Vec<TransformedShape>> = Vec::new();
    let mut sheet_placements: Vec<Vec<Placement>> = Vec::new();
    let mut sheet_heuristics: Vec<BboxHeuristic> = Vec::new();

    for &polygon_id in order {
        let id = ids[polygon_id];
        let mut placed = false;

        for (sheet_id, sheet) in sheets.iter().enumerate() {
            if placed {
                break;
            }

            // First use of this sheet: register its holes as immovable parts
            // and seed the heuristic from their combined bounding box.
            if sheet_id == sheet_parts.len() {
                sheet_parts.push(Vec::new());
                sheet_placements.push(Vec::new());

                let mut holes_bbox = AABB2D::empty();
                for hole in sheet.holes() {
                    let hole = hole.snapped(&grid);
                    let shift_back = hole.first_vertex();
                    holes_bbox = holes_bbox.union(&hole.bbox());
                    let canonical = state.get_canonical(&hole);
                    sheet_parts[sheet_id].push(TransformedShape::new(canonical, shift_back, 0.0));
                }
                sheet_heuristics.push(BboxHeuristic::new(holes_bbox));
            }

            let mut best: Option<BestCandidate> = None;

            for i in 0..rotations {
                let angle = i as f64 * TAU / rotations as f64;
                let rotated = state.polygon(id).rotated(angle);
                let rotated_bbox = rotated.bbox();

                let mut candidates =
                    CandidatePoints::new(nfp::inner_fit_rect(&sheet.bbox(), &rotated));

                for shape in &sheet_parts[sheet_id] {
                    let parts = nfp::cached_nfp(
                        state,
                        shape.base,
                        shape.translation,
                        shape.rotation,
                        id,
                        angle,
                    );
                    for part in parts {
                        candidates.add_nfp(part);
                    }
                }

                for point in candidates.get_points() {
                    let placed_bbox = rotated_bbox.translated(point.0, point.1);
                    // The linear term breaks score ties toward the
                    // bottom-left corner.
                    let score = sheet_heuristics[sheet_id].eval_if_added(&placed_bbox)
                        + 0.01 * (point.0 + point.1);

                    if best.as_ref().map_or(true, |b| score < b.score) {
                        best = Some(BestCandidate {
                            rotation_index: i,
                            point,
                            bbox: placed_bbox,
                            score,
                        });
                    }
                }
            }

            if let Some(best) = best {
                let angle = best.rotation_index as f64 * TAU / rotations as f64;
                let degrees = best.rotation_index as f64 * 360.0 / rotations as f64;

                log::debug!(
                    "placed polygon {} on sheet {} at ({:.3}, {:.3}), {} deg",
                    polygon_id,
                    sheet_id,
                    best.point.0,
                    best.point.1,
                    degrees
                );

                sheet_parts[sheet_id].push(TransformedShape::new(id, best.point, angle));
                sheet_placements[sheet_id].push(Placement::new(polygon_id, best.point, degrees));
                sheet_heuristics[sheet_id].add(&best.bbox);
                placed = true;
            }
        }

        if !placed {
            if !partial_solution {
                log::debug!("polygon {} does not fit anywhere, packing infeasible", polygon_id);
                return None;
            }
            log::debug!("polygon {} does not fit anywhere, skipped", polygon_id);
        }
    }

    // Unopened sheets still appear in the output, empty.
    sheet_placements.resize_with(sheets.len(), Vec::new);
    Some(sheet_placements)
}
