//! # quicknest-d2
//!
//! Deterministic greedy 2D nesting: given rectangular sheets (possibly with
//! forbidden regions) and arbitrary polygonal parts with holes, compute a
//! rigid placement for each part such that parts stay on their sheet and
//! nothing overlaps.
//!
//! The engine favors speed over optimality. Parts are packed first-fit in
//! decreasing bounding-box order; feasible positions come from no-fit
//! polygons (Minkowski sums) subtracted from the sheet's inner-fit
//! rectangle, and an incremental bounding-box heuristic picks among the
//! candidate vertices. All no-fit polygons are memoized in a caller-owned
//! [`State`] keyed by canonical polygon identity, so reusing one `State`
//! across calls amortizes the geometry work.
//!
//! ## Quick start
//!
//! ```rust
//! use quicknest_d2::{pack, Polygon, Sheet, State};
//!
//! let sheets = vec![Sheet::new(300.0, 300.0)];
//! let parts = vec![
//!     Polygon::rectangle(200.0, 200.0),
//!     Polygon::rectangle(20.0, 20.0),
//! ];
//!
//! let mut state = State::new();
//! let placements = pack(&sheets, &parts, &mut state, false, 1).unwrap();
//!
//! assert_eq!(placements.len(), 1);
//! assert_eq!(placements[0].len(), 2);
//! // The large part is committed first, in the bottom-left corner.
//! assert_eq!(placements[0][0].polygon_id, 0);
//! assert_eq!(placements[0][0].translation, (0.0, 0.0));
//! ```
//!
//! ## Feature flags
//!
//! - `serde`: serialization support for the public data types.

pub mod boolean;
pub mod candidates;
pub mod geometry;
pub mod minkowski;
pub mod nfp;
pub mod pack;
pub mod state;

pub use candidates::CandidatePoints;
pub use geometry::{Contour, Polygon, Sheet};
pub use pack::{pack, pack_ordered_first_fit, BboxHeuristic, TransformedShape};
pub use state::{CanonicalId, NfpCacheKey, State};

pub use quicknest_core::{Error, Placement, Result, Transform2D, AABB2D};
