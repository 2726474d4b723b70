//! # quicknest-core
//!
//! Shared foundations for the quicknest 2D nesting engine: typed errors,
//! robust geometric predicates, rigid 2D transforms with axis-aligned
//! bounding boxes, and the placement output record.
//!
//! The actual nesting algorithms live in the `quicknest-d2` crate; this
//! crate deliberately has no opinion about polygons beyond raw contours.
//!
//! ## Feature flags
//!
//! - `serde`: serialization support for the public data types.

pub mod error;
pub mod placement;
pub mod robust;
pub mod transform;

pub use error::{Error, Result};
pub use placement::Placement;
pub use transform::{Transform2D, AABB2D};
