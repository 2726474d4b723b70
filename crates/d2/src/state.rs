//! Canonical polygon interning and NFP memoization.
//!
//! Every polygon entering the engine is translated so that its first
//! outer-boundary vertex sits at the origin and interned: geometrically equal
//! polygons share a single [`CanonicalId`]. NFP computations are then keyed
//! by the two canonical ids plus the two rotation angles, so a part packed
//! against a recurring layout (or across repeated calls, when the caller
//! keeps the `State` alive) never pays for the same Minkowski sum twice.
//!
//! The state only ever grows; the caller trades memory for speed by choosing
//! how long to keep it.

use std::collections::HashMap;

use crate::geometry::Polygon;

/// Stable handle to an interned canonical polygon.
///
/// Valid for the lifetime of the [`State`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalId(usize);

/// Cache key for an NFP computation: both canonical ids and the exact
/// rotation angles, compared by bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NfpCacheKey {
    a: CanonicalId,
    b: CanonicalId,
    rotation_a_bits: u64,
    rotation_b_bits: u64,
}

impl NfpCacheKey {
    /// Creates a key from the canonical pair and their rotations in radians.
    pub fn new(a: CanonicalId, b: CanonicalId, rotation_a: f64, rotation_b: f64) -> Self {
        Self {
            a,
            b,
            rotation_a_bits: rotation_a.to_bits(),
            rotation_b_bits: rotation_b.to_bits(),
        }
    }
}

/// Vertex sequence of an origin-aligned polygon as raw coordinate bits,
/// outer boundary first, then each hole in order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct GeometryKey {
    contours: Vec<Vec<(u64, u64)>>,
}

impl GeometryKey {
    fn of(polygon: &Polygon) -> Self {
        let contour_bits =
            |c: &[(f64, f64)]| c.iter().map(|&(x, y)| (x.to_bits(), y.to_bits())).collect();

        let mut contours = Vec::with_capacity(1 + polygon.holes().len());
        contours.push(contour_bits(polygon.exterior()));
        for hole in polygon.holes() {
            contours.push(contour_bits(hole));
        }
        Self { contours }
    }
}

/// Persistent host for the canonical polygon interner and the NFP cache.
#[derive(Debug, Default)]
pub struct State {
    polygons: Vec<Polygon>,
    index: HashMap<GeometryKey, CanonicalId>,
    nfp_cache: HashMap<NfpCacheKey, Vec<Polygon>>,
}

impl State {
    /// Creates an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns the canonical form of a polygon.
    ///
    /// The polygon is translated so its first outer-boundary vertex lies at
    /// the origin; if an identical vertex sequence is already interned its
    /// existing id is returned.
    pub fn get_canonical(&mut self, polygon: &Polygon) -> CanonicalId {
        let (fx, fy) = polygon.first_vertex();
        let aligned = polygon.translated(-fx, -fy);
        let key = GeometryKey::of(&aligned);

        if let Some(&id) = self.index.get(&key) {
            return id;
        }

        let id = CanonicalId(self.polygons.len());
        self.polygons.push(aligned);
        self.index.insert(key, id);
        id
    }

    /// The canonical polygon behind a handle.
    pub fn polygon(&self, id: CanonicalId) -> &Polygon {
        &self.polygons[id.0]
    }

    /// Returns true if an NFP is cached under the key.
    pub fn contains_nfp(&self, key: &NfpCacheKey) -> bool {
        self.nfp_cache.contains_key(key)
    }

    /// Looks up a cached NFP.
    pub fn lookup_nfp(&self, key: &NfpCacheKey) -> Option<&[Polygon]> {
        self.nfp_cache.get(key).map(Vec::as_slice)
    }

    /// Stores an NFP computed at the origin for the key's canonical forms.
    pub fn store_nfp(&mut self, key: NfpCacheKey, nfp: Vec<Polygon>) {
        self.nfp_cache.insert(key, nfp);
    }

    /// Number of interned canonical polygons.
    pub fn interned_len(&self) -> usize {
        self.polygons.len()
    }

    /// Number of cached NFP entries.
    pub fn cache_len(&self) -> usize {
        self.nfp_cache.len()
    }

    /// Drops every interned polygon and cached NFP.
    ///
    /// Previously issued [`CanonicalId`]s become invalid.
    pub fn clear(&mut self) {
        self.polygons.clear();
        self.index.clear();
        self.nfp_cache.clear();
    }
}
