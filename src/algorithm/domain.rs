use bitvec::prelude::*;
use std::fmt;

/// Set of tiles still considered possible at one grid cell
///
/// Stored as a bitmask over the canonical tile-set order, so a domain is
/// always a subsequence of the original tile set and snapshots for the
/// backtracking history are a single allocation. Indices are 0-based
/// positions into the tile set, not tile ids.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DomainSet {
    bits: BitVec,
}

impl DomainSet {
    /// Create a domain with no tiles present
    pub fn empty(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
        }
    }

    /// Create a domain containing the whole tile set
    pub fn full(tile_count: usize) -> Self {
        Self {
            bits: bitvec![1; tile_count],
        }
    }

    /// Create a domain containing exactly one tile
    pub fn singleton(index: usize, tile_count: usize) -> Self {
        let mut domain = Self::empty(tile_count);
        domain.insert(index);
        domain
    }

    /// Number of tile slots the domain ranges over
    pub fn capacity(&self) -> usize {
        self.bits.len()
    }

    /// Count of tiles still present
    pub fn len(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no tiles remain (a contradiction when seen on a live cell)
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Test tile membership
    pub fn contains(&self, index: usize) -> bool {
        self.bits.get(index).as_deref() == Some(&true)
    }

    /// Add a tile index
    pub fn insert(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, true);
        }
    }

    /// Remove a tile index
    pub fn remove(&mut self, index: usize) {
        if index < self.bits.len() {
            self.bits.set(index, false);
        }
    }

    /// Intersect this domain with another in-place
    pub fn intersect_with(&mut self, other: &Self) {
        self.bits &= &other.bits;
    }

    /// Create a new domain containing the intersection
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.intersect_with(other);
        result
    }

    /// Iterate remaining tile indices in canonical (ascending) order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter_ones()
    }

    /// The n-th remaining tile index in canonical order
    ///
    /// Used to turn a random draw in `0..len()` into a concrete candidate.
    pub fn nth(&self, n: usize) -> Option<usize> {
        self.bits.iter_ones().nth(n)
    }

    /// Extract all remaining tile indices as a vector
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for DomainSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainSet({} tiles: {:?})", self.len(), self.to_vec())
    }
}
