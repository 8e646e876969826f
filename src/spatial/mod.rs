//! Spatial data structures for the collapse search
//!
//! This module contains the tile model and the grid it is searched over:
//! - Tiles, edge signatures, and the adjacency match rule
//! - Per-cell domain grid with collapse and restore operations

/// Domain grid state and cell-level operations
pub mod grid;
/// Tile definitions, directions, and edge compatibility
pub mod tiles;

pub use grid::{DomainGrid, Position};
pub use tiles::{MatchRule, Tile, TileSet};
