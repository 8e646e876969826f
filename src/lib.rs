//! Wave function collapse over edge-matched tile sets
//!
//! Tracks a domain of possible tiles per grid cell, repeatedly collapses the
//! lowest-entropy cell to a single tile while filtering its neighbours, and
//! backtracks through a snapshot history when a choice drives a domain empty.

#![forbid(unsafe_code)]

/// Search engine: cell domains, backtracking history, and the collapse driver
pub mod algorithm;
/// Input/output operations: tile configs, image assembly, CLI, error handling
pub mod io;
/// Tile model and grid state management
pub mod spatial;

pub use algorithm::solver::{Generator, generate};
pub use io::error::{CollapseError, Result};
pub use spatial::grid::{DomainGrid, Position};
pub use spatial::tiles::{MatchRule, Tile, TileSet};
