/// Bitmask cell domains over the canonical tile-set order
pub mod domain;
/// Pre-collapse snapshots and the backtracking stack
pub mod history;
/// Collapse orchestration: entropy-driven search with backtracking
pub mod solver;
