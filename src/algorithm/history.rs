//! Pre-collapse snapshots supporting backtracking
//!
//! Every successful collapse pushes enough state to fully undo its effects:
//! the collapsed cell's prior domain and, per direction, the neighbour's
//! prior domain when that neighbour was in bounds and uncollapsed at
//! snapshot time. Unrecorded neighbours must never be touched on restore;
//! a `None` here means "not recorded", which is distinct from an empty
//! recorded domain.

use crate::algorithm::domain::DomainSet;
use crate::spatial::grid::Position;

/// Snapshot taken immediately before one collapse attempt
#[derive(Clone, Debug)]
pub struct HistoryEntry {
    /// The position that was collapsed
    pub pos: Position,
    /// The cell's own domain before the collapse
    pub domain: DomainSet,
    /// Neighbour domains before the collapse, indexed by `Direction` order
    pub neighbours: [Option<DomainSet>; 4],
}

/// Last-in-first-out record of collapse decisions for one run
///
/// Grows by one entry per successful collapse and shrinks by one per
/// backtrack step. Popping an empty stack is not a programming error: it
/// means there is no decision left to undo, which the orchestrator surfaces
/// as an unsatisfiable instance.
#[derive(Debug, Default)]
pub struct HistoryStack {
    entries: Vec<HistoryEntry>,
}

impl HistoryStack {
    /// Create an empty stack
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Record a collapse decision
    pub fn push(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Take back the most recent decision, if any remains
    pub fn pop(&mut self) -> Option<HistoryEntry> {
        self.entries.pop()
    }

    /// Number of decisions currently on the stack
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if no decisions remain
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
