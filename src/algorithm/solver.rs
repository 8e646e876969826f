//! Collapse orchestration
//!
//! Drives the search loop: pick the lowest-entropy cell, attempt a collapse,
//! push a history snapshot on success, and on failure pop the history to
//! undo the latest decision with its failed choice struck out. The loop only
//! exits by completing the grid or exhausting the history.
//!
//! Backtracking retreats exactly one decision level and removes exactly the
//! one failed tile at that level. That mirrors the behaviour this solver is
//! specified against and is a known completeness limitation: a conflict whose
//! true cause lies several decisions deep can make the search churn, so this
//! is not a guaranteed-terminating solver for adversarial tile sets.

use ndarray::Array2;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::algorithm::domain::DomainSet;
use crate::algorithm::history::{HistoryEntry, HistoryStack};
use crate::io::error::{CollapseError, Result};
use crate::spatial::grid::{DomainGrid, Position};
use crate::spatial::tiles::{Direction, TileSet};

/// Seeded random selector for reproducible stochastic choices
///
/// Passed explicitly through every stochastic operation so a run is fully
/// determined by its seed.
pub struct RandomSource {
    rng: StdRng,
}

impl RandomSource {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform index into a collection of the given length
    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            0
        } else {
            self.rng.random_range(0..len)
        }
    }

    /// Uniform position on a width×height grid
    pub fn position(&mut self, width: usize, height: usize) -> Position {
        Position::new(self.index(width), self.index(height))
    }
}

/// One in-flight generation run
///
/// Owns the domain grid, the history stack, and the random source for the
/// duration of the run; nothing is shared or reused across runs.
pub struct Generator {
    grid: DomainGrid,
    history: HistoryStack,
    random: RandomSource,
    cursor: Position,
    steps: usize,
    backtracks: usize,
    complete: bool,
}

impl Generator {
    /// Build a fresh run over the given tile set and dimensions
    ///
    /// The starting cell is chosen uniformly at random.
    ///
    /// # Errors
    ///
    /// Returns the grid construction failures (`InvalidDimensions`,
    /// `DegenerateTileSet`) for bad input.
    pub fn new(tileset: &TileSet, width: usize, height: usize, seed: u64) -> Result<Self> {
        let grid = DomainGrid::new(width, height, tileset)?;
        let mut random = RandomSource::new(seed);
        let cursor = random.position(width, height);

        Ok(Self {
            grid,
            history: HistoryStack::new(),
            random,
            cursor,
            steps: 0,
            backtracks: 0,
            complete: false,
        })
    }

    /// Execute one step of the search
    ///
    /// A step is either a snapshot-then-collapse at the current cursor or,
    /// when the cursor's domain is exhausted, one backtrack that restores the
    /// latest decision and retries there. Returns `Ok(false)` once every
    /// cell is collapsed.
    ///
    /// # Errors
    ///
    /// Returns `Unsatisfiable` when a backtrack finds no decision left to
    /// undo; grid contract errors surface unchanged.
    pub fn advance(&mut self) -> Result<bool> {
        if self.complete {
            return Ok(false);
        }

        self.steps += 1;

        let snapshot = self.snapshot(self.cursor);

        if self.grid.collapse(self.cursor, &mut self.random)? {
            self.history.push(snapshot);

            match self.grid.entropy_ranked_cell(&mut self.random) {
                Some(next) => {
                    self.cursor = next;
                    Ok(true)
                }
                None => {
                    self.complete = true;
                    Ok(false)
                }
            }
        } else {
            self.backtrack()?;
            Ok(true)
        }
    }

    /// Run the search to completion and extract the resolved tile ids
    ///
    /// # Errors
    ///
    /// Returns `Unsatisfiable` if backtracking exhausts every recorded
    /// decision without completing the grid.
    pub fn run(&mut self) -> Result<Array2<u32>> {
        while self.advance()? {}
        self.grid.all_tile_ids()
    }

    /// The grid state of this run
    pub const fn grid(&self) -> &DomainGrid {
        &self.grid
    }

    /// Number of collapse decisions currently standing
    pub fn decisions(&self) -> usize {
        self.history.len()
    }

    /// Number of backtrack steps taken so far
    pub const fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Number of search steps taken so far
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Capture the cursor's domain and every recordable neighbour domain
    fn snapshot(&self, pos: Position) -> HistoryEntry {
        let tile_count = self.grid.tile_count();
        let width = self.grid.width();
        let height = self.grid.height();

        let domain = self
            .grid
            .domain_at(pos)
            .unwrap_or_else(|| DomainSet::empty(tile_count));

        let neighbours = Direction::ALL.map(|direction| {
            pos.step(direction, width, height)
                .and_then(|neighbour| self.grid.domain_at(neighbour))
        });

        HistoryEntry {
            pos,
            domain,
            neighbours,
        }
    }

    /// Undo the latest decision and point the cursor back at it
    ///
    /// The tile that was resolved there is struck from the restored domain
    /// permanently for this run, so a later collapse at that position never
    /// re-selects it. Only neighbours that were recorded at snapshot time
    /// are restored; the rest were collapsed or off-grid and must stay put.
    fn backtrack(&mut self) -> Result<()> {
        let Some(entry) = self.history.pop() else {
            return Err(CollapseError::Unsatisfiable { steps: self.steps });
        };

        self.backtracks += 1;

        let HistoryEntry {
            pos,
            mut domain,
            neighbours,
        } = entry;

        if let Some(failed) = self.grid.resolved_at(pos) {
            domain.remove(failed);
        }

        self.grid.set_domain(pos, domain)?;

        let width = self.grid.width();
        let height = self.grid.height();

        for (direction, recorded) in Direction::ALL.into_iter().zip(neighbours) {
            let Some(previous) = recorded else {
                continue;
            };

            if let Some(neighbour) = pos.step(direction, width, height) {
                self.grid.set_domain(neighbour, previous)?;
            }
        }

        self.cursor = pos;
        Ok(())
    }
}

/// Generate a width×height grid of tile identifiers in one call
///
/// Constructs a fresh grid and history per call; each invocation is atomic
/// and fully independent, so interactive callers simply call again for a new
/// layout.
///
/// # Errors
///
/// Returns `InvalidDimensions` or `DegenerateTileSet` for bad input and
/// `Unsatisfiable` when no valid full assignment is reachable from the
/// choices the search explored.
pub fn generate(
    tileset: &TileSet,
    width: usize,
    height: usize,
    seed: u64,
) -> Result<Array2<u32>> {
    Generator::new(tileset, width, height, seed)?.run()
}
