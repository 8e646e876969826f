//! Domain grid state for the collapse search
//!
//! Owns, for every cell, the set of tiles still possible plus a collapsed
//! flag, stored in flat `Array2` arenas indexed by `[x, y]`. A collapsed
//! cell's domain is always a singleton, and outside of an explicit
//! backtracking restore a domain only ever shrinks.

use ndarray::Array2;
use std::fmt;

use crate::algorithm::domain::DomainSet;
use crate::algorithm::solver::RandomSource;
use crate::io::error::{CollapseError, Result};
use crate::spatial::tiles::{CompatibilityRules, Direction, Tile, TileSet};

/// Grid coordinates, 0-indexed, `x` in `[0, width)`, `y` in `[0, height)`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Column index
    pub x: usize,
    /// Row index
    pub y: usize,
}

impl Position {
    /// Create a position from its coordinates
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The adjacent position in the given direction, if it stays on the grid
    pub fn step(self, direction: Direction, width: usize, height: usize) -> Option<Self> {
        let [dx, dy] = direction.offset();
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;

        (x < width && y < height).then_some(Self { x, y })
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Per-cell tile domains plus collapsed flags for one generation run
///
/// Created once per run with every domain set to the full tile set, mutated
/// in place by `collapse` and `set_domain`, and handed off for id extraction
/// when the run finishes.
#[derive(Clone, Debug)]
pub struct DomainGrid {
    tiles: Vec<Tile>,
    rules: CompatibilityRules,
    domains: Array2<DomainSet>,
    collapsed: Array2<bool>,
}

impl DomainGrid {
    /// Create a grid with every cell's domain set to the full tile set
    ///
    /// # Errors
    ///
    /// Returns `InvalidDimensions` if either dimension is zero and
    /// `DegenerateTileSet` if the set holds one tile or fewer (no meaningful
    /// choice exists).
    pub fn new(width: usize, height: usize, tileset: &TileSet) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CollapseError::InvalidDimensions { width, height });
        }

        if tileset.len() <= 1 {
            return Err(CollapseError::DegenerateTileSet {
                count: tileset.len(),
            });
        }

        let rules = CompatibilityRules::build(tileset);
        let full = DomainSet::full(tileset.len());

        Ok(Self {
            tiles: tileset.tiles().to_vec(),
            rules,
            domains: Array2::from_elem((width, height), full),
            collapsed: Array2::from_elem((width, height), false),
        })
    }

    /// Grid width in cells
    pub fn width(&self) -> usize {
        self.domains.nrows()
    }

    /// Grid height in cells
    pub fn height(&self) -> usize {
        self.domains.ncols()
    }

    /// Number of tiles in the set the grid was built from
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Test if a position lies on the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width() && pos.y < self.height()
    }

    /// Test if a position has been collapsed
    pub fn is_collapsed(&self, pos: Position) -> bool {
        self.collapsed.get([pos.x, pos.y]).copied().unwrap_or(false)
    }

    /// Pick an uncollapsed cell with the fewest remaining domain tiles
    ///
    /// Ties are broken uniformly at random rather than by scan order, so two
    /// runs with the same seed stay reproducible while different seeds
    /// explore different corners of the grid. Returns `None` once every cell
    /// is collapsed, which is the orchestrator's terminal condition.
    pub fn entropy_ranked_cell(&self, random: &mut RandomSource) -> Option<Position> {
        let mut lowest: Option<usize> = None;

        for ((x, y), domain) in self.domains.indexed_iter() {
            if self.is_collapsed(Position::new(x, y)) {
                continue;
            }

            let options = domain.len();
            if lowest.is_none_or(|current| options < current) {
                lowest = Some(options);
            }
        }

        let lowest = lowest?;

        let candidates: Vec<Position> = self
            .domains
            .indexed_iter()
            .filter(|&((x, y), domain)| {
                !self.is_collapsed(Position::new(x, y)) && domain.len() == lowest
            })
            .map(|((x, y), _)| Position::new(x, y))
            .collect();

        let choice = random.index(candidates.len());
        candidates.get(choice).copied()
    }

    /// Defensive copy of the domain at a position
    ///
    /// Returns `None` for out-of-bounds or already-collapsed positions; the
    /// orchestrator relies on that to mark neighbour snapshots as "not
    /// recorded" rather than "recorded as empty".
    pub fn domain_at(&self, pos: Position) -> Option<DomainSet> {
        if self.is_collapsed(pos) {
            return None;
        }

        self.domains.get([pos.x, pos.y]).cloned()
    }

    /// The domain at a position materialized as tile values
    pub fn domain_tiles(&self, pos: Position) -> Option<Vec<Tile>> {
        let domain = self.domain_at(pos)?;
        Some(
            domain
                .iter()
                .filter_map(|index| self.tiles.get(index).cloned())
                .collect(),
        )
    }

    /// Canonical index of the resolved tile at a collapsed position
    pub fn resolved_at(&self, pos: Position) -> Option<usize> {
        if !self.is_collapsed(pos) {
            return None;
        }

        self.domains
            .get([pos.x, pos.y])
            .and_then(|domain| domain.iter().next())
    }

    /// The resolved tile at a collapsed position, `None` otherwise
    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        let index = self.resolved_at(pos)?;
        self.tiles.get(index)
    }

    /// Overwrite the domain at a position and mark it uncollapsed
    ///
    /// Backtracking restore only; the search itself never widens a domain
    /// through any other path.
    ///
    /// # Errors
    ///
    /// Returns `OutOfBounds` if the position is outside the grid.
    pub fn set_domain(&mut self, pos: Position, domain: DomainSet) -> Result<()> {
        if !self.contains(pos) {
            return Err(CollapseError::OutOfBounds { pos });
        }

        if let Some(slot) = self.domains.get_mut([pos.x, pos.y]) {
            *slot = domain;
        }
        if let Some(flag) = self.collapsed.get_mut([pos.x, pos.y]) {
            *flag = false;
        }

        Ok(())
    }

    /// Attempt to resolve a position to one concrete tile
    ///
    /// Draws candidates uniformly at random from the cell's domain. A
    /// candidate survives only if every in-bounds, uncollapsed neighbour
    /// keeps a non-empty domain after filtering against it; surviving
    /// candidates are committed together with the staged neighbour domains.
    /// Rejected candidates are struck from the working copy and the draw
    /// repeats. `Ok(false)` means the whole domain was exhausted, in which
    /// case the grid is left untouched (compute-then-commit, never
    /// commit-then-check).
    ///
    /// # Errors
    ///
    /// Returns `AlreadyCollapsed` when called on a collapsed cell and
    /// `OutOfBounds` for a position off the grid; both indicate a caller bug.
    pub fn collapse(&mut self, pos: Position, random: &mut RandomSource) -> Result<bool> {
        if !self.contains(pos) {
            return Err(CollapseError::OutOfBounds { pos });
        }

        if self.is_collapsed(pos) {
            return Err(CollapseError::AlreadyCollapsed { pos });
        }

        let tile_count = self.tile_count();
        let mut candidates = self
            .domains
            .get([pos.x, pos.y])
            .cloned()
            .unwrap_or_else(|| DomainSet::empty(tile_count));

        'candidates: while !candidates.is_empty() {
            let draw = random.index(candidates.len());
            let Some(picked) = candidates.nth(draw) else {
                break;
            };

            // At most four staged neighbour updates per attempt
            let mut staged: Vec<(Position, DomainSet)> = Vec::with_capacity(4);

            for direction in Direction::ALL {
                let Some(neighbour) = pos.step(direction, self.width(), self.height()) else {
                    continue;
                };

                if self.is_collapsed(neighbour) {
                    continue;
                }

                let Some(allowed) = self.rules.allowed(picked, direction) else {
                    continue;
                };

                let filtered = self
                    .domains
                    .get([neighbour.x, neighbour.y])
                    .map_or_else(|| DomainSet::empty(tile_count), |d| d.intersection(allowed));

                if filtered.is_empty() {
                    // Candidate would strand this neighbour; strike and redraw
                    candidates.remove(picked);
                    continue 'candidates;
                }

                staged.push((neighbour, filtered));
            }

            for (neighbour, filtered) in staged {
                if let Some(slot) = self.domains.get_mut([neighbour.x, neighbour.y]) {
                    *slot = filtered;
                }
            }

            if let Some(slot) = self.domains.get_mut([pos.x, pos.y]) {
                *slot = DomainSet::singleton(picked, tile_count);
            }
            if let Some(flag) = self.collapsed.get_mut([pos.x, pos.y]) {
                *flag = true;
            }

            return Ok(true);
        }

        Ok(false)
    }

    /// Extract the resolved tile id at every position
    ///
    /// The result has shape `(width, height)` and is indexed `[x, y]` like
    /// `Position`.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteGrid` naming the first uncollapsed position if the
    /// run has not finished.
    pub fn all_tile_ids(&self) -> Result<Array2<u32>> {
        let mut ids = Array2::from_elem((self.width(), self.height()), 0_u32);

        for ((x, y), domain) in self.domains.indexed_iter() {
            let pos = Position::new(x, y);
            let resolved = domain.iter().next();

            match resolved {
                Some(index) if self.is_collapsed(pos) => {
                    let id = self.tiles.get(index).map_or(0, Tile::id);
                    if let Some(slot) = ids.get_mut([x, y]) {
                        *slot = id;
                    }
                }
                _ => return Err(CollapseError::IncompleteGrid { pos }),
            }
        }

        Ok(ids)
    }
}
