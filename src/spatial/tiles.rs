//! Tile definitions and edge-signature compatibility
//!
//! A tile is an identifier plus four directional edge signatures. Two tiles
//! may sit next to each other when the facing signatures agree under the
//! match rule fixed for the whole tile set.

use crate::algorithm::domain::DomainSet;

/// The four cardinal directions in their cyclic order
///
/// The ordering is load-bearing: the opposite of a direction is
/// `(direction + 2) % 4`, and neighbour snapshots in the backtracking
/// history are indexed by this order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Direction {
    /// Negative x
    Left = 0,
    /// Negative y
    Up = 1,
    /// Positive x
    Right = 2,
    /// Positive y
    Down = 3,
}

impl Direction {
    /// All directions in cyclic order
    pub const ALL: [Self; 4] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// The facing direction, computed as two steps around the cycle
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }

    /// Index into direction-ordered arrays
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Grid offset of the neighbouring cell in this direction
    pub const fn offset(self) -> [i32; 2] {
        match self {
            Self::Left => [-1, 0],
            Self::Up => [0, -1],
            Self::Right => [1, 0],
            Self::Down => [0, 1],
        }
    }
}

/// How two facing edge signatures are compared
///
/// Fixed once per tile set; mixing rules within a run is not supported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MatchRule {
    /// Facing signatures must be identical
    #[default]
    Exact,
    /// One signature must equal the reverse of the facing one
    ///
    /// For signatures that read a shared edge left-to-right from each tile's
    /// own frame, the two readings run in opposite directions.
    Reversed,
}

/// Immutable tile value: an identifier plus one edge signature per direction
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    id: u32,
    edges: [String; 4],
}

impl Tile {
    /// Create a tile from its id and `[left, up, right, down]` signatures
    pub fn new<S: Into<String>>(id: u32, edges: [S; 4]) -> Self {
        Self {
            id,
            edges: edges.map(Into::into),
        }
    }

    /// The tile identifier, unique within one tile set
    pub const fn id(&self) -> u32 {
        self.id
    }

    /// The edge signature facing the given direction
    pub fn edge(&self, direction: Direction) -> &str {
        self.edges
            .get(direction.index())
            .map_or("", String::as_str)
    }
}

/// Test whether `a` may sit with `b` adjacent in `direction`
///
/// Compares `a`'s signature in `direction` with `b`'s signature in the
/// opposite direction under the given rule. Pure and total for any two
/// tiles; symmetric in the sense that
/// `edges_match(r, d, a, b) == edges_match(r, d.opposite(), b, a)`.
pub fn edges_match(rule: MatchRule, direction: Direction, a: &Tile, b: &Tile) -> bool {
    let ours = a.edge(direction);
    let theirs = b.edge(direction.opposite());

    match rule {
        MatchRule::Exact => ours == theirs,
        MatchRule::Reversed => ours.chars().eq(theirs.chars().rev()),
    }
}

/// Ordered tile collection with the match rule fixed for a whole run
///
/// Ids are expected to be unique; the collection does not deduplicate or
/// validate connectivity beyond the grid's construction checks.
#[derive(Clone, Debug)]
pub struct TileSet {
    tiles: Vec<Tile>,
    rule: MatchRule,
}

impl TileSet {
    /// Create a tile set with the given match rule
    pub const fn new(tiles: Vec<Tile>, rule: MatchRule) -> Self {
        Self { tiles, rule }
    }

    /// The match rule in force for this set
    pub const fn rule(&self) -> MatchRule {
        self.rule
    }

    /// The tiles in canonical order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Number of tiles in the set
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Test if the set has no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tile at a canonical index
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }
}

/// Precomputed adjacency compatibility between all tile pairs
///
/// For every tile index and direction, holds the set of tile indices that may
/// occupy the neighbouring cell. Built once at grid construction so the
/// per-collapse neighbour filtering is a bitmask intersection rather than a
/// string comparison per pair.
#[derive(Clone, Debug)]
pub struct CompatibilityRules {
    compatible: Vec<[DomainSet; 4]>,
}

impl CompatibilityRules {
    /// Build the full cross product of pairwise edge matches
    pub fn build(tileset: &TileSet) -> Self {
        let tiles = tileset.tiles();
        let rule = tileset.rule();
        let count = tiles.len();

        let compatible = tiles
            .iter()
            .map(|tile| {
                Direction::ALL.map(|direction| {
                    let mut allowed = DomainSet::empty(count);
                    for (neighbour_index, neighbour) in tiles.iter().enumerate() {
                        if edges_match(rule, direction, tile, neighbour) {
                            allowed.insert(neighbour_index);
                        }
                    }
                    allowed
                })
            })
            .collect();

        Self { compatible }
    }

    /// Tiles allowed next to `tile` in the given direction
    ///
    /// Returns an empty domain for an out-of-range tile index.
    pub fn allowed(&self, tile: usize, direction: Direction) -> Option<&DomainSet> {
        self.compatible
            .get(tile)
            .and_then(|per_direction| per_direction.get(direction.index()))
    }
}
