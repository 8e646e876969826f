//! Error types for core search and I/O boundary operations

use std::fmt;
use std::path::PathBuf;

use crate::spatial::grid::Position;

/// Main error type for all generation operations
///
/// Input validation errors are detected at construction, before any search
/// work. The position-carrying variants are contract errors: the orchestrator
/// never triggers them against the grid it drives, so seeing one means an
/// orchestration bug, not an expected runtime condition. `Unsatisfiable` is
/// the one error expected as a normal outcome of a genuinely unsolvable tile
/// set and should be treated as "try different tiles or dimensions".
#[derive(Debug)]
pub enum CollapseError {
    /// Grid dimensions must both be positive
    InvalidDimensions {
        /// Requested grid width
        width: usize,
        /// Requested grid height
        height: usize,
    },

    /// A tile set with one tile or fewer offers no meaningful choice
    DegenerateTileSet {
        /// Number of tiles provided
        count: usize,
    },

    /// A grid operation addressed a position outside the grid
    OutOfBounds {
        /// The offending position
        pos: Position,
    },

    /// Attempt to collapse a cell that is already resolved
    AlreadyCollapsed {
        /// The offending position
        pos: Position,
    },

    /// Id extraction requested before every cell was collapsed
    IncompleteGrid {
        /// First uncollapsed position found
        pos: Position,
    },

    /// Backtracking exhausted every recorded decision without a solution
    Unsatisfiable {
        /// Search steps taken before giving up
        steps: usize,
    },

    /// Failed to read a tile-set configuration file
    ConfigLoad {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Tile-set configuration file held invalid JSON
    ConfigParse {
        /// Path to the configuration file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Failed to load a tile image from disk
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// Failed to save a generated image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image error
        source: image::ImageError,
    },

    /// A tile image does not meet the assembly requirements
    InvalidTileImage {
        /// Path to the image file
        path: PathBuf,
        /// Description of what is wrong with the image
        reason: String,
    },
}

impl fmt::Display for CollapseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "Invalid grid dimensions {width}x{height}: both must be positive")
            }
            Self::DegenerateTileSet { count } => {
                write!(f, "Tile set with {count} tile(s) offers no meaningful choice")
            }
            Self::OutOfBounds { pos } => {
                write!(f, "Position {pos} is outside the grid")
            }
            Self::AlreadyCollapsed { pos } => {
                write!(f, "Position {pos} is already collapsed")
            }
            Self::IncompleteGrid { pos } => {
                write!(f, "Grid is not fully resolved: position {pos} is still open")
            }
            Self::Unsatisfiable { steps } => {
                write!(f, "No valid tile assignment reachable (gave up after {steps} steps)")
            }
            Self::ConfigLoad { path, source } => {
                write!(f, "Failed to read config '{}': {source}", path.display())
            }
            Self::ConfigParse { path, source } => {
                write!(f, "Failed to parse config '{}': {source}", path.display())
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(f, "Failed to export image to '{}': {source}", path.display())
            }
            Self::InvalidTileImage { path, reason } => {
                write!(f, "Invalid tile image '{}': {reason}", path.display())
            }
        }
    }
}

impl std::error::Error for CollapseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ConfigLoad { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, CollapseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_position() {
        let err = CollapseError::AlreadyCollapsed {
            pos: Position::new(3, 7),
        };
        assert_eq!(err.to_string(), "Position (3, 7) is already collapsed");
    }

    #[test]
    fn test_unsatisfiable_is_not_a_source_error() {
        use std::error::Error;

        let err = CollapseError::Unsatisfiable { steps: 12 };
        assert!(err.source().is_none());
        assert!(err.to_string().contains("12 steps"));
    }
}
