//! Input/output boundary around the collapse core
//!
//! Everything here is a thin wrapper: tile-set configs in, finished grids out.
//! The search itself never touches the filesystem.

/// Command-line interface and run dispatch
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for core and I/O operations
pub mod error;
/// PNG assembly of generated grids from tile images
pub mod image;
/// Progress reporting for batch generation
pub mod progress;
/// Tile-set configuration loading
pub mod tileset;
/// Offline rotation/mirroring expansion of tile directories
pub mod transform;
