//! Tile-set configuration loading
//!
//! A tile directory holds one image per tile plus a `config.json` describing
//! each tile's edge connections:
//!
//! ```json
//! [
//!   { "name": "pipe.png",
//!     "connections": { "left": "ABA", "up": "AAA", "right": "ABA", "down": "AAA" } }
//! ]
//! ```
//!
//! Tile ids are assigned by array index, so the config order is the canonical
//! tile order for a run.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::io::configuration::CONFIG_FILE_NAME;
use crate::io::error::{CollapseError, Result};
use crate::spatial::tiles::{MatchRule, Tile, TileSet};

/// Edge signatures of one configured tile, keyed by direction
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EdgeConnections {
    /// Signature facing negative x
    pub left: String,
    /// Signature facing negative y
    pub up: String,
    /// Signature facing positive x
    pub right: String,
    /// Signature facing positive y
    pub down: String,
}

/// One entry of a tile directory's `config.json`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TileConfig {
    /// Image file name relative to the tile directory
    pub name: String,
    /// Edge signatures used for adjacency matching
    pub connections: EdgeConnections,
}

/// A tile set together with the image each tile maps to
#[derive(Clone, Debug)]
pub struct LoadedTileSet {
    /// Tiles in config order, ids assigned by index
    pub tileset: TileSet,
    /// Image path per tile, parallel to the tile order
    pub image_paths: Vec<PathBuf>,
}

/// Read and parse a tile directory's `config.json`
///
/// # Errors
///
/// Returns `ConfigLoad` when the file cannot be read and `ConfigParse` when
/// its contents are not the expected JSON shape.
pub fn read_config(dir: &Path) -> Result<Vec<TileConfig>> {
    let path = dir.join(CONFIG_FILE_NAME);

    let data = std::fs::read_to_string(&path).map_err(|source| CollapseError::ConfigLoad {
        path: path.clone(),
        source,
    })?;

    serde_json::from_str(&data).map_err(|source| CollapseError::ConfigParse { path, source })
}

/// Write a tile directory's `config.json` back to disk
///
/// # Errors
///
/// Returns `ConfigLoad` when the file cannot be written.
pub fn write_config(dir: &Path, configs: &[TileConfig]) -> Result<()> {
    let path = dir.join(CONFIG_FILE_NAME);

    let data = serde_json::to_string_pretty(configs).map_err(|source| {
        CollapseError::ConfigParse {
            path: path.clone(),
            source,
        }
    })?;

    std::fs::write(&path, data).map_err(|source| CollapseError::ConfigLoad { path, source })
}

/// Load a tile directory into a tile set ready for generation
///
/// # Errors
///
/// Propagates `read_config` failures.
pub fn load_tileset(dir: &Path, rule: MatchRule) -> Result<LoadedTileSet> {
    let configs = read_config(dir)?;

    let mut tiles = Vec::with_capacity(configs.len());
    let mut image_paths = Vec::with_capacity(configs.len());

    for (index, config) in configs.into_iter().enumerate() {
        let EdgeConnections {
            left,
            up,
            right,
            down,
        } = config.connections;

        tiles.push(Tile::new(index as u32, [left, up, right, down]));
        image_paths.push(dir.join(config.name));
    }

    Ok(LoadedTileSet {
        tileset: TileSet::new(tiles, rule),
        image_paths,
    })
}
