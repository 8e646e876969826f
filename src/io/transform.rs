//! Offline rotation/mirroring expansion of tile directories
//!
//! Auto-generates edge variants of every configured tile so hand-drawn tile
//! sets only need one orientation per shape. This is a preprocessing step
//! that rewrites the tile directory; the collapse core never depends on it
//! at runtime.

use image::RgbaImage;
use std::path::Path;

use crate::io::configuration::VARIANT_OPS;
use crate::io::error::{CollapseError, Result};
use crate::io::tileset::{EdgeConnections, TileConfig, read_config, write_config};

/// Edge connections after one counter-clockwise rotation
///
/// Matches a 270° image rotation: each edge takes the signature of the edge
/// that rotates into its place.
pub fn rotate_connections(connections: &EdgeConnections) -> EdgeConnections {
    EdgeConnections {
        left: connections.down.clone(),
        up: connections.left.clone(),
        right: connections.up.clone(),
        down: connections.right.clone(),
    }
}

/// Edge connections after flipping both axes (a 180° point mirror)
pub fn flip_connections(connections: &EdgeConnections) -> EdgeConnections {
    EdgeConnections {
        left: connections.right.clone(),
        up: connections.down.clone(),
        right: connections.left.clone(),
        down: connections.up.clone(),
    }
}

/// Apply an op string (`R` rotate, `F` flip) to edge connections, left to right
pub fn apply_connection_ops(connections: &EdgeConnections, ops: &str) -> EdgeConnections {
    let mut current = connections.clone();

    for op in ops.chars() {
        current = match op {
            'R' => rotate_connections(&current),
            'F' => flip_connections(&current),
            _ => current,
        };
    }

    current
}

/// Variant image file name for a tile and op string
///
/// `pipe.png` with ops `RR` becomes `pipe-RR.png`.
pub fn variant_name(name: &str, ops: &str) -> String {
    let stem = Path::new(name)
        .file_stem()
        .map_or_else(|| name.to_string(), |s| s.to_string_lossy().to_string());

    format!("{stem}-{ops}.png")
}

/// Apply an op string to a tile image
fn apply_image_ops(mut img: RgbaImage, ops: &str) -> RgbaImage {
    for op in ops.chars() {
        img = match op {
            'R' => image::imageops::rotate270(&img),
            'F' => {
                let flipped = image::imageops::flip_horizontal(&img);
                image::imageops::flip_vertical(&flipped)
            }
            _ => img,
        };
    }

    img
}

/// Expand a tile directory with every non-duplicate rotated/mirrored variant
///
/// Reads `config.json`, applies each op string in `VARIANT_OPS` to every
/// original tile, and appends the variants whose connection signatures are
/// not already present. Duplicate variants are skipped before their image is
/// ever written. Returns the total tile count after expansion.
///
/// # Errors
///
/// Returns config read/write failures and `ImageLoad`/`ImageExport` for the
/// per-variant image work.
pub fn expand_tile_directory(dir: &Path) -> Result<usize> {
    let mut configs = read_config(dir)?;
    let originals = configs.clone();

    for tile in &originals {
        for ops in VARIANT_OPS {
            let connections = apply_connection_ops(&tile.connections, ops);

            let duplicate = configs
                .iter()
                .any(|existing| existing.connections == connections);
            if duplicate {
                continue;
            }

            let source_path = dir.join(&tile.name);
            let img = image::open(&source_path)
                .map_err(|source| CollapseError::ImageLoad {
                    path: source_path,
                    source,
                })?
                .to_rgba8();

            let name = variant_name(&tile.name, ops);
            let target_path = dir.join(&name);

            apply_image_ops(img, ops)
                .save(&target_path)
                .map_err(|source| CollapseError::ImageExport {
                    path: target_path,
                    source,
                })?;

            configs.push(TileConfig { name, connections });
        }
    }

    write_config(dir, &configs)?;
    Ok(configs.len())
}
