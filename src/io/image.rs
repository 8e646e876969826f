//! PNG assembly of generated grids from tile images

use image::RgbaImage;
use ndarray::Array2;
use std::path::{Path, PathBuf};

use crate::io::error::{CollapseError, Result};

/// Load the tile images for a tile set, in tile order
///
/// All images must be square and share one size so they can be composited
/// on a uniform grid.
///
/// # Errors
///
/// Returns `ImageLoad` for unreadable files and `InvalidTileImage` for
/// non-square or mismatched sizes.
pub fn load_tile_images(paths: &[PathBuf]) -> Result<Vec<RgbaImage>> {
    let mut images = Vec::with_capacity(paths.len());
    let mut expected: Option<u32> = None;

    for path in paths {
        let img = image::open(path)
            .map_err(|source| CollapseError::ImageLoad {
                path: path.clone(),
                source,
            })?
            .to_rgba8();

        let (width, height) = img.dimensions();
        if width != height {
            return Err(CollapseError::InvalidTileImage {
                path: path.clone(),
                reason: format!("expected a square image, got {width}x{height}"),
            });
        }

        match expected {
            None => expected = Some(width),
            Some(size) if size != width => {
                return Err(CollapseError::InvalidTileImage {
                    path: path.clone(),
                    reason: format!("tile size {width} differs from the set's size {size}"),
                });
            }
            Some(_) => {}
        }

        images.push(img);
    }

    Ok(images)
}

/// Composite a resolved id grid into one PNG
///
/// `ids` is indexed `[x, y]` and each id indexes `images` (ids are assigned
/// by tile-set order, so the two line up by construction).
///
/// # Errors
///
/// Returns `InvalidTileImage` when an id has no image and `ImageExport` when
/// the composite cannot be saved.
pub fn export_grid_png(ids: &Array2<u32>, images: &[RgbaImage], path: &Path) -> Result<()> {
    let tile_px = images.first().map_or(0, |img| img.width());
    let (grid_width, grid_height) = ids.dim();

    let mut canvas = RgbaImage::new(grid_width as u32 * tile_px, grid_height as u32 * tile_px);

    for ((x, y), &id) in ids.indexed_iter() {
        let tile_image =
            images
                .get(id as usize)
                .ok_or_else(|| CollapseError::InvalidTileImage {
                    path: path.to_path_buf(),
                    reason: format!("tile id {id} has no image in a set of {}", images.len()),
                })?;

        image::imageops::replace(
            &mut canvas,
            tile_image,
            x as i64 * i64::from(tile_px),
            y as i64 * i64::from(tile_px),
        );
    }

    canvas
        .save(path)
        .map_err(|source| CollapseError::ImageExport {
            path: path.to_path_buf(),
            source,
        })
}
