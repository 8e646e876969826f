//! Validates tile directory loading, variant expansion, and PNG assembly

use image::{Rgba, RgbaImage};
use std::path::Path;
use tempfile::TempDir;
use wavetile::io::image::{export_grid_png, load_tile_images};
use wavetile::io::tileset::{
    load_tileset, read_config, write_config, EdgeConnections, TileConfig,
};
use wavetile::io::transform::{
    apply_connection_ops, expand_tile_directory, flip_connections, rotate_connections,
    variant_name,
};
use wavetile::spatial::tiles::{Direction, MatchRule};
use wavetile::CollapseError;

fn connections(left: &str, up: &str, right: &str, down: &str) -> EdgeConnections {
    EdgeConnections {
        left: left.to_string(),
        up: up.to_string(),
        right: right.to_string(),
        down: down.to_string(),
    }
}

fn write_tile_png(dir: &Path, name: &str, size: u32) {
    let img = RgbaImage::from_pixel(size, size, Rgba([10, 20, 30, 255]));
    img.save(dir.join(name)).expect("write test tile image");
}

#[test]
fn test_load_tileset_assigns_ids_by_config_order() {
    let dir = TempDir::new().expect("temp dir");

    let configs = vec![
        TileConfig {
            name: "grass.png".to_string(),
            connections: connections("g", "g", "g", "g"),
        },
        TileConfig {
            name: "water.png".to_string(),
            connections: connections("w", "gw", "w", "wg"),
        },
    ];
    write_config(dir.path(), &configs).expect("write config");

    let loaded = load_tileset(dir.path(), MatchRule::Exact).expect("load tileset");

    assert_eq!(loaded.tileset.len(), 2);
    assert_eq!(loaded.tileset.rule(), MatchRule::Exact);

    let water = loaded.tileset.get(1).expect("tile 1");
    assert_eq!(water.id(), 1);
    assert_eq!(water.edge(Direction::Left), "w");
    assert_eq!(water.edge(Direction::Up), "gw");
    assert_eq!(water.edge(Direction::Right), "w");
    assert_eq!(water.edge(Direction::Down), "wg");

    assert_eq!(
        loaded.image_paths,
        vec![dir.path().join("grass.png"), dir.path().join("water.png")]
    );
}

#[test]
fn test_read_config_missing_file() {
    let dir = TempDir::new().expect("temp dir");

    assert!(matches!(
        read_config(dir.path()),
        Err(CollapseError::ConfigLoad { .. })
    ));
}

#[test]
fn test_read_config_malformed_json() {
    let dir = TempDir::new().expect("temp dir");
    std::fs::write(dir.path().join("config.json"), "{ not json").expect("write file");

    assert!(matches!(
        read_config(dir.path()),
        Err(CollapseError::ConfigParse { .. })
    ));
}

#[test]
fn test_rotation_cycles_edges_counter_clockwise() {
    let original = connections("L", "U", "R", "D");

    let once = rotate_connections(&original);
    assert_eq!(once, connections("D", "L", "U", "R"));

    // Four rotations are the identity
    let back = apply_connection_ops(&original, "RRRR");
    assert_eq!(back, original);
}

#[test]
fn test_flip_equals_double_rotation() {
    let original = connections("L", "U", "R", "D");

    assert_eq!(flip_connections(&original), connections("R", "D", "L", "U"));
    assert_eq!(
        apply_connection_ops(&original, "F"),
        apply_connection_ops(&original, "RR")
    );
}

#[test]
fn test_variant_name_inserts_op_suffix() {
    assert_eq!(variant_name("pipe.png", "RR"), "pipe-RR.png");
    assert_eq!(variant_name("corner.png", "FRRR"), "corner-FRRR.png");
}

#[test]
fn test_expand_tile_directory_skips_duplicate_variants() {
    // With four distinct edges the rotations are distinct but every flipped
    // variant collapses onto a rotation, leaving 4 tiles total
    let dir = TempDir::new().expect("temp dir");

    write_tile_png(dir.path(), "tile.png", 4);
    let configs = vec![TileConfig {
        name: "tile.png".to_string(),
        connections: connections("L", "U", "R", "D"),
    }];
    write_config(dir.path(), &configs).expect("write config");

    let count = expand_tile_directory(dir.path()).expect("expand directory");
    assert_eq!(count, 4);

    let expanded = read_config(dir.path()).expect("reread config");
    assert_eq!(expanded.len(), 4);
    assert_eq!(expanded[0].name, "tile.png");
    assert_eq!(expanded[1].name, "tile-R.png");
    assert_eq!(expanded[1].connections, connections("D", "L", "U", "R"));

    for entry in &expanded {
        assert!(
            dir.path().join(&entry.name).exists(),
            "missing image for {}",
            entry.name
        );
    }
}

#[test]
fn test_expand_fully_symmetric_tile_adds_nothing() {
    let dir = TempDir::new().expect("temp dir");

    write_tile_png(dir.path(), "plain.png", 4);
    let configs = vec![TileConfig {
        name: "plain.png".to_string(),
        connections: connections("s", "s", "s", "s"),
    }];
    write_config(dir.path(), &configs).expect("write config");

    let count = expand_tile_directory(dir.path()).expect("expand directory");
    assert_eq!(count, 1);
}

#[test]
fn test_load_tile_images_rejects_mismatched_sizes() {
    let dir = TempDir::new().expect("temp dir");

    write_tile_png(dir.path(), "small.png", 4);
    write_tile_png(dir.path(), "large.png", 8);

    let paths = vec![dir.path().join("small.png"), dir.path().join("large.png")];
    assert!(matches!(
        load_tile_images(&paths),
        Err(CollapseError::InvalidTileImage { .. })
    ));
}

#[test]
fn test_load_tile_images_rejects_non_square() {
    let dir = TempDir::new().expect("temp dir");

    let img = RgbaImage::from_pixel(4, 6, Rgba([0, 0, 0, 255]));
    img.save(dir.path().join("tall.png")).expect("write image");

    assert!(matches!(
        load_tile_images(&[dir.path().join("tall.png")]),
        Err(CollapseError::InvalidTileImage { .. })
    ));
}

#[test]
fn test_export_grid_png_dimensions() {
    let dir = TempDir::new().expect("temp dir");

    let red = RgbaImage::from_pixel(4, 4, Rgba([255, 0, 0, 255]));
    let blue = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 255, 255]));
    let images = vec![red, blue];

    let ids = ndarray::array![[0_u32, 1], [1, 0], [0, 0]];
    assert_eq!(ids.dim(), (3, 2));

    let out = dir.path().join("out.png");
    export_grid_png(&ids, &images, &out).expect("export grid");

    let rendered = image::open(&out).expect("reopen output").to_rgba8();
    assert_eq!(rendered.dimensions(), (12, 8));

    // (1, 0) resolved to tile 1, so its block is blue
    assert_eq!(rendered.get_pixel(4, 0), &Rgba([0, 0, 255, 255]));
    assert_eq!(rendered.get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
}
