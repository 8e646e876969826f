//! Constants and runtime configuration defaults

/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

/// Default grid width in cells
pub const DEFAULT_WIDTH: usize = 32;

/// Default grid height in cells
pub const DEFAULT_HEIGHT: usize = 18;

/// Name of the tile-set configuration file inside a tile directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Prefix for generated output files when no explicit path is given
pub const OUTPUT_PREFIX: &str = "generated";

/// Transform op strings applied when expanding a tile directory
///
/// `R` is one counter-clockwise rotation, `F` flips both axes; compound
/// strings apply left to right.
pub const VARIANT_OPS: [&str; 7] = ["R", "RR", "RRR", "F", "FR", "FRR", "FRRR"];
