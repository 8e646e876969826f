//! Command-line interface for tile map generation and tile-set preprocessing

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::algorithm::solver::generate;
use crate::io::configuration::{DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_WIDTH, OUTPUT_PREFIX};
use crate::io::error::Result;
use crate::io::image::{export_grid_png, load_tile_images};
use crate::io::progress::BatchProgress;
use crate::io::tileset::load_tileset;
use crate::io::transform::expand_tile_directory;
use crate::spatial::tiles::MatchRule;

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate tile maps with wave function collapse"
)]
/// Command-line arguments for the tile map generation tool
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

/// Top-level subcommands
#[derive(Subcommand)]
enum Command {
    /// Generate one or more tile maps from a tile directory
    Generate(GenerateArgs),

    /// Expand a tile directory with rotated and mirrored tile variants
    Process {
        /// Tile directory containing config.json and tile images
        #[arg(value_name = "DIR")]
        dir: PathBuf,
    },
}

/// Arguments for the `generate` subcommand
#[derive(Args)]
pub struct GenerateArgs {
    /// Tile directory containing config.json and tile images
    #[arg(value_name = "DIR")]
    dir: PathBuf,

    /// Grid width in cells
    #[arg(short, long, default_value_t = DEFAULT_WIDTH)]
    width: usize,

    /// Grid height in cells
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    height: usize,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    seed: u64,

    /// Number of maps to generate with consecutive seeds
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Output PNG path (numbered per run when --count > 1)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Compare edges against the reverse of the facing edge
    #[arg(long)]
    reversed_edges: bool,

    /// Suppress progress output
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    /// Dispatch the parsed command
    ///
    /// # Errors
    ///
    /// Propagates tile-set loading, generation, and export failures.
    pub fn run(self) -> Result<()> {
        match self.command {
            Command::Generate(args) => run_generate(&args),
            Command::Process { dir } => {
                let total = expand_tile_directory(&dir)?;
                // Allow print for user feedback on the expansion result
                #[allow(clippy::print_stderr)]
                {
                    eprintln!("Tile directory now holds {total} tiles");
                }
                Ok(())
            }
        }
    }
}

fn run_generate(args: &GenerateArgs) -> Result<()> {
    let rule = if args.reversed_edges {
        MatchRule::Reversed
    } else {
        MatchRule::Exact
    };

    let loaded = load_tileset(&args.dir, rule)?;
    let images = load_tile_images(&loaded.image_paths)?;

    let progress = (!args.quiet && args.count > 1).then(|| BatchProgress::new(args.count));

    for run in 0..args.count {
        let seed = args.seed.wrapping_add(run as u64);

        if let Some(ref bar) = progress {
            bar.start_run(seed);
        }

        let ids = generate(&loaded.tileset, args.width, args.height, seed)?;
        export_grid_png(&ids, &images, &output_path(args, seed, run))?;

        if let Some(ref bar) = progress {
            bar.complete_run();
        }
    }

    if let Some(ref bar) = progress {
        bar.finish();
    }

    Ok(())
}

fn output_path(args: &GenerateArgs, seed: u64, run: usize) -> PathBuf {
    match (&args.output, args.count) {
        (Some(path), 1) => path.clone(),
        (Some(path), _) => {
            let stem = path
                .file_stem()
                .map_or_else(|| OUTPUT_PREFIX.to_string(), |s| {
                    s.to_string_lossy().to_string()
                });
            let numbered = format!("{stem}_{run}.png");
            path.parent()
                .map_or_else(|| PathBuf::from(&numbered), |parent| parent.join(&numbered))
        }
        (None, _) => args.dir.join(format!("{OUTPUT_PREFIX}_{seed}.png")),
    }
}
