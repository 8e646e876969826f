//! CLI entry point for wave function collapse tile map generation

use clap::Parser;
use wavetile::io::cli::Cli;

fn main() -> wavetile::Result<()> {
    Cli::parse().run()
}
