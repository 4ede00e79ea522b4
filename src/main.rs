//! CLI entry point for the tile archive style generator

use clap::Parser;
use tilestyle::io::cli::{Cli, StyleProcessor};

fn main() -> tilestyle::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();
    let processor = StyleProcessor::new(cli);
    processor.process().map(|_| ())
}
