//! Command-line interface for generating style layers from a tile archive

use crate::io::configuration::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_SOURCE_ID, DEFAULT_TOOL};
use crate::io::error::Result;
use crate::io::invoker::SystemInvoker;
use crate::io::writer::FileWriter;
use crate::pipeline::{Pipeline, PipelineConfig, RunReport};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tilestyle")]
#[command(
    author,
    version,
    about = "Derive MapLibre style layers from a tile archive inspection report"
)]
/// Command-line arguments for the style generator
pub struct Cli {
    /// Tile archive to inspect
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT)]
    pub input: String,

    /// Inspection utility that prints the archive report
    #[arg(long, value_name = "PROGRAM", default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// File the style output is written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Source id referenced by every generated layer
    #[arg(short, long, default_value = DEFAULT_SOURCE_ID)]
    pub source: String,

    /// Write a complete style document instead of a bare layer list
    #[arg(short, long)]
    pub full_style: bool,

    /// Suppress the layer summary
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if the layer summary should be printed
    pub const fn should_show_summary(&self) -> bool {
        !self.quiet
    }

    /// Pipeline settings described by these arguments
    pub fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            tool: self.tool.clone(),
            input: self.input.clone(),
            output: self.output.clone(),
            source_id: self.source.clone(),
            full_style: self.full_style,
        }
    }
}

/// Runs the pipeline against the real process table and filesystem
pub struct StyleProcessor {
    cli: Cli,
}

impl StyleProcessor {
    /// Create a new processor with the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Inspect the archive and write its style layers
    ///
    /// # Errors
    ///
    /// Returns an error if the inspection utility fails, its report can't be
    /// parsed, or the output can't be written
    pub fn process(&self) -> Result<RunReport> {
        let mut pipeline = Pipeline::new(SystemInvoker, FileWriter, self.cli.pipeline_config());

        if self.cli.should_show_summary() {
            pipeline.run(&mut std::io::stdout().lock())
        } else {
            pipeline.run(&mut std::io::sink())
        }
    }
}
