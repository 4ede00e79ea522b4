//! Inspection-to-style pipeline with injectable process and output access

use crate::inspection::report::{Inspection, InspectionResult, parse_response};
use crate::io::configuration::{DEFAULT_INPUT, DEFAULT_OUTPUT, DEFAULT_SOURCE_ID, DEFAULT_TOOL};
use crate::io::error::Result;
use crate::io::invoker::{Invoker, into_stdout};
use crate::io::writer::{OutputWriter, render_json, write_summary};
use crate::style::layer::{StyleDocument, StyleLayer};
use crate::style::mapper::map_layers;
use std::io::Write;
use std::path::{Path, PathBuf};

/// What to inspect and where to put the result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Inspection utility to run
    pub tool: String,
    /// Tile archive passed to the utility
    pub input: String,
    /// Destination of the style output
    pub output: PathBuf,
    /// Source id referenced by generated layers
    pub source_id: String,
    /// Emit a full style document instead of a bare layer list
    pub full_style: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            tool: DEFAULT_TOOL.to_string(),
            input: DEFAULT_INPUT.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            source_id: DEFAULT_SOURCE_ID.to_string(),
            full_style: false,
        }
    }
}

/// Values produced by a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct RunReport {
    /// Parsed inspection report
    pub inspection: InspectionResult,
    /// Generated style layers, as written
    pub layers: Vec<StyleLayer>,
}

/// Runs invoke → parse → map → write once per call to [`Pipeline::run`]
pub struct Pipeline<I: Invoker, W: OutputWriter> {
    invoker: I,
    writer: W,
    config: PipelineConfig,
}

impl<I: Invoker, W: OutputWriter> Pipeline<I, W> {
    /// Create a pipeline from its collaborators
    pub const fn new(invoker: I, writer: W, config: PipelineConfig) -> Self {
        Self {
            invoker,
            writer,
            config,
        }
    }

    /// Active configuration
    pub const fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Process invoker
    pub const fn invoker(&self) -> &I {
        &self.invoker
    }

    /// Output writer, e.g. to inspect what a fake captured
    pub const fn writer(&self) -> &W {
        &self.writer
    }

    /// Run the inspection utility and parse what it printed
    ///
    /// # Errors
    ///
    /// Returns a process error if the utility can't be started, exits
    /// unsuccessfully or writes to standard error. Parse failures are not
    /// errors here; they come back as [`Inspection::Failed`].
    pub fn inspect(&self) -> Result<Inspection> {
        let tool = self.config.tool.as_str();
        let output = self.invoker.invoke(tool, &[self.config.input.as_str()])?;
        let stdout = into_stdout(tool, output)?;
        log::debug!("Read {} bytes of report from {tool}", stdout.len());
        Ok(parse_response(&stdout))
    }

    /// Encode `layers` in the configured output shape
    ///
    /// # Errors
    ///
    /// Returns a serialization error if encoding fails
    pub fn render(&self, layers: &[StyleLayer]) -> Result<String> {
        if self.config.full_style {
            let document = StyleDocument::new(
                &self.style_name(),
                &self.config.source_id,
                &self.config.input,
                layers.to_vec(),
            );
            render_json(&document)
        } else {
            render_json(layers)
        }
    }

    /// Execute every stage once, printing the summary to `console`
    ///
    /// # Errors
    ///
    /// Returns the first error from any stage. A report that fails to parse
    /// aborts the run before anything is written.
    pub fn run<C: Write>(&mut self, console: &mut C) -> Result<RunReport> {
        let inspection = self.inspect()?.into_result()?;
        log::info!(
            "Inspected {}: {} vector layers, max zoom {}",
            self.config.input,
            inspection.vector_layers.len(),
            inspection.max_zoom
        );

        let layers = map_layers(&inspection.vector_layers, &self.config.source_id);
        let contents = self.render(&layers)?;

        write_summary(console, &layers)?;
        self.writer.write(&self.config.output, &contents)?;

        Ok(RunReport { inspection, layers })
    }

    fn style_name(&self) -> String {
        Path::new(&self.config.input)
            .file_stem()
            .map_or_else(|| self.config.input.clone(), |stem| stem.to_string_lossy().into_owned())
    }
}
