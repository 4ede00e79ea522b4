//! Style output: JSON encoding, file persistence and console summary

use crate::io::error::{Result, StyleError, write_error};
use crate::style::layer::StyleLayer;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

/// Destination for rendered style output
pub trait OutputWriter {
    /// Replace the contents of `path` with `contents`
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Write`] if the destination cannot be written
    fn write(&mut self, path: &Path, contents: &str) -> Result<()>;
}

/// Writes output straight to the filesystem
///
/// Existing files are truncated. The write is not atomic.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileWriter;

impl OutputWriter for FileWriter {
    fn write(&mut self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(|source| write_error(path, source))?;
        log::info!("Wrote {} bytes to {}", contents.len(), path.display());
        Ok(())
    }
}

/// Encode `value` as JSON indented by two spaces
///
/// # Errors
///
/// Returns [`StyleError::Serialize`] if encoding fails
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|source| StyleError::Serialize { source })
}

/// Print a human-readable listing of `layers`
///
/// # Errors
///
/// Returns [`StyleError::Write`] if the console rejects the output
pub fn write_summary<C: Write>(console: &mut C, layers: &[StyleLayer]) -> Result<()> {
    let print = |console: &mut C| -> std::io::Result<()> {
        writeln!(console, "MapLibre Layers: {}", layers.len())?;
        let width = layers.iter().map(|layer| layer.id.len()).max().unwrap_or(0);
        for layer in layers {
            writeln!(
                console,
                "  {:<width$}  {} (source-layer '{}')",
                layer.id, layer.paint, layer.source_layer
            )?;
        }
        console.flush()
    };

    print(console).map_err(|source| write_error("<console>", source))
}
