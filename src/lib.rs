//! Style layer generation for vector tile archives
//!
//! Runs an archive inspection utility, parses its report into an
//! [`inspection::report::InspectionResult`], and derives MapLibre style layers
//! from the field names of each declared vector layer.

#![forbid(unsafe_code)]

/// Report normalization, parsing and field extraction
pub mod inspection;
/// Command line, configuration, errors, process invocation and output
pub mod io;
/// Stage wiring with injectable process and output access
pub mod pipeline;
/// Style layer types and the layer classification heuristic
pub mod style;

pub use io::error::{Result, StyleError};
