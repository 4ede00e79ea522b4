//! MapLibre style output

/// Style layer, paint and document types
pub mod layer;
/// Render type heuristic for vector layers
pub mod mapper;
