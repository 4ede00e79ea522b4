//! Heuristic render type assignment for vector layers

use crate::inspection::report::VectorLayer;
use crate::io::configuration::LAYER_ID_SUFFIX;
use crate::style::layer::{FillPaint, LayerPaint, LinePaint, StyleLayer, SymbolPaint};

/// Attributes typical of roads and other linear features
const LINE_FIELDS: [&str; 2] = ["kind", "sort_rank"];
/// Attributes typical of buildings
const FILL_FIELDS: [&str; 2] = ["height", "min_height"];
/// Attributes typical of labelled places
const SYMBOL_FIELDS: [&str; 2] = ["name", "population"];

/// Pick a render type from the layer's attribute names
///
/// Rules are checked in order and the first match wins, so a layer with both
/// `kind` and `height` is drawn as a line. Layers matching nothing are
/// filled.
pub fn classify(layer: &VectorLayer) -> LayerPaint {
    if layer.has_any_field(&LINE_FIELDS) {
        LayerPaint::Line(LinePaint::default())
    } else if layer.has_any_field(&FILL_FIELDS) {
        LayerPaint::Fill(FillPaint::default())
    } else if layer.has_any_field(&SYMBOL_FIELDS) {
        LayerPaint::Symbol(SymbolPaint::default())
    } else {
        LayerPaint::Fill(FillPaint::default())
    }
}

/// Derive the style layer for one vector layer
pub fn style_layer(layer: &VectorLayer, source: &str) -> StyleLayer {
    StyleLayer {
        id: format!("{}{LAYER_ID_SUFFIX}", layer.id),
        paint: classify(layer),
        source: source.to_string(),
        source_layer: layer.id.clone(),
    }
}

/// Derive one style layer per vector layer, preserving order
pub fn map_layers(layers: &[VectorLayer], source: &str) -> Vec<StyleLayer> {
    layers
        .iter()
        .map(|layer| style_layer(layer, source))
        .collect()
}
