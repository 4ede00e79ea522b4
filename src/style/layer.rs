//! MapLibre style layer types
//!
//! Only the subset of the style specification the generator emits is
//! modelled. Property names use MapLibre's kebab-case spelling.

use crate::io::configuration::{
    DEFAULT_COLOR, DEFAULT_FILL_OPACITY, DEFAULT_LINE_WIDTH, PMTILES_URL_SCHEME, STYLE_VERSION,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// Paint properties of a `line` layer
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct LinePaint {
    /// Stroke colour
    #[serde(rename = "line-color")]
    pub line_color: String,
    /// Stroke width in pixels
    #[serde(rename = "line-width")]
    pub line_width: u32,
}

impl Default for LinePaint {
    fn default() -> Self {
        Self {
            line_color: DEFAULT_COLOR.to_string(),
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Paint properties of a `fill` layer
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FillPaint {
    /// Fill colour
    #[serde(rename = "fill-color")]
    pub fill_color: String,
    /// Fill opacity between 0 and 1
    #[serde(rename = "fill-opacity")]
    pub fill_opacity: f64,
}

impl Default for FillPaint {
    fn default() -> Self {
        Self {
            fill_color: DEFAULT_COLOR.to_string(),
            fill_opacity: DEFAULT_FILL_OPACITY,
        }
    }
}

/// Paint properties of a `symbol` layer
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SymbolPaint {
    /// Label colour
    #[serde(rename = "text-color")]
    pub text_color: String,
}

impl Default for SymbolPaint {
    fn default() -> Self {
        Self {
            text_color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Render type together with its paint block
///
/// Serializes as the `type` and `paint` members of the enclosing layer.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", content = "paint")]
pub enum LayerPaint {
    /// Stroked geometry
    #[serde(rename = "line")]
    Line(LinePaint),
    /// Filled polygons
    #[serde(rename = "fill")]
    Fill(FillPaint),
    /// Text labels
    #[serde(rename = "symbol")]
    Symbol(SymbolPaint),
}

impl LayerPaint {
    /// Render type name as used in the style specification
    pub const fn render_type(&self) -> &'static str {
        match self {
            Self::Line(_) => "line",
            Self::Fill(_) => "fill",
            Self::Symbol(_) => "symbol",
        }
    }
}

impl fmt::Display for LayerPaint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Line(paint) => write!(f, "line {} {}px", paint.line_color, paint.line_width),
            Self::Fill(paint) => write!(f, "fill {} @ {}", paint.fill_color, paint.fill_opacity),
            Self::Symbol(paint) => write!(f, "symbol {}", paint.text_color),
        }
    }
}

/// One rendering directive for a map client
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StyleLayer {
    /// Unique layer id
    pub id: String,
    /// Render type and paint properties
    #[serde(flatten)]
    pub paint: LayerPaint,
    /// Source the layer draws from
    pub source: String,
    /// Layer inside the source
    #[serde(rename = "source-layer")]
    pub source_layer: String,
}

/// Vector tile source of a style document
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VectorSource {
    /// TileJSON or archive URL
    pub url: String,
}

/// Data source referenced by style layers
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum Source {
    /// Vector tiles
    #[serde(rename = "vector")]
    Vector(VectorSource),
}

/// Complete style wrapping generated layers
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct StyleDocument {
    /// MapLibre style version
    pub version: u8,
    /// Human-readable style name
    pub name: String,
    /// Sources keyed by id
    pub sources: BTreeMap<String, Source>,
    /// Layers in draw order
    pub layers: Vec<StyleLayer>,
}

impl StyleDocument {
    /// Wrap `layers` in a style whose `source_id` reads the archive at `archive`
    pub fn new(name: &str, source_id: &str, archive: &str, layers: Vec<StyleLayer>) -> Self {
        let source = Source::Vector(VectorSource {
            url: format!("{PMTILES_URL_SCHEME}{archive}"),
        });

        Self {
            version: STYLE_VERSION,
            name: name.to_string(),
            sources: BTreeMap::from([(source_id.to_string(), source)]),
            layers,
        }
    }
}
