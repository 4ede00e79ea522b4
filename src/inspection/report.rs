//! Structured inspection records and the report parser

use crate::inspection::extract::{
    count_or_zero, entries, items, number_or_zero, text_or_sentinel, zoom,
};
use crate::inspection::normalize::{check_shape, normalize_literals};
use crate::io::configuration::{E7_SCALE, NOT_AVAILABLE, PARSE_FAILURE_MESSAGE};
use crate::io::error::{Result, StyleError};
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Map position the archive suggests opening at
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Center {
    /// Latitude in degrees
    pub lat: f64,
    /// Longitude in degrees
    pub lon: f64,
    /// Zoom level
    pub zoom: u8,
}

/// Highest zoom level stored in the archive, when known
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaxZoom {
    /// Reported zoom level
    Level(u8),
    /// Missing, zero or not a zoom level
    NotAvailable,
}

impl fmt::Display for MaxZoom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Level(level) => write!(f, "{level}"),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

impl Serialize for MaxZoom {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Self::Level(level) => serializer.serialize_u8(*level),
            Self::NotAvailable => serializer.serialize_str(NOT_AVAILABLE),
        }
    }
}

/// Location of the metadata section inside the archive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetadataSpan {
    /// Section length in bytes
    pub length: u64,
    /// Section offset in bytes
    pub offset: u64,
}

/// Tile section statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TileDataSpan {
    /// Number of distinct tile contents
    pub count: u64,
    /// Number of directory entries
    pub entries_count: u64,
    /// Section length in bytes
    pub data_length: u64,
    /// Section offset in bytes
    pub data_offset: u64,
}

/// One named layer of vector geometry declared by the archive
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VectorLayer {
    /// Layer name
    pub id: String,
    /// Lowest zoom the layer appears at
    pub minzoom: u8,
    /// Highest zoom the layer appears at
    pub maxzoom: u8,
    /// Attribute names mapped to their type descriptors
    pub fields: BTreeMap<String, Value>,
}

impl VectorLayer {
    /// Read a layer entry, substituting defaults for falsy values
    pub fn from_value(layer: &Value) -> Self {
        Self {
            id: text_or_sentinel(layer, "id"),
            minzoom: zoom(layer, "minzoom").unwrap_or(0),
            maxzoom: zoom(layer, "maxzoom").unwrap_or(0),
            fields: entries(layer, "fields"),
        }
    }

    /// Whether the layer declares any of `names` as an attribute
    pub fn has_any_field(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.fields.contains_key(*name))
    }
}

/// Everything extracted from one inspection report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionResult {
    /// Number of addressed tiles
    pub addressed_tiles_count: u64,
    /// Suggested initial view
    pub center: Center,
    /// Internal compression identifier
    pub compression: String,
    /// Highest stored zoom level
    pub max_zoom: MaxZoom,
    /// Metadata section location
    pub metadata: MetadataSpan,
    /// Tile section statistics
    pub tile_data: TileDataSpan,
    /// Declared vector layers in report order
    pub vector_layers: Vec<VectorLayer>,
}

impl InspectionResult {
    /// Extract a result from decoded report data
    ///
    /// Never fails: anything missing, falsy or of the wrong kind takes its
    /// default, so `{}` and `[]` both yield an all-default result.
    pub fn from_value(data: &Value) -> Self {
        Self {
            addressed_tiles_count: count_or_zero(data, "addressed_tiles_count"),
            center: Center {
                lat: number_or_zero(data, "center_lat_e7") / E7_SCALE,
                lon: number_or_zero(data, "center_lon_e7") / E7_SCALE,
                zoom: zoom(data, "center_zoom").unwrap_or(0),
            },
            compression: text_or_sentinel(data, "internal_compression"),
            max_zoom: zoom(data, "max_zoom").map_or(MaxZoom::NotAvailable, MaxZoom::Level),
            metadata: MetadataSpan {
                length: count_or_zero(data, "metadata_length"),
                offset: count_or_zero(data, "metadata_offset"),
            },
            tile_data: TileDataSpan {
                count: count_or_zero(data, "tile_contents_count"),
                entries_count: count_or_zero(data, "tile_entries_count"),
                data_length: count_or_zero(data, "tile_data_length"),
                data_offset: count_or_zero(data, "tile_data_offset"),
            },
            vector_layers: items(data, "vector_layers")
                .iter()
                .map(VectorLayer::from_value)
                .collect(),
        }
    }
}

/// Outcome of parsing a report
///
/// A failed parse serializes as the error marker record
/// `{"error": "Failed to parse response data."}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Inspection {
    /// The report decoded into a result
    Parsed(InspectionResult),
    /// The report could not be decoded
    Failed {
        /// Error marker message
        error: String,
    },
}

impl Inspection {
    /// The error marker record
    pub fn failed() -> Self {
        Self::Failed {
            error: PARSE_FAILURE_MESSAGE.to_string(),
        }
    }

    /// Whether this is the error marker
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// Convert into a pipeline result, turning the marker into an error
    ///
    /// # Errors
    ///
    /// Returns [`StyleError::Inspection`] for the error marker
    pub fn into_result(self) -> Result<InspectionResult> {
        match self {
            Self::Parsed(result) => Ok(result),
            Self::Failed { error } => Err(StyleError::Inspection { message: error }),
        }
    }
}

/// Parse raw inspection output into an [`Inspection`]
///
/// Failures are logged together with the raw text and reported as
/// [`Inspection::Failed`]; this function never returns an error.
pub fn parse_response(response: &str) -> Inspection {
    match decode_report(response) {
        Ok(result) => Inspection::Parsed(result),
        Err(error) => {
            log::error!("Error parsing response: {error}");
            log::error!("Raw response for debugging: {response}");
            Inspection::failed()
        }
    }
}

fn decode_report(response: &str) -> Result<InspectionResult> {
    check_shape(response)?;
    let data: Value = serde_json::from_str(&normalize_literals(response))?;
    Ok(InspectionResult::from_value(&data))
}
