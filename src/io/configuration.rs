//! Fixed command, output and styling defaults

// Inspection command
/// Inspection utility invoked when no `--tool` is given
pub const DEFAULT_TOOL: &str = "pmtilesinfo";
/// Tile archive handed to the inspection utility
pub const DEFAULT_INPUT: &str = "vietnam.pmtiles";

// Output settings
/// Destination of the generated layer list (overwritten each run)
pub const DEFAULT_OUTPUT: &str = "layers.json";
/// Placeholder source id referenced by every generated layer
pub const DEFAULT_SOURCE_ID: &str = "example_source";
/// Suffix appended to a vector layer id to form its style layer id
pub const LAYER_ID_SUFFIX: &str = "_layer";
/// URL scheme used for the vector source of a full style document
pub const PMTILES_URL_SCHEME: &str = "pmtiles://";
/// MapLibre style specification version written into full style documents
pub const STYLE_VERSION: u8 = 8;

// Paint defaults shared by every render type
/// Neutral gray used for lines, fills and labels
pub const DEFAULT_COLOR: &str = "#888888";
/// Stroke width of line layers in pixels
pub const DEFAULT_LINE_WIDTH: u32 = 2;
/// Opacity of fill layers
pub const DEFAULT_FILL_OPACITY: f64 = 0.5;

// Report extraction
/// Substituted for string fields that are missing or empty
pub const NOT_AVAILABLE: &str = "N/A";
/// Center coordinates are reported as fixed point with seven decimals
pub const E7_SCALE: f64 = 1e7;
/// Message carried by the error marker record when a report can't be parsed
pub const PARSE_FAILURE_MESSAGE: &str = "Failed to parse response data.";
