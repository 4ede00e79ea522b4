//! Tests for fixed defaults and styling constants

#[cfg(test)]
mod tests {
    use tilestyle::io::configuration::{
        DEFAULT_COLOR, DEFAULT_FILL_OPACITY, DEFAULT_INPUT, DEFAULT_LINE_WIDTH, DEFAULT_OUTPUT,
        DEFAULT_SOURCE_ID, DEFAULT_TOOL, E7_SCALE, LAYER_ID_SUFFIX, NOT_AVAILABLE,
        PARSE_FAILURE_MESSAGE, STYLE_VERSION,
    };

    // Tests the default command matches the inspection utility invocation
    // Verified by changing the tool name
    #[test]
    fn test_default_command() {
        assert_eq!(DEFAULT_TOOL, "pmtilesinfo");
        assert_eq!(DEFAULT_INPUT, "vietnam.pmtiles");
        assert_eq!(DEFAULT_OUTPUT, "layers.json");
    }

    // Tests generated ids and sources
    #[test]
    fn test_layer_naming() {
        assert_eq!(DEFAULT_SOURCE_ID, "example_source");
        assert!(LAYER_ID_SUFFIX.starts_with('_'));
    }

    // Tests paint defaults stay within valid ranges
    // Verified by setting opacity above one
    #[test]
    fn test_paint_defaults() {
        assert_eq!(DEFAULT_COLOR, "#888888");
        assert_eq!(DEFAULT_LINE_WIDTH, 2);
        assert!(DEFAULT_FILL_OPACITY > 0.0 && DEFAULT_FILL_OPACITY <= 1.0);
    }

    #[test]
    fn test_report_constants() {
        assert_eq!(NOT_AVAILABLE, "N/A");
        assert!((E7_SCALE - 10_000_000.0).abs() < f64::EPSILON);
        assert!(PARSE_FAILURE_MESSAGE.ends_with('.'));
        assert_eq!(STYLE_VERSION, 8);
    }
}
