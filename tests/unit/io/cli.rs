//! Tests for command-line interface parsing and processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use std::path::PathBuf;
    use tilestyle::StyleError;
    use tilestyle::io::cli::{Cli, StyleProcessor};
    use tilestyle::io::configuration::{DEFAULT_INPUT, DEFAULT_SOURCE_ID, DEFAULT_TOOL};
    use tilestyle::pipeline::PipelineConfig;

    // Tests running without arguments reproduces the fixed command
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["program"]);

        assert_eq!(cli.input, DEFAULT_INPUT);
        assert_eq!(cli.tool, DEFAULT_TOOL);
        assert_eq!(cli.output, PathBuf::from("layers.json"));
        assert_eq!(cli.source, DEFAULT_SOURCE_ID);
        assert!(!cli.full_style);
        assert!(!cli.quiet);
        assert_eq!(cli.pipeline_config(), PipelineConfig::default());
    }

    // Tests CLI parsing with all available arguments
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "program",
            "hanoi.pmtiles",
            "--tool",
            "/opt/bin/pmtilesinfo",
            "--output",
            "style.json",
            "--source",
            "hanoi",
            "--full-style",
            "--quiet",
        ]);

        let config = cli.pipeline_config();
        assert_eq!(config.input, "hanoi.pmtiles");
        assert_eq!(config.tool, "/opt/bin/pmtilesinfo");
        assert_eq!(config.output, PathBuf::from("style.json"));
        assert_eq!(config.source_id, "hanoi");
        assert!(config.full_style);
        assert!(!cli.should_show_summary());
    }

    // Tests short flag parsing (-o, -s, -f, -q)
    // Verified by changing short flag definitions
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from(["program", "-o", "out.json", "-s", "tiles", "-f", "-q"]);

        assert_eq!(cli.output, PathBuf::from("out.json"));
        assert_eq!(cli.source, "tiles");
        assert!(cli.full_style);
        assert!(cli.quiet);
    }

    // Tests a missing inspection utility aborts processing
    // Verified by swallowing spawn errors
    #[test]
    fn test_process_missing_tool() {
        let cli = Cli::parse_from([
            "program",
            "--tool",
            "tilestyle-definitely-not-installed",
            "--quiet",
        ]);

        let result = StyleProcessor::new(cli).process();
        assert!(matches!(result, Err(StyleError::ProcessSpawn { .. })));
    }

    // Tests a real run writes the layer list to the requested path
    #[cfg(unix)]
    #[test]
    fn test_process_writes_output() {
        use std::fs;
        use tempfile::TempDir;

        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("layers.json");
        let cli = Cli::parse_from([
            "program",
            r#"{"vector_layers":[{"id":"roads","fields":{"kind":"String"}}]}"#,
            "--tool",
            "echo",
            "--output",
            output.to_str().unwrap(),
            "--quiet",
        ]);

        let report = StyleProcessor::new(cli).process().unwrap();
        assert_eq!(report.layers.len(), 1);

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written[0]["id"], "roads_layer");
        assert_eq!(written[0]["type"], "line");
    }
}
