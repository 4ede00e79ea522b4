//! Tests for report shape checks and Python literal rewriting

#[cfg(test)]
mod tests {
    use tilestyle::StyleError;
    use tilestyle::inspection::normalize::{check_shape, normalize_literals};

    // Tests objects and arrays pass the shape check, including surrounding whitespace
    // Verified by dropping the array branch
    #[test]
    fn test_check_shape_accepts_objects_and_arrays() {
        assert!(check_shape("{}").is_ok());
        assert!(check_shape("[1, 2]").is_ok());
        assert!(check_shape("\n  \t{\"a\": 1}\n").is_ok());
    }

    // Tests anything else is a format error
    // Verified by removing the trim before the prefix check
    #[test]
    fn test_check_shape_rejects_other_text() {
        for text in ["", "   ", "Error: no such file", "null", "42", "\"{\""] {
            let result = check_shape(text);
            assert!(
                matches!(result, Err(StyleError::Format { .. })),
                "expected format error for {text:?}"
            );
        }
    }

    // Tests standalone literals are rewritten
    #[test]
    fn test_normalize_standalone_literals() {
        let text = "{'clustered': True, 'leaf': False, 'etag': None}";
        assert_eq!(
            normalize_literals(text),
            "{'clustered': true, 'leaf': false, 'etag': null}"
        );
    }

    // Tests literals embedded in longer identifiers survive
    // Verified by replacing substrings without word boundaries
    #[test]
    fn test_normalize_respects_word_boundaries() {
        let text = r#"{"a": "Nonetheless", "b": "TrueType", "c": "is_None", "d": "False2"}"#;
        assert_eq!(normalize_literals(text), text);
    }

    // Tests punctuation and line breaks count as boundaries
    #[test]
    fn test_normalize_adjacent_punctuation() {
        assert_eq!(normalize_literals("[True,False,None]"), "[true,false,null]");
        assert_eq!(normalize_literals("{\"x\":\nNone\n}"), "{\"x\":\nnull\n}");
    }

    // Tests rewriting is lexical and also reaches inside strings
    #[test]
    fn test_normalize_rewrites_inside_strings() {
        assert_eq!(
            normalize_literals(r#"{"label": "None"}"#),
            r#"{"label": "null"}"#
        );
    }

    // Tests non-ASCII text is carried through unchanged
    // Verified by slicing on char counts instead of byte offsets
    #[test]
    fn test_normalize_preserves_unicode() {
        let text = r#"{"name": "Hà Nội", "flag": True}"#;
        assert_eq!(
            normalize_literals(text),
            r#"{"name": "Hà Nội", "flag": true}"#
        );
    }

    // Tests letters outside ASCII still join a word, so no boundary falls between them
    #[test]
    fn test_normalize_unicode_word_boundaries() {
        assert_eq!(normalize_literals("[ÉNone, None]"), "[ÉNone, null]");
    }

    #[test]
    fn test_normalize_is_stable() {
        let once = normalize_literals("{\"a\": True, \"b\": [None, False]}");
        assert_eq!(normalize_literals(&once), once);
    }
}
