//! Shape check and literal normalization of raw inspection reports
//!
//! The inspection utility prints Python literals, so `True`, `False` and
//! `None` have to become `true`, `false` and `null` before the text decodes
//! as JSON.

use crate::io::error::{Result, format_error};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Python literal spellings and their JSON equivalents
const LITERALS: [(&str, &str); 3] = [("True", "true"), ("False", "false"), ("None", "null")];

/// Whole-word occurrences of any Python literal
static LITERAL_WORDS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b(?:True|False|None)\b").ok());

/// Reject text that can't possibly be a JSON object or array
///
/// # Errors
///
/// Returns a format error unless the trimmed text starts with `{` or `[`
pub fn check_shape(text: &str) -> Result<()> {
    let trimmed = text.trim();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        Ok(())
    } else {
        Err(format_error(
            &"Response does not start with a valid JSON structure",
        ))
    }
}

/// Replace whole-word Python literals with their JSON spelling
///
/// Word boundaries follow the regex `\b`, so `Nonetheless` or `is_True` pass
/// through untouched. The substitution is lexical and also rewrites matching
/// words inside string literals.
pub fn normalize_literals(text: &str) -> String {
    LITERAL_WORDS.as_ref().map_or_else(
        || text.to_string(),
        |pattern| {
            pattern
                .replace_all(text, |caps: &Captures<'_>| {
                    caps.get(0)
                        .and_then(|word| json_literal(word.as_str()))
                        .unwrap_or_default()
                })
                .into_owned()
        },
    )
}

fn json_literal(word: &str) -> Option<&'static str> {
    LITERALS
        .iter()
        .find(|(python, _)| *python == word)
        .map(|(_, json)| *json)
}

