//! Pattern configuration loading
//!
//! A pattern file is a flat JSON object mapping category labels to regex
//! strings:
//!
//! ```json
//! { "email": "[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\\.[a-zA-Z]{2,}" }
//! ```
//!
//! Loaded categories entirely replace the built-in defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use scrub_core::{Error, PatternSet, Result};

/// Load a pattern set from a JSON file.
pub fn load_patterns(path: &Path) -> Result<PatternSet> {
    let raw = fs::read_to_string(path).map_err(|error| match error.kind() {
        ErrorKind::NotFound => Error::ConfigNotFound(path.to_path_buf()),
        _ => Error::Io(error),
    })?;

    parse_patterns(&raw)
}

/// Parse a pattern set from raw JSON.
///
/// Object key order is preserved, so redaction passes run in the order
/// the config lists its categories.
pub fn parse_patterns(raw: &str) -> Result<PatternSet> {
    let value: serde_json::Value = serde_json::from_str(raw)?;

    let object = value.as_object().ok_or_else(|| {
        Error::ConfigFormat(
            "pattern config must be a JSON object mapping category to rule".to_string(),
        )
    })?;

    let mut rules = Vec::with_capacity(object.len());
    for (category, rule) in object {
        let rule = rule.as_str().ok_or_else(|| {
            Error::ConfigFormat(format!("rule for category `{category}` must be a string"))
        })?;
        rules.push((category.clone(), rule.to_string()));
    }

    PatternSet::from_rules(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_config() {
        let set = parse_patterns(r#"{"email": "[a-z]+@[a-z]+\\.[a-z]{2,}", "ssn": "\\d{3}-\\d{2}-\\d{4}"}"#)
            .unwrap();

        let categories: Vec<_> = set.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, vec!["email", "ssn"]);
    }

    #[test]
    fn test_parse_preserves_config_order() {
        let set = parse_patterns(r#"{"z": "z+", "a": "a+", "m": "m+"}"#).unwrap();

        let categories: Vec<_> = set.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_top_level_array_is_a_format_error() {
        let result = parse_patterns(r#"["name", "address"]"#);
        assert!(matches!(result, Err(Error::ConfigFormat(_))));
    }

    #[test]
    fn test_non_string_rule_is_a_format_error() {
        let result = parse_patterns(r#"{"name": 42}"#);
        assert!(matches!(result, Err(Error::ConfigFormat(_))));
    }

    #[test]
    fn test_malformed_json_is_a_parse_error() {
        let result = parse_patterns(r#"{"name": "#);
        assert!(matches!(result, Err(Error::ConfigParse(_))));
    }

    #[test]
    fn test_invalid_rule_is_a_compile_error() {
        let result = parse_patterns(r#"{"name": "[unclosed"}"#);
        assert!(matches!(result, Err(Error::PatternCompile { .. })));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("no-such-patterns.json");

        let result = load_patterns(&path);
        match result {
            Err(Error::ConfigNotFound(reported)) => assert_eq!(reported, path),
            other => panic!("expected ConfigNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("patterns.json");
        std::fs::write(&path, r#"{"digits": "\\d+"}"#).unwrap();

        let set = load_patterns(&path).unwrap();
        assert_eq!(set.len(), 1);
    }
}
