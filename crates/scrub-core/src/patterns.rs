//! Pattern sets: named matching rules applied during redaction

use regex::Regex;

use crate::error::{Error, Result};

// Built-in rules, in pass order. Deliberately simple: two capitalized
// words for a name, "123 Main St(reet)" for an address, US-style phone
// numbers with optional area code and separators.
const DEFAULT_RULES: &[(&str, &str)] = &[
    ("name", r"([A-Z][a-z]+) ([A-Z][a-z]+)"),
    ("address", r"\d+ [A-Za-z]+ St(?:reet)?"),
    ("phone_number", r"\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}"),
];

/// Ordered set of `category → compiled rule` pairs.
///
/// Categories keep their insertion order so redaction passes run in a
/// stable, reproducible order for a given set. A set is built once (from
/// the defaults or from config) and is immutable afterwards.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<(String, Regex)>,
}

impl PatternSet {
    /// The built-in set: `name`, `address` and `phone_number`.
    pub fn defaults() -> Self {
        let patterns = DEFAULT_RULES
            .iter()
            .map(|(category, rule)| (category.to_string(), Regex::new(rule).unwrap()))
            .collect();

        Self { patterns }
    }

    /// Compile raw `(category, rule)` pairs into a pattern set.
    ///
    /// The result entirely replaces the defaults — categories are never
    /// merged. Labels must be non-empty and unique; every rule must be a
    /// valid regex.
    pub fn from_rules<I, S>(rules: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut patterns: Vec<(String, Regex)> = Vec::new();

        for (category, rule) in rules {
            let category = category.into();
            let rule = rule.into();

            if category.is_empty() {
                return Err(Error::ConfigFormat(
                    "category label must not be empty".to_string(),
                ));
            }
            if patterns.iter().any(|(existing, _)| *existing == category) {
                return Err(Error::ConfigFormat(format!(
                    "duplicate category `{category}`"
                )));
            }

            let regex = Regex::new(&rule).map_err(|source| Error::PatternCompile {
                category: category.clone(),
                source,
            })?;
            patterns.push((category, regex));
        }

        Ok(Self { patterns })
    }

    /// Categories and rules in pass order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Regex)> {
        self.patterns
            .iter()
            .map(|(category, regex)| (category.as_str(), regex))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
