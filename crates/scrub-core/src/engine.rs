//! Pattern-driven redaction engine

use regex::{Captures, Regex};

use crate::generator::{FALLBACK_PLACEHOLDER, GeneratorRegistry};
use crate::patterns::PatternSet;

/// Applies a pattern set to input text, replacing every match with a
/// freshly generated synthetic value for the matched category.
///
/// Holds one [`PatternSet`] and one [`GeneratorRegistry`] and nothing
/// else; calls to [`redact`](Redactor::redact) share no state.
pub struct Redactor {
    patterns: PatternSet,
    generators: GeneratorRegistry,
}

impl Redactor {
    pub fn new(patterns: PatternSet, generators: GeneratorRegistry) -> Self {
        Self {
            patterns,
            generators,
        }
    }

    /// Redactor with the built-in patterns and generators.
    pub fn with_defaults() -> Self {
        Self::new(PatternSet::defaults(), GeneratorRegistry::new())
    }

    /// Replace every match of every configured category in `text`.
    ///
    /// Categories run in insertion order. Each pass scans the text as
    /// already modified by earlier passes, with leftmost non-overlapping
    /// match semantics, and every match gets an independently generated
    /// value — repeated occurrences of the same original value diverge.
    ///
    /// Known interaction: a later category can match synthetic text
    /// inserted by an earlier one (a generated name may contain a token
    /// the address rule picks up). Earlier categories are never re-run,
    /// so their own output is left alone. This mirrors sequential
    /// re-scanning in the wild and is intentional; as a consequence,
    /// `redact` is not idempotent.
    ///
    /// A generator failure is contained to its match: that occurrence
    /// becomes [`FALLBACK_PLACEHOLDER`] and the pass continues.
    pub fn redact(&self, text: &str) -> String {
        let mut redacted = text.to_string();

        for (category, pattern) in self.patterns.iter() {
            redacted = self.redact_category(category, pattern, &redacted);
        }

        redacted
    }

    fn redact_category(&self, category: &str, pattern: &Regex, text: &str) -> String {
        pattern
            .replace_all(text, |_: &Captures<'_>| self.replacement(category))
            .into_owned()
    }

    fn replacement(&self, category: &str) -> String {
        match self.generators.generate(category) {
            Ok(value) => value,
            Err(error) => {
                tracing::error!(
                    category,
                    %error,
                    "synthetic value generation failed, substituting placeholder"
                );
                FALLBACK_PLACEHOLDER.to_string()
            }
        }
    }
}
