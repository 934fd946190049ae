//! Core redaction logic for scrub
//!
//! This crate contains:
//! - Pattern sets (category → matching rule)
//! - The redaction engine (sequential pattern passes with synthetic replacement)
//! - The synthetic value generator registry

pub mod engine;
pub mod error;
pub mod generator;
pub mod patterns;

pub use engine::Redactor;
pub use error::{Error, Result};
pub use generator::{FALLBACK_PLACEHOLDER, GeneratorRegistry};
pub use patterns::PatternSet;
