//! Synthetic replacement values, keyed by category label

use std::collections::HashMap;

use fake::Fake;
use fake::faker::address::en::{
    BuildingNumber, CityName, StateAbbr, StreetName, StreetSuffix, ZipCode,
};
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;

/// Substituted for a match when its generator fails.
pub const FALLBACK_PLACEHOLDER: &str = "[REDACTED]";

type Generator = Box<dyn Fn() -> anyhow::Result<String> + Send + Sync>;

/// Registry mapping category labels to synthetic value generators.
///
/// Each generator is a zero-argument closure producing one fresh value
/// per invocation. Values are not deterministic and carry no uniqueness
/// guarantee across calls.
pub struct GeneratorRegistry {
    generators: HashMap<String, Generator>,
}

impl GeneratorRegistry {
    /// Registry with generators for the built-in categories: `name`,
    /// `address` and `phone_number`.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register("name", || Ok(Name().fake()));
        registry.register("address", || {
            Ok(format!(
                "{} {} {}, {}, {} {}",
                BuildingNumber().fake::<String>(),
                StreetName().fake::<String>(),
                StreetSuffix().fake::<String>(),
                CityName().fake::<String>(),
                StateAbbr().fake::<String>(),
                ZipCode().fake::<String>(),
            ))
        });
        registry.register("phone_number", || Ok(PhoneNumber().fake()));

        registry
    }

    /// Registry with no generators at all.
    pub fn empty() -> Self {
        Self {
            generators: HashMap::new(),
        }
    }

    /// Register (or replace) the generator for a category.
    pub fn register<F>(&mut self, category: &str, generator: F)
    where
        F: Fn() -> anyhow::Result<String> + Send + Sync + 'static,
    {
        self.generators
            .insert(category.to_string(), Box::new(generator));
    }

    /// Produce a synthetic value for `category`.
    ///
    /// A category without a registered generator yields `Ok("")` — the
    /// match is removed rather than replaced. This is distinct from the
    /// [`FALLBACK_PLACEHOLDER`] the engine substitutes when a registered
    /// generator returns an error.
    pub fn generate(&self, category: &str) -> anyhow::Result<String> {
        match self.generators.get(category) {
            Some(generator) => generator(),
            None => {
                tracing::warn!(
                    category,
                    "no replacement defined for category, substituting empty string"
                );
                Ok(String::new())
            }
        }
    }
}

impl Default for GeneratorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_categories_produce_values() {
        let registry = GeneratorRegistry::new();

        for category in ["name", "address", "phone_number"] {
            let value = registry.generate(category).unwrap();
            assert!(!value.is_empty(), "expected a value for {category}");
        }
    }

    #[test]
    fn test_unknown_category_yields_empty_string() {
        let registry = GeneratorRegistry::new();
        assert_eq!(registry.generate("email").unwrap(), "");
    }

    #[test]
    fn test_registered_generator_overrides_builtin() {
        let mut registry = GeneratorRegistry::new();
        registry.register("name", || Ok("Anon".to_string()));

        assert_eq!(registry.generate("name").unwrap(), "Anon");
    }

    #[test]
    fn test_generator_error_propagates_to_caller() {
        let mut registry = GeneratorRegistry::empty();
        registry.register("flaky", || anyhow::bail!("out of entropy"));

        assert!(registry.generate("flaky").is_err());
    }
}
