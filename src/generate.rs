use std::sync::Arc;

use crate::config::GeneratorConfig;
use crate::error::{Result, SeqIdError};
use crate::format::format_identifier;
use crate::resolve::{PrefixContext, PrefixProvider, PrefixProviderRegistry, StaticPrefixProvider};

/// Sequential identifier generator with pluggable prefix resolution.
#[derive(Debug)]
pub struct SequentialGenerator {
    config: GeneratorConfig,
    provider: Arc<dyn PrefixProvider>,
}

impl SequentialGenerator {
    /// Create a generator whose prefix comes from the static configuration.
    ///
    /// Equivalent to [`Self::with_registry`] with an empty registry, so the
    /// configuration must not name a `prefix_provider`.
    ///
    /// # Errors
    ///
    /// Fails with `UnknownProvider` when the configuration names a provider.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_registry(config, &PrefixProviderRegistry::default())
    }

    /// Create a generator, resolving any named prefix provider up front.
    ///
    /// When the configuration names a `prefix_provider`, it is looked up in
    /// `registry` once, here, so a misconfigured name fails at construction
    /// rather than on the first identifier. Otherwise the static `prefix`
    /// field (empty when unset) is wrapped in a [`StaticPrefixProvider`].
    ///
    /// # Errors
    ///
    /// Fails with `UnknownProvider` when the named provider is not registered.
    pub fn with_registry(config: GeneratorConfig, registry: &PrefixProviderRegistry) -> Result<Self> {
        let provider: Arc<dyn PrefixProvider> = match config.prefix_provider.as_deref() {
            Some(name) => registry
                .get(name)
                .ok_or_else(|| SeqIdError::UnknownProvider {
                    name: name.to_string(),
                })?,
            None => Arc::new(StaticPrefixProvider::new(
                config.prefix.clone().unwrap_or_default(),
            )),
        };
        Ok(Self { config, provider })
    }

    /// Get the configuration for this generator.
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Format the identifier for a sequence seed without location context.
    ///
    /// # Errors
    ///
    /// Fails with `MissingContext` when the configured provider needs a
    /// location, plus any formatting error from [`format_identifier`].
    pub fn identifier_for_seed(&self, seed: u64) -> Result<String> {
        let prefix = self.provider.resolve(None)?;
        format_identifier(seed, &self.config, &prefix)
    }

    /// Format the identifier for a sequence seed at a given location.
    ///
    /// # Errors
    ///
    /// Fails with any resolution or formatting error.
    pub fn identifier_for_seed_at(&self, seed: u64, context: &PrefixContext<'_>) -> Result<String> {
        let prefix = self.provider.resolve(Some(context))?;
        format_identifier(seed, &self.config, &prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::Hierarchy;
    use crate::resolve::{LocationBasedPrefixProvider, PREFIX_ATTRIBUTE};

    const DECIMAL: &str = "0123456789";

    fn location_registry() -> PrefixProviderRegistry {
        let mut registry = PrefixProviderRegistry::new();
        registry.register("location", Arc::new(LocationBasedPrefixProvider::new()));
        registry
    }

    // ========== Construction tests ==========

    #[test]
    fn test_new_creates_generator() {
        let config = GeneratorConfig::new(DECIMAL).prefix("FOO-");
        let generator = SequentialGenerator::new(config.clone()).unwrap();
        assert_eq!(generator.config(), &config);
    }

    #[test]
    fn test_new_rejects_named_provider() {
        let config = GeneratorConfig::new(DECIMAL).prefix_provider("location");
        match SequentialGenerator::new(config).unwrap_err() {
            SeqIdError::UnknownProvider { name } => assert_eq!(name, "location"),
            other => panic!("expected UnknownProvider, got {:?}", other),
        }
    }

    #[test]
    fn test_with_registry_resolves_named_provider() {
        let config = GeneratorConfig::new(DECIMAL).prefix_provider("location");
        let generator = SequentialGenerator::with_registry(config, &location_registry());
        assert!(generator.is_ok());
    }

    #[test]
    fn test_with_registry_rejects_unregistered_name() {
        let config = GeneratorConfig::new(DECIMAL).prefix_provider("warehouse");
        let result = SequentialGenerator::with_registry(config, &location_registry());
        match result.unwrap_err() {
            SeqIdError::UnknownProvider { name } => assert_eq!(name, "warehouse"),
            other => panic!("expected UnknownProvider, got {:?}", other),
        }
    }

    #[test]
    fn test_generator_debug() {
        let config = GeneratorConfig::new(DECIMAL).prefix("FOO-");
        let generator = SequentialGenerator::new(config).unwrap();
        assert!(format!("{:?}", generator).contains("SequentialGenerator"));
    }

    // ========== Static prefix tests ==========

    #[test]
    fn test_static_prefix_end_to_end() {
        let config = GeneratorConfig::new(DECIMAL)
            .prefix("FOO-")
            .suffix("-ACK")
            .first_identifier_base("000")
            .min_length(11)
            .max_length(13);
        let generator = SequentialGenerator::new(config).unwrap();

        assert_eq!(generator.identifier_for_seed(1).unwrap(), "FOO-001-ACK");
        assert_eq!(generator.identifier_for_seed(12).unwrap(), "FOO-012-ACK");
        assert_eq!(generator.identifier_for_seed(12345).unwrap(), "FOO-12345-ACK");
    }

    #[test]
    fn test_missing_prefix_means_empty_prefix() {
        let config = GeneratorConfig::new(DECIMAL);
        let generator = SequentialGenerator::new(config).unwrap();
        assert_eq!(generator.identifier_for_seed(7).unwrap(), "7");
    }

    #[test]
    fn test_static_prefix_ignores_context() {
        let mut hierarchy = Hierarchy::new();
        let clinic = hierarchy.add_root("Clinic");
        let context = PrefixContext::new(&hierarchy, clinic);

        let config = GeneratorConfig::new(DECIMAL).prefix("FOO-");
        let generator = SequentialGenerator::new(config).unwrap();
        assert_eq!(generator.identifier_for_seed_at(1, &context).unwrap(), "FOO-1");
    }

    // ========== Location prefix tests ==========

    #[test]
    fn test_location_prefix_end_to_end() {
        let mut hierarchy = Hierarchy::new();
        let delegation = hierarchy.add_root("Afghanistan Delegation");
        let subdelegation = hierarchy.add_child(delegation, "Kaboul Subdelegation");
        let hospital = hierarchy.add_child(subdelegation, "Kaboul Central Hospital");
        let registration = hierarchy.add_child(hospital, "Main Registration");
        hierarchy.set_attribute(hospital, PREFIX_ATTRIBUTE, "AFDEL-000-");

        let config = GeneratorConfig::new(DECIMAL)
            .prefix_provider("location")
            .first_identifier_base("000")
            .min_length(13);
        let generator =
            SequentialGenerator::with_registry(config, &location_registry()).unwrap();

        let context = PrefixContext::new(&hierarchy, registration);
        assert_eq!(
            generator.identifier_for_seed_at(1, &context).unwrap(),
            "AFDEL-000-001"
        );
        assert_eq!(
            generator.identifier_for_seed_at(42, &context).unwrap(),
            "AFDEL-000-042"
        );
    }

    #[test]
    fn test_location_provider_without_context_fails() {
        let config = GeneratorConfig::new(DECIMAL).prefix_provider("location");
        let generator =
            SequentialGenerator::with_registry(config, &location_registry()).unwrap();
        assert_eq!(
            generator.identifier_for_seed(1).unwrap_err(),
            SeqIdError::MissingContext
        );
    }

    #[test]
    fn test_named_provider_wins_over_static_prefix() {
        let mut hierarchy = Hierarchy::new();
        let clinic = hierarchy.add_root("Clinic");
        hierarchy.set_attribute(clinic, PREFIX_ATTRIBUTE, "RESOLVED-");
        let context = PrefixContext::new(&hierarchy, clinic);

        let config = GeneratorConfig::new(DECIMAL)
            .prefix("STATIC-")
            .prefix_provider("location");
        let generator =
            SequentialGenerator::with_registry(config, &location_registry()).unwrap();
        assert_eq!(
            generator.identifier_for_seed_at(5, &context).unwrap(),
            "RESOLVED-5"
        );
    }

    #[test]
    fn test_location_without_attribute_formats_bare() {
        let mut hierarchy = Hierarchy::new();
        let clinic = hierarchy.add_root("Clinic");
        let context = PrefixContext::new(&hierarchy, clinic);

        let config = GeneratorConfig::new(DECIMAL).prefix_provider("location");
        let generator =
            SequentialGenerator::with_registry(config, &location_registry()).unwrap();
        assert_eq!(generator.identifier_for_seed_at(9, &context).unwrap(), "9");
    }

    // ========== Trait bound tests ==========

    #[test]
    fn test_generator_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<SequentialGenerator>();
    }
}
