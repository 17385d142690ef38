use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{Result, SeqIdError};
use crate::hierarchy::{Hierarchy, NodeId};

/// Default attribute name searched by [`LocationBasedPrefixProvider`].
pub const PREFIX_ATTRIBUTE: &str = "prefix";

/// Location context handed to prefix resolution.
#[derive(Debug, Clone, Copy)]
pub struct PrefixContext<'a> {
    /// The externally owned location tree.
    pub hierarchy: &'a Hierarchy,
    /// The location the identifier is being generated at.
    pub location: NodeId,
}

impl<'a> PrefixContext<'a> {
    pub fn new(hierarchy: &'a Hierarchy, location: NodeId) -> Self {
        Self {
            hierarchy,
            location,
        }
    }
}

/// Strategy computing the effective prefix for one generated identifier.
pub trait PrefixProvider: fmt::Debug + Send + Sync {
    /// Resolves the prefix, given an optional location context.
    ///
    /// # Errors
    ///
    /// Implementations that require a context return `MissingContext` when
    /// called without one.
    fn resolve(&self, context: Option<&PrefixContext<'_>>) -> Result<String>;
}

/// Returns a fixed prefix regardless of context.
///
/// Generators without a dynamic provider fall back to one of these wrapping
/// the configured static prefix.
#[derive(Debug, Clone, Default)]
pub struct StaticPrefixProvider {
    prefix: String,
}

impl StaticPrefixProvider {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl PrefixProvider for StaticPrefixProvider {
    fn resolve(&self, _context: Option<&PrefixContext<'_>>) -> Result<String> {
        Ok(self.prefix.clone())
    }
}

/// Derives the prefix from the nearest location carrying a prefix attribute.
///
/// Resolution order: the context's location is checked first, then its parent,
/// then grandparent, terminating at the root. The first node carrying the
/// attribute wins, so nearer locations shadow farther ones. A chain without
/// the attribute resolves to the empty string; only a missing context is an
/// error, since that signals misconfiguration rather than an unlabelled tree.
#[derive(Debug, Clone)]
pub struct LocationBasedPrefixProvider {
    attribute: String,
}

impl LocationBasedPrefixProvider {
    /// Creates a provider searching for [`PREFIX_ATTRIBUTE`].
    pub fn new() -> Self {
        Self::with_attribute(PREFIX_ATTRIBUTE)
    }

    /// Creates a provider searching for a custom attribute name.
    pub fn with_attribute(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
        }
    }
}

impl Default for LocationBasedPrefixProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl PrefixProvider for LocationBasedPrefixProvider {
    fn resolve(&self, context: Option<&PrefixContext<'_>>) -> Result<String> {
        let context = context.ok_or(SeqIdError::MissingContext)?;
        for node in context.hierarchy.ancestors(context.location) {
            if let Some(value) = context.hierarchy.attribute(node, &self.attribute) {
                return Ok(value.to_string());
            }
        }
        Ok(String::new())
    }
}

/// Maps provider names to shared [`PrefixProvider`] instances.
///
/// Generators resolve their configured provider name against a registry once,
/// at construction time, so a misconfigured name fails fast instead of on the
/// first formatted identifier.
#[derive(Debug, Clone, Default)]
pub struct PrefixProviderRegistry {
    providers: HashMap<String, Arc<dyn PrefixProvider>>,
}

impl PrefixProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `provider` under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, provider: Arc<dyn PrefixProvider>) {
        self.providers.insert(name.into(), provider);
    }

    /// Looks up a provider by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn PrefixProvider>> {
        self.providers.get(name).cloned()
    }

    /// Returns true if a provider is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }
}
