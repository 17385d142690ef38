use serde::{Deserialize, Serialize};

/// Configuration for a sequential identifier generator.
///
/// All fields except the character set are optional. Invariants (at least two
/// distinct symbols, `min_length <= max_length`) are checked when an
/// identifier is formatted, not when the configuration is built, so hosts can
/// load and edit configurations freely before use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Ordered symbols defining the numeral base; index 0 is the zero digit.
    pub base_character_set: String,
    /// Static string prepended to the encoded digits.
    pub prefix: Option<String>,
    /// Static string appended after the encoded digits.
    pub suffix: Option<String>,
    /// Digit string whose decoded value is added to every seed before
    /// encoding, letting a sequence start at an arbitrary value.
    pub first_identifier_base: Option<String>,
    /// Inclusive lower bound on the total identifier length, in characters.
    pub min_length: Option<usize>,
    /// Inclusive upper bound on the total identifier length, in characters.
    pub max_length: Option<usize>,
    /// Registry key of a dynamic prefix provider; when set it replaces the
    /// static `prefix`.
    pub prefix_provider: Option<String>,
}

impl GeneratorConfig {
    pub fn new(base_character_set: impl Into<String>) -> Self {
        Self {
            base_character_set: base_character_set.into(),
            prefix: None,
            suffix: None,
            first_identifier_base: None,
            min_length: None,
            max_length: None,
            prefix_provider: None,
        }
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn first_identifier_base(mut self, first: impl Into<String>) -> Self {
        self.first_identifier_base = Some(first.into());
        self
    }

    pub fn min_length(mut self, len: usize) -> Self {
        self.min_length = Some(len);
        self
    }

    pub fn max_length(mut self, len: usize) -> Self {
        self.max_length = Some(len);
        self
    }

    pub fn prefix_provider(mut self, name: impl Into<String>) -> Self {
        self.prefix_provider = Some(name.into());
        self
    }
}
