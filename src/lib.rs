pub mod base;
pub mod config;
pub mod error;
pub mod format;
pub mod generate;
pub mod hierarchy;
pub mod resolve;

pub use error::{SeqIdError, Result};
pub use base::CharacterSet;
pub use config::GeneratorConfig;
pub use format::format_identifier;
pub use generate::SequentialGenerator;
pub use hierarchy::{Hierarchy, NodeId};
pub use resolve::{
    LocationBasedPrefixProvider, PrefixContext, PrefixProvider, PrefixProviderRegistry,
    StaticPrefixProvider, PREFIX_ATTRIBUTE,
};

/// Encode a value as text in the base defined by `character_set`.
///
/// # Errors
///
/// Fails when `character_set` is unusable as a base.
pub fn encode(value: u128, character_set: &str) -> Result<String> {
    Ok(CharacterSet::parse(character_set)?.encode(value))
}

/// Decode text written in the base defined by `character_set` back to a value.
///
/// # Errors
///
/// Fails when `character_set` is unusable as a base, when `text` contains a
/// symbol outside it, or when the value overflows the supported range.
pub fn decode(text: &str, character_set: &str) -> Result<u128> {
    CharacterSet::parse(character_set)?.decode(text)
}
