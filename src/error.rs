#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SeqIdError {
    #[error("character set '{character_set}' must contain at least two symbols")]
    CharacterSetTooSmall { character_set: String },

    #[error("character set '{character_set}' contains duplicate symbol '{symbol}'")]
    DuplicateSymbol { symbol: char, character_set: String },

    #[error("invalid digit '{digit}' for character set '{character_set}'")]
    InvalidDigit { digit: char, character_set: String },

    #[error("'{text}' overflows the supported range in base {radix}")]
    Overflow { text: String, radix: usize },

    #[error("minimum length {min_length} exceeds maximum length {max_length}")]
    InvalidBounds { min_length: usize, max_length: usize },

    #[error("identifier '{identifier}' is shorter than the minimum length {min_length}")]
    TooShort { identifier: String, min_length: usize },

    #[error("identifier '{identifier}' is longer than the maximum length {max_length}")]
    TooLong { identifier: String, max_length: usize },

    #[error("prefix resolution requires a location context, but none was supplied")]
    MissingContext,

    #[error("no prefix provider registered under '{name}'")]
    UnknownProvider { name: String },
}

pub type Result<T> = std::result::Result<T, SeqIdError>;
