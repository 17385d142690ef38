use crate::error::{Result, SeqIdError};

/// A validated, ordered set of symbols defining a numeral base.
///
/// The radix is the number of symbols and the symbol at index 0 is the zero
/// digit, which also serves as the padding character for identifier bodies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    symbols: Vec<char>,
}

impl CharacterSet {
    /// Parses and validates a character set.
    ///
    /// # Errors
    ///
    /// Returns `CharacterSetTooSmall` if fewer than two symbols are given, or
    /// `DuplicateSymbol` if the same symbol appears twice.
    pub fn parse(character_set: &str) -> Result<Self> {
        let symbols: Vec<char> = character_set.chars().collect();
        if symbols.len() < 2 {
            return Err(SeqIdError::CharacterSetTooSmall {
                character_set: character_set.to_string(),
            });
        }
        for (i, &symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(&symbol) {
                return Err(SeqIdError::DuplicateSymbol {
                    symbol,
                    character_set: character_set.to_string(),
                });
            }
        }
        Ok(Self { symbols })
    }

    /// Returns the number of symbols in the set.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// Returns the zero digit (the symbol at index 0).
    pub fn zero(&self) -> char {
        self.symbols[0]
    }

    /// Encodes `value` as the minimal digit string in this base, most
    /// significant digit first. Zero encodes as the single zero symbol.
    pub fn encode(&self, value: u128) -> String {
        if value == 0 {
            return self.zero().to_string();
        }
        let radix = self.symbols.len() as u128;
        let mut digits = Vec::new();
        let mut rest = value;
        while rest > 0 {
            digits.push(self.symbols[(rest % radix) as usize]);
            rest /= radix;
        }
        digits.reverse();
        digits.into_iter().collect()
    }

    /// Decodes a digit string in this base, most significant digit first.
    /// The empty string decodes to zero.
    ///
    /// # Errors
    ///
    /// Returns `InvalidDigit` for a character outside the set and `Overflow`
    /// when the decoded value exceeds the supported range.
    pub fn decode(&self, text: &str) -> Result<u128> {
        let radix = self.symbols.len() as u128;
        let mut value: u128 = 0;
        for digit in text.chars() {
            let index = self
                .symbols
                .iter()
                .position(|&symbol| symbol == digit)
                .ok_or_else(|| SeqIdError::InvalidDigit {
                    digit,
                    character_set: self.symbols.iter().collect(),
                })?;
            value = value
                .checked_mul(radix)
                .and_then(|v| v.checked_add(index as u128))
                .ok_or_else(|| SeqIdError::Overflow {
                    text: text.to_string(),
                    radix: self.symbols.len(),
                })?;
        }
        Ok(value)
    }
}
