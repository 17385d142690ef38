use crate::base::CharacterSet;
use crate::config::GeneratorConfig;
use crate::error::{Result, SeqIdError};

/// Formats one identifier from a sequence seed.
///
/// The seed is offset by the decoded `first_identifier_base`, encoded in the
/// configured base, left-padded with the zero symbol until the whole
/// identifier reaches `min_length`, and wrapped in `effective_prefix` and the
/// configured suffix. Padding applies to the encoded body only, never to
/// prefix or suffix, and happens before the maximum-length check: identifiers
/// keep a fixed-width digit section until sequence growth itself overflows
/// `max_length`, which is the intended, caller-visible exhaustion signal.
///
/// Lengths are counted in characters, so multi-byte symbols are safe. The
/// static `prefix` field of the configuration is not consulted here; callers
/// decide the effective prefix (see `SequentialGenerator`).
///
/// # Errors
///
/// Fails with `CharacterSetTooSmall`/`DuplicateSymbol` for an unusable
/// character set, `InvalidBounds` when `min_length > max_length`,
/// `InvalidDigit`/`Overflow` while decoding `first_identifier_base`, and
/// `TooShort`/`TooLong` when the final identifier violates the bounds.
pub fn format_identifier(
    seed: u64,
    config: &GeneratorConfig,
    effective_prefix: &str,
) -> Result<String> {
    let symbols = CharacterSet::parse(&config.base_character_set)?;
    if let (Some(min), Some(max)) = (config.min_length, config.max_length) {
        if min > max {
            return Err(SeqIdError::InvalidBounds {
                min_length: min,
                max_length: max,
            });
        }
    }

    let offset = match config.first_identifier_base.as_deref() {
        Some(first) => symbols.decode(first)?,
        None => 0,
    };
    let value = u128::from(seed)
        .checked_add(offset)
        .ok_or_else(|| SeqIdError::Overflow {
            text: config.first_identifier_base.clone().unwrap_or_default(),
            radix: symbols.radix(),
        })?;

    let mut body = symbols.encode(value);
    let suffix = config.suffix.as_deref().unwrap_or("");
    let surround = effective_prefix.chars().count() + suffix.chars().count();

    if let Some(min) = config.min_length {
        let current = surround + body.chars().count();
        if current < min {
            let padding = symbols.zero().to_string().repeat(min - current);
            body.insert_str(0, &padding);
        }
    }

    let identifier = format!("{effective_prefix}{body}{suffix}");
    let length = identifier.chars().count();
    if let Some(min) = config.min_length {
        if length < min {
            return Err(SeqIdError::TooShort {
                identifier,
                min_length: min,
            });
        }
    }
    if let Some(max) = config.max_length {
        if length > max {
            return Err(SeqIdError::TooLong {
                identifier,
                max_length: max,
            });
        }
    }
    Ok(identifier)
}
