//! Delta-seconds conversion.
//!
//! RFC 9111 encodes durations as `delta-seconds`: a non-negative decimal integer, without sign,
//! fraction or unit.

use std::time::Duration;

/// An error that can occur when converting a delta-seconds value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeltaSecondsError {
    /// The value was empty.
    #[error("empty value, expected a non-negative number of seconds")]
    Empty,

    /// The value contained something other than a decimal digit.
    #[error("unexpected character `{character}` at position {position}, expected a decimal digit")]
    InvalidDigit {
        /// The offending character.
        character: char,

        /// The byte position of the offending character.
        position: usize,
    },

    /// The value does not fit in the representable range.
    #[error("value `{value}` is out of range")]
    OutOfRange {
        /// The value that could not be represented.
        value: String,
    },
}

/// Parse a delta-seconds value into a duration.
pub fn parse(value: &str) -> Result<Duration, DeltaSecondsError> {
    if value.is_empty() {
        return Err(DeltaSecondsError::Empty);
    }

    // `u64::from_str` accepts a leading `+`, which the grammar does not.
    if let Some((position, character)) = value
        .char_indices()
        .find(|(_, character)| !character.is_ascii_digit())
    {
        return Err(DeltaSecondsError::InvalidDigit {
            character,
            position,
        });
    }

    let seconds = value
        .parse::<u64>()
        .map_err(|_| DeltaSecondsError::OutOfRange {
            value: value.to_owned(),
        })?;

    Ok(Duration::from_secs(seconds))
}
