//! Error types for header parsing.

use crate::DeltaSecondsError;

/// An error that can occur when strictly parsing a `Cache-Control` header.
///
/// Directive names and values are reported as they appear after normalization, that is
/// lowercased and without whitespace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The directive is not one of the RFC 9111 directives.
    #[error("unknown directive: {directive}")]
    UnknownDirective {
        /// The offending directive name.
        directive: String,
    },

    /// The directive value is not a valid delta-seconds value.
    #[error("failed to parse the value of directive ({directive}={value}): {err}")]
    InvalidDirectiveValue {
        /// The directive name.
        directive: String,

        /// The raw value.
        value: String,

        /// The conversion failure.
        #[source]
        err: DeltaSecondsError,
    },
}

impl ParseError {
    /// Whether the error is about an unknown directive.
    pub fn is_unknown_directive(&self) -> bool {
        matches!(self, Self::UnknownDirective { .. })
    }

    /// Whether the error is about an invalid directive value.
    pub fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidDirectiveValue { .. })
    }
}

/// An error that can occur when reading and parsing a header from a reader.
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    /// Reading from the source failed.
    #[error("failed to read the Cache-Control header: {0}")]
    Io(#[from] std::io::Error),

    /// The header could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}
