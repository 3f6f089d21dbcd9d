//! `Cache-Control` header parsing.

mod error;
mod options;

use std::io::Read;

pub use error::{ParseError, ReadError};
pub use options::{ParseOptions, ParseOptionsFromEnvError};

use crate::{Directive, Header, delta_seconds};

/// Parse a `Cache-Control` header leniently.
///
/// Unknown directives and directives with invalid values are silently dropped, so this never
/// fails. Use [`parse_strict`] to be notified about them.
pub fn parse(header: &str) -> Header {
    let mut result = Header::default();

    for directive in Directives::new(header) {
        match directive {
            Ok(directive) => directive.apply(&mut result),
            Err(err) => tracing::debug!("Ignoring Cache-Control directive: {err}"),
        }
    }

    result
}

/// Parse a `Cache-Control` header strictly.
///
/// By default, the first unknown directive or invalid value aborts the parsing. Each of those
/// checks can be relaxed independently through the provided [`ParseOptions`]. Relaxing both is
/// equivalent to calling [`parse`].
pub fn parse_strict(header: &str, options: &ParseOptions) -> Result<Header, ParseError> {
    let mut result = Header::default();

    for directive in Directives::new(header) {
        match directive {
            Ok(directive) => directive.apply(&mut result),
            Err(err) if options.ignores(&err) => {
                tracing::debug!("Ignoring Cache-Control directive: {err}");
            }
            Err(err) => return Err(err),
        }
    }

    Ok(result)
}

/// Read a whole `Cache-Control` header from a reader and parse it strictly.
///
/// The reader is drained into memory before parsing starts. Read failures, including non UTF-8
/// content, are reported as [`ReadError::Io`].
pub fn parse_reader(mut reader: impl Read, options: &ParseOptions) -> Result<Header, ReadError> {
    let mut header = String::new();
    reader.read_to_string(&mut header)?;

    Ok(parse_strict(&header, options)?)
}

/// Read a whole `Cache-Control` header from a reader and parse it leniently.
pub fn parse_reader_lenient(mut reader: impl Read) -> std::io::Result<Header> {
    let mut header = String::new();
    reader.read_to_string(&mut header)?;

    Ok(parse(&header))
}

/// Read a whole `Cache-Control` header from an asynchronous reader and parse it strictly.
#[cfg(feature = "tokio")]
pub async fn parse_async_reader(
    mut reader: impl tokio::io::AsyncRead + Unpin,
    options: &ParseOptions,
) -> Result<Header, ReadError> {
    use tokio::io::AsyncReadExt;

    let mut header = String::new();
    reader.read_to_string(&mut header).await?;

    Ok(parse_strict(&header, options)?)
}

/// A successfully classified directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Parsed {
    Flag(Directive),
    Delta(Directive, std::time::Duration),
}

impl Parsed {
    fn apply(self, header: &mut Header) {
        match self {
            Self::Flag(directive) => header.set_flag(directive),
            Self::Delta(directive, duration) => header.set_delta(directive, duration),
        }
    }
}

/// An iterator over the classified directives of a header.
struct Directives {
    normalized: String,
    position: Option<usize>,
}

impl Directives {
    fn new(header: &str) -> Self {
        // Removing all whitespace also removes it from inside tokens, which is fine as no known
        // directive name or delta-seconds value contains any.
        let normalized: String = header
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        let position = (!normalized.is_empty()).then_some(0);

        Self {
            normalized,
            position,
        }
    }

    fn classify(token: &str) -> Result<Parsed, ParseError> {
        let Some((key, value)) = token.split_once('=') else {
            return Directive::flag_from_name(token)
                .map(Parsed::Flag)
                .ok_or_else(|| ParseError::UnknownDirective {
                    directive: token.to_owned(),
                });
        };

        let duration =
            delta_seconds::parse(value.trim()).map_err(|err| ParseError::InvalidDirectiveValue {
                directive: key.to_owned(),
                value: value.to_owned(),
                err,
            })?;

        // Boolean directive names carrying a value (e.g. `private=5`) end up here too.
        Directive::delta_from_name(key)
            .map(|directive| Parsed::Delta(directive, duration))
            .ok_or_else(|| ParseError::UnknownDirective {
                directive: key.to_owned(),
            })
    }
}

impl Iterator for Directives {
    type Item = Result<Parsed, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.position?;
        let rest = &self.normalized[start..];

        let token = match rest.find(',') {
            Some(end) => {
                self.position = Some(start + end + 1);
                &rest[..end]
            }
            None => {
                self.position = None;
                rest
            }
        };

        Some(Self::classify(token))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn classified(header: &str) -> Vec<Result<Parsed, ParseError>> {
        Directives::new(header).collect()
    }

    #[test]
    fn test_directives_empty_input_yields_nothing() {
        assert!(classified("").is_empty());
        assert!(classified("   ").is_empty());
    }

    #[test]
    fn test_directives_keeps_empty_tokens() {
        assert_eq!(
            classified("public,,"),
            [
                Ok(Parsed::Flag(Directive::Public)),
                Err(ParseError::UnknownDirective {
                    directive: String::new()
                }),
                Err(ParseError::UnknownDirective {
                    directive: String::new()
                }),
            ]
        );
    }

    #[test]
    fn test_directives_splits_on_first_equal_sign_only() {
        assert_eq!(
            classified("max-age=1=2"),
            [Err(ParseError::InvalidDirectiveValue {
                directive: "max-age".to_owned(),
                value: "1=2".to_owned(),
                err: delta_seconds::DeltaSecondsError::InvalidDigit {
                    character: '=',
                    position: 1,
                },
            })]
        );
    }

    #[test]
    fn test_directives_normalizes_case_and_whitespace() {
        assert_eq!(
            classified(" Max-Age = 60 ,\tNO-STORE "),
            [
                Ok(Parsed::Delta(Directive::MaxAge, Duration::from_secs(60))),
                Ok(Parsed::Flag(Directive::NoStore)),
            ]
        );
    }

    #[test]
    fn test_valued_boolean_directive_is_unknown() {
        assert_eq!(
            classified("private=5"),
            [Err(ParseError::UnknownDirective {
                directive: "private".to_owned()
            })]
        );
    }

    #[test]
    fn test_value_is_converted_before_the_key_is_looked_up() {
        assert!(matches!(
            classified("private=abc").as_slice(),
            [Err(ParseError::InvalidDirectiveValue { .. })]
        ));
        assert!(matches!(
            classified("unknown=abc").as_slice(),
            [Err(ParseError::InvalidDirectiveValue { .. })]
        ));
    }

    #[test]
    fn test_bare_valued_directive_is_unknown() {
        assert_eq!(
            classified("max-age"),
            [Err(ParseError::UnknownDirective {
                directive: "max-age".to_owned()
            })]
        );
    }
}
