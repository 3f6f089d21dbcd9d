//! Integration with the `http` crate.

use http::{HeaderMap, HeaderValue, header::CACHE_CONTROL};

use crate::{Header, ParseError, ParseOptions};

/// An error that can occur when parsing a `Cache-Control` header from an HTTP header value.
#[derive(Debug, thiserror::Error)]
pub enum FromHeaderValueError {
    /// The header value is not made of visible ASCII characters.
    #[error("failed to read the Cache-Control header value: {0}")]
    NotVisibleAscii(#[from] http::header::ToStrError),

    /// The header value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parses the value strictly, with the default [`ParseOptions`].
impl TryFrom<&HeaderValue> for Header {
    type Error = FromHeaderValueError;

    fn try_from(value: &HeaderValue) -> Result<Self, Self::Error> {
        Ok(value.to_str()?.parse()?)
    }
}

impl TryFrom<&Header> for HeaderValue {
    type Error = http::header::InvalidHeaderValue;

    fn try_from(header: &Header) -> Result<Self, Self::Error> {
        HeaderValue::from_str(&header.to_string())
    }
}

/// An extension trait to read and write `Cache-Control` headers on a header map.
///
/// Only the first `Cache-Control` header is considered: combining several of them into one
/// logical value is left to the caller.
pub trait HeaderMapExt {
    /// Parse the `Cache-Control` header leniently.
    ///
    /// Returns `None` if the header is missing or is not made of visible ASCII characters.
    fn cache_control(&self) -> Option<Header>;

    /// Parse the `Cache-Control` header strictly.
    ///
    /// Returns `None` if the header is missing.
    fn cache_control_strict(
        &self,
        options: &ParseOptions,
    ) -> Option<Result<Header, FromHeaderValueError>>;

    /// Replace the `Cache-Control` header with the canonical form of `header`.
    ///
    /// An empty header removes the `Cache-Control` header altogether.
    fn set_cache_control(&mut self, header: &Header);
}

impl HeaderMapExt for HeaderMap {
    fn cache_control(&self) -> Option<Header> {
        let value = self.get(CACHE_CONTROL)?;

        match value.to_str() {
            Ok(value) => Some(crate::parse(value)),
            Err(err) => {
                tracing::debug!("Ignoring Cache-Control header: {err}");

                None
            }
        }
    }

    fn cache_control_strict(
        &self,
        options: &ParseOptions,
    ) -> Option<Result<Header, FromHeaderValueError>> {
        let value = self.get(CACHE_CONTROL)?;

        Some(
            value
                .to_str()
                .map_err(FromHeaderValueError::from)
                .and_then(|value| Ok(crate::parse_strict(value, options)?)),
        )
    }

    fn set_cache_control(&mut self, header: &Header) {
        if header.is_empty() {
            self.remove(CACHE_CONTROL);

            return;
        }

        // The canonical form only ever holds directive names, digits, commas and spaces.
        match HeaderValue::try_from(header) {
            Ok(value) => {
                self.insert(CACHE_CONTROL, value);
            }
            Err(err) => tracing::error!("Failed to build Cache-Control header value: {err}"),
        }
    }
}
