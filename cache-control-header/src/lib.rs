//! Cache-Control header
//!
//! Parse and format HTTP `Cache-Control` headers, as described in RFC 9111, section 5.2.
//!
//! ```
//! use std::time::Duration;
//!
//! use cache_control_header::{ParseOptions, parse, parse_strict};
//!
//! let header = parse("max-age=3600, must-revalidate, private, unknown");
//!
//! assert_eq!(header.max_age, Some(Duration::from_secs(3600)));
//! assert!(header.must_revalidate);
//! assert!(header.private);
//! assert_eq!(header.to_string(), "max-age=3600, must-revalidate, private");
//!
//! let err = parse_strict("max-age=3600, unknown", &ParseOptions::default()).unwrap_err();
//!
//! assert_eq!(err.to_string(), "unknown directive: unknown");
//! ```
//!
//! # Features
//!
//! - `tokio`: Parse headers from asynchronous readers. **Not enabled by default.**
//! - `examples`: Dependencies for the bundled examples. **Not enabled by default.**

pub mod delta_seconds;

mod directive;
mod header;
mod headers;
mod parse;

pub use delta_seconds::DeltaSecondsError;
pub use directive::Directive;
pub use header::Header;
pub use headers::{FromHeaderValueError, HeaderMapExt};
#[cfg(feature = "tokio")]
pub use parse::parse_async_reader;
pub use parse::{
    ParseError, ParseOptions, ParseOptionsFromEnvError, ReadError, parse, parse_reader,
    parse_reader_lenient, parse_strict,
};
