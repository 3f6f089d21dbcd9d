//! The parsed `Cache-Control` header.

use std::{fmt::Display, str::FromStr, time::Duration};

use crate::{Directive, ParseError, ParseOptions};

/// A parsed `Cache-Control` header.
///
/// Each field maps to one directive of RFC 9111, section 5.2. A default `Header` holds no
/// directive at all and formats to an empty string.
///
/// Formatting a `Header` (through [`Display`]) yields its canonical form: the present directives,
/// in a fixed order, joined by `", "`. This is not an echo of the parsed input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Header {
    /// The `max-age` directive.
    pub max_age: Option<Duration>,

    /// The `max-stale` directive.
    pub max_stale: Option<Duration>,

    /// The `min-fresh` directive.
    pub min_fresh: Option<Duration>,

    /// The `no-cache` directive.
    pub no_cache: bool,

    /// The `no-store` directive.
    pub no_store: bool,

    /// The `no-transform` directive.
    pub no_transform: bool,

    /// The `only-if-cached` directive.
    pub only_if_cached: bool,

    /// The `must-revalidate` directive.
    pub must_revalidate: bool,

    /// The `must-understand` directive.
    pub must_understand: bool,

    /// The `private` directive.
    pub private: bool,

    /// The `proxy-revalidate` directive.
    pub proxy_revalidate: bool,

    /// The `public` directive.
    pub public: bool,

    /// The `s-maxage` directive.
    pub s_maxage: Option<Duration>,
}

impl Header {
    /// Whether no directive is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether the given directive is present, flag or valued.
    pub fn contains(&self, directive: Directive) -> bool {
        match self.flag(directive) {
            Some(flag) => flag,
            None => self.delta(directive).is_some(),
        }
    }

    /// Get the duration of a valued directive.
    ///
    /// Always `None` for boolean directives.
    pub fn delta(&self, directive: Directive) -> Option<Duration> {
        match directive {
            Directive::MaxAge => self.max_age,
            Directive::MaxStale => self.max_stale,
            Directive::MinFresh => self.min_fresh,
            Directive::SMaxAge => self.s_maxage,
            _ => None,
        }
    }

    /// Iterate over the present directives, in canonical order.
    pub fn directives(&self) -> impl Iterator<Item = Directive> + '_ {
        Directive::ALL
            .into_iter()
            .filter(|directive| self.contains(*directive))
    }

    /// Set a boolean directive.
    ///
    /// Valued directives are left untouched.
    pub fn set_flag(&mut self, directive: Directive) {
        if let Some(flag) = self.flag_mut(directive) {
            *flag = true;
        }
    }

    /// Set the duration of a valued directive, replacing any previous value.
    ///
    /// Boolean directives are left untouched.
    pub fn set_delta(&mut self, directive: Directive, duration: Duration) {
        if let Some(delta) = self.delta_mut(directive) {
            *delta = Some(duration);
        }
    }

    fn flag(&self, directive: Directive) -> Option<bool> {
        Some(match directive {
            Directive::NoCache => self.no_cache,
            Directive::NoStore => self.no_store,
            Directive::NoTransform => self.no_transform,
            Directive::OnlyIfCached => self.only_if_cached,
            Directive::MustRevalidate => self.must_revalidate,
            Directive::MustUnderstand => self.must_understand,
            Directive::Private => self.private,
            Directive::ProxyRevalidate => self.proxy_revalidate,
            Directive::Public => self.public,
            Directive::MaxAge | Directive::MaxStale | Directive::MinFresh | Directive::SMaxAge => {
                return None;
            }
        })
    }

    fn flag_mut(&mut self, directive: Directive) -> Option<&mut bool> {
        Some(match directive {
            Directive::NoCache => &mut self.no_cache,
            Directive::NoStore => &mut self.no_store,
            Directive::NoTransform => &mut self.no_transform,
            Directive::OnlyIfCached => &mut self.only_if_cached,
            Directive::MustRevalidate => &mut self.must_revalidate,
            Directive::MustUnderstand => &mut self.must_understand,
            Directive::Private => &mut self.private,
            Directive::ProxyRevalidate => &mut self.proxy_revalidate,
            Directive::Public => &mut self.public,
            Directive::MaxAge | Directive::MaxStale | Directive::MinFresh | Directive::SMaxAge => {
                return None;
            }
        })
    }

    fn delta_mut(&mut self, directive: Directive) -> Option<&mut Option<Duration>> {
        match directive {
            Directive::MaxAge => Some(&mut self.max_age),
            Directive::MaxStale => Some(&mut self.max_stale),
            Directive::MinFresh => Some(&mut self.min_fresh),
            Directive::SMaxAge => Some(&mut self.s_maxage),
            _ => None,
        }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, directive) in self.directives().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            match self.delta(directive) {
                // Sub-second precision is dropped: the grammar only knows whole seconds.
                Some(duration) => write!(f, "{directive}={}", duration.as_secs())?,
                None => write!(f, "{directive}")?,
            }
        }

        Ok(())
    }
}

/// Parses the header strictly, with the default [`ParseOptions`].
impl FromStr for Header {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_strict(s, &ParseOptions::default())
    }
}

impl serde::Serialize for Header {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Header {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = <String as serde::Deserialize>::deserialize(deserializer)?;

        value.parse::<Self>().map_err(serde::de::Error::custom)
    }
}
