//! The `Cache-Control` directive vocabulary.

use std::fmt::Display;

/// A `Cache-Control` directive, as defined in RFC 9111, section 5.2.
///
/// Directives are either boolean-shaped (e.g. `no-cache`) or valued-shaped, in which case they
/// carry a delta-seconds value (e.g. `max-age=60`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Directive {
    /// `max-age=N`
    MaxAge,
    /// `max-stale=N`
    MaxStale,
    /// `min-fresh=N`
    MinFresh,
    /// `no-cache`
    NoCache,
    /// `no-store`
    NoStore,
    /// `no-transform`
    NoTransform,
    /// `only-if-cached`
    OnlyIfCached,
    /// `must-revalidate`
    MustRevalidate,
    /// `must-understand`
    MustUnderstand,
    /// `private`
    Private,
    /// `proxy-revalidate`
    ProxyRevalidate,
    /// `public`
    Public,
    /// `s-maxage=N`
    SMaxAge,
}

impl Directive {
    /// All the directives, in the order they are formatted in.
    pub const ALL: [Self; 13] = [
        Self::MaxAge,
        Self::MaxStale,
        Self::MinFresh,
        Self::NoCache,
        Self::NoStore,
        Self::NoTransform,
        Self::OnlyIfCached,
        Self::MustRevalidate,
        Self::MustUnderstand,
        Self::Private,
        Self::ProxyRevalidate,
        Self::Public,
        Self::SMaxAge,
    ];

    /// Get the lowercase name of the directive, as it appears in a header.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MaxAge => "max-age",
            Self::MaxStale => "max-stale",
            Self::MinFresh => "min-fresh",
            Self::NoCache => "no-cache",
            Self::NoStore => "no-store",
            Self::NoTransform => "no-transform",
            Self::OnlyIfCached => "only-if-cached",
            Self::MustRevalidate => "must-revalidate",
            Self::MustUnderstand => "must-understand",
            Self::Private => "private",
            Self::ProxyRevalidate => "proxy-revalidate",
            Self::Public => "public",
            Self::SMaxAge => "s-maxage",
        }
    }

    /// Whether the directive carries a delta-seconds value.
    pub const fn is_valued(self) -> bool {
        matches!(
            self,
            Self::MaxAge | Self::MaxStale | Self::MinFresh | Self::SMaxAge
        )
    }

    /// Look up a directive by its name.
    ///
    /// The match is exact: callers are expected to lowercase the name beforehand.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|directive| directive.as_str() == name)
    }

    /// Look up a boolean-shaped directive by its name.
    pub(crate) fn flag_from_name(name: &str) -> Option<Self> {
        Self::from_name(name).filter(|directive| !directive.is_valued())
    }

    /// Look up a valued-shaped directive by its name.
    pub(crate) fn delta_from_name(name: &str) -> Option<Self> {
        Self::from_name(name).filter(|directive| directive.is_valued())
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
