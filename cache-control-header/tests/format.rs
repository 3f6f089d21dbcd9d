//! Canonical formatting of `Cache-Control` headers.

use std::time::Duration;

use cache_control_header::{Directive, Header, parse};
use insta::assert_snapshot;

#[test]
fn test_format_empty_header() {
    assert_eq!(parse("").to_string(), "");
    assert_eq!(Header::default().to_string(), "");
}

#[test]
fn test_format_is_canonical() {
    assert_snapshot!(
        parse("private, max-age=3600, must-revalidate").to_string(),
        @"max-age=3600, must-revalidate, private"
    );
    assert_snapshot!(
        parse("PUBLIC,S-MAXAGE = 600 ,  no-transform").to_string(),
        @"no-transform, public, s-maxage=600"
    );
}

#[test]
fn test_format_every_directive() {
    let header = Header {
        max_age: Some(Duration::from_secs(1)),
        max_stale: Some(Duration::from_secs(2)),
        min_fresh: Some(Duration::from_secs(3)),
        no_cache: true,
        no_store: true,
        no_transform: true,
        only_if_cached: true,
        must_revalidate: true,
        must_understand: true,
        private: true,
        proxy_revalidate: true,
        public: true,
        s_maxage: Some(Duration::from_secs(4)),
    };

    assert_snapshot!(
        header.to_string(),
        @"max-age=1, max-stale=2, min-fresh=3, no-cache, no-store, no-transform, only-if-cached, must-revalidate, must-understand, private, proxy-revalidate, public, s-maxage=4"
    );
    assert_eq!(header.directives().collect::<Vec<_>>(), Directive::ALL);
}

#[test]
fn test_format_order_is_stable_across_input_orders() {
    let permutations = [
        "private, max-age=3600, must-revalidate",
        "must-revalidate, private, max-age=3600",
        "max-age=3600, private, must-revalidate",
        "MUST-REVALIDATE,MAX-AGE=3600,PRIVATE",
    ];

    for header in permutations {
        assert_eq!(
            parse(header).to_string(),
            "max-age=3600, must-revalidate, private",
            "{header}"
        );
    }

    let permutations = [
        "s-maxage=0, no-store, max-stale=5, only-if-cached",
        "only-if-cached, max-stale=5, s-maxage=0, no-store",
        "no-store, only-if-cached, s-maxage=0, max-stale=5",
    ];

    for header in permutations {
        assert_eq!(
            parse(header).to_string(),
            "max-stale=5, no-store, only-if-cached, s-maxage=0",
            "{header}"
        );
    }
}

#[test]
fn test_format_drops_unknown_directives_and_duplicates() {
    assert_eq!(
        parse("foo, max-age=1, bar=2, max-age=5, public, public").to_string(),
        "max-age=5, public"
    );
}

#[test]
fn test_canonical_input_roundtrips() {
    let headers = [
        Header::default(),
        Header {
            max_age: Some(Duration::ZERO),
            ..Default::default()
        },
        Header {
            no_store: true,
            must_understand: true,
            ..Default::default()
        },
        Header {
            max_age: Some(Duration::from_secs(60)),
            min_fresh: Some(Duration::from_secs(30)),
            no_transform: true,
            proxy_revalidate: true,
            s_maxage: Some(Duration::from_secs(31_536_000)),
            ..Default::default()
        },
    ];

    for header in headers {
        let formatted = header.to_string();

        assert_eq!(parse(&formatted), header, "{formatted}");
        assert_eq!(parse(&formatted).to_string(), formatted);
    }
}
