//! Parsing headers from asynchronous readers.

#![cfg(feature = "tokio")]

use std::time::Duration;

use cache_control_header::{ParseOptions, ReadError, parse_async_reader};

#[tokio::test]
async fn test_parse_async_reader() {
    let header = parse_async_reader(&b"max-stale=120, only-if-cached"[..], &ParseOptions::default())
        .await
        .unwrap();

    assert_eq!(header.max_stale, Some(Duration::from_secs(120)));
    assert!(header.only_if_cached);
}

#[tokio::test]
async fn test_parse_async_reader_reports_parse_errors() {
    let err = parse_async_reader(&b"max-stale=later"[..], &ParseOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ReadError::Parse(_)));
}

#[tokio::test]
async fn test_parse_async_reader_reports_read_failures() {
    let err = parse_async_reader(&b"\xff\xfe"[..], &ParseOptions::default())
        .await
        .unwrap_err();

    assert!(matches!(err, ReadError::Io(_)));
}
