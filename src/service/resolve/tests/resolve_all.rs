//! Tests for BatchResolver::resolve_all.
//!
//! This module verifies order preservation under out-of-order completion, fail-fast error
//! propagation and the no-request behavior for empty input.

use super::*;

/// Expect results aligned with input order even when later URLs complete first
#[tokio::test]
async fn preserves_input_order_under_reverse_completion() {
    let count = 5;
    let mut fetcher = FakeFetcher::new();
    for id in 1..=count {
        // The first URL is the slowest, the last URL the fastest
        let delay = Duration::from_millis(10 * (count - id + 1) as u64);
        fetcher = fetcher.with_delayed_json(
            url("planets", id),
            delay,
            named("planets", id, &format!("Planet {}", id)),
        );
    }
    let urls: Vec<String> = (1..=count).map(|id| url("planets", id)).collect();
    let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();

    let retry = RetryPolicy::no_retry();
    let resolver = BatchResolver::new(&fetcher, &retry);
    let result = resolver.resolve_all::<Reference>(&url_refs).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let resolved = result.unwrap();
    assert_eq!(resolved.len(), urls.len());
    for (index, reference) in resolved.iter().enumerate() {
        assert_eq!(reference.url.as_deref(), Some(urls[index].as_str()));
        assert_eq!(
            reference.name.as_deref(),
            Some(format!("Planet {}", index + 1).as_str())
        );
    }
}

/// Expect the same URL requested twice to resolve twice, once per position
#[tokio::test]
async fn resolves_duplicate_urls_per_position() {
    let fetcher = FakeFetcher::new().with_json(url("films", 1), json!({ "title": "A New Hope" }));
    let film = url("films", 1);

    let retry = RetryPolicy::no_retry();
    let resolver = BatchResolver::new(&fetcher, &retry);
    let resolved = resolver
        .resolve_all::<Reference>(&[film.as_str(), film.as_str()])
        .await
        .unwrap();

    assert_eq!(resolved.len(), 2);
    assert_eq!(fetcher.calls_to(&film), 2);
}

/// Expect empty output and no requests for empty input
#[tokio::test]
async fn returns_empty_without_requests_for_empty_input() {
    let fetcher = FakeFetcher::new();

    let retry = RetryPolicy::no_retry();
    let resolver = BatchResolver::new(&fetcher, &retry);
    let result = resolver.resolve_all::<Reference>(&[]).await;

    assert_eq!(result.unwrap(), Vec::new());
    assert_eq!(fetcher.call_count(), 0);
}

/// Expect the failure of any member to surface instead of a short list
#[tokio::test]
async fn fails_fast_when_one_fetch_fails() {
    let fetcher = FakeFetcher::new()
        .with_delayed_json(
            url("starships", 1),
            Duration::from_millis(200),
            named("starships", 1, "X-wing"),
        )
        .with_status(url("starships", 2), 404)
        .with_delayed_json(
            url("starships", 3),
            Duration::from_millis(200),
            named("starships", 3, "Imperial shuttle"),
        );
    let urls = [url("starships", 1), url("starships", 2), url("starships", 3)];
    let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();

    let retry = RetryPolicy::no_retry();
    let resolver = BatchResolver::new(&fetcher, &retry);
    let started = tokio::time::Instant::now();
    let result = resolver.resolve_all::<Reference>(&url_refs).await;

    match result {
        Err(FetchError::HttpStatus { status, url: failed }) => {
            assert_eq!(status, 404);
            assert_eq!(failed, urls[1]);
        }
        other => panic!("Expected HttpStatus error, got {:?}", other),
    }
    // The slow siblings were not awaited
    assert!(started.elapsed() < Duration::from_millis(200));
}

/// Expect a decode error when a member is not the expected shape
#[tokio::test]
async fn fails_when_member_has_unexpected_shape() {
    let fetcher = FakeFetcher::new()
        .with_json(url("species", 1), named("species", 1, "Human"))
        .with_json(url("species", 2), json!(["not", "an", "object"]));
    let urls = [url("species", 1), url("species", 2)];
    let url_refs: Vec<&str> = urls.iter().map(String::as_str).collect();

    let retry = RetryPolicy::no_retry();
    let resolver = BatchResolver::new(&fetcher, &retry);
    let result = resolver.resolve_all::<Reference>(&url_refs).await;

    assert!(matches!(result, Err(FetchError::Decode { .. })));
}

/// Expect transient failures to be retried transparently within the batch
#[tokio::test]
async fn retries_transient_member_failures() {
    let fetcher = FakeFetcher::new()
        .with_json(url("vehicles", 14), named("vehicles", 14, "Snowspeeder"))
        .with_transient_failures(&url("vehicles", 14), 2);
    let vehicle = url("vehicles", 14);

    let retry = RetryPolicy::new(3, Duration::from_millis(1));
    let resolver = BatchResolver::new(&fetcher, &retry);
    let result = resolver.resolve_all::<Reference>(&[vehicle.as_str()]).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(fetcher.calls_to(&vehicle), 3);
}
