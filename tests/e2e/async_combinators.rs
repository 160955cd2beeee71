//! Async combinator E2E tests.

use option_result_core::Thrown;
use option_result_core::prelude::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Mutex;

async fn length_later(value: &str) -> usize {
    tokio::task::yield_now().await;
    value.len()
}

#[allow(clippy::panic, reason = "exercises panic capture")]
async fn fail_later(message: &'static str) -> &'static str {
    tokio::task::yield_now().await;
    panic!("{message}")
}

#[tokio::test]
async fn option_and_then_async_chains_on_some() {
    let option = Some("foo")
        .and_then_async(|value| async move { Some(length_later(value).await) })
        .await;
    assert_eq!(option, Some(3));

    let option = None::<&str>
        .and_then_async(|_| async { Some("bar") })
        .await;
    assert_eq!(option, None);
}

#[tokio::test]
async fn option_or_else_async_only_runs_on_none() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let option = Some("foo")
        .or_else_async(|| async move {
            counter.fetch_add(1, Ordering::Relaxed);
            Some("bar")
        })
        .await;
    assert_eq!(option, Some("foo"));
    assert_eq!(calls.load(Ordering::Relaxed), 0);

    let option = None.or_else_async(|| async { Some("bar") }).await;
    assert_eq!(option, Some("bar"));
}

#[tokio::test]
async fn option_map_async_transforms_the_value() {
    assert_eq!(Some("foo").map_async(length_later).await, Some(3));
    assert_eq!(None::<&str>.map_async(length_later).await, None);
}

#[tokio::test]
async fn result_and_then_async_chains_on_ok() {
    let result = Ok::<_, &str>("foo")
        .and_then_async(|value| async move { Ok(length_later(value).await) })
        .await;
    assert_eq!(result, Ok(3));

    let result = Err::<&str, _>("foo")
        .and_then_async(|_| async { Ok::<_, &str>("bar") })
        .await;
    assert_eq!(result, Err("foo"));
}

#[tokio::test]
async fn result_or_else_async_recovers_from_err() {
    let result = Ok::<_, &str>("foo")
        .or_else_async(|_| async { Ok::<_, u8>("bar") })
        .await;
    assert_eq!(result, Ok("foo"));

    let result = Err::<&str, _>("foo")
        .or_else_async(|_| async { Ok::<_, u8>("bar") })
        .await;
    assert_eq!(result, Ok("bar"));
}

#[tokio::test]
async fn result_map_async_and_map_err_async_touch_one_channel() {
    assert_eq!(Ok::<_, &str>("foo").map_async(length_later).await, Ok(3));
    assert_eq!(Err::<&str, _>("foo").map_async(length_later).await, Err("foo"));
    assert_eq!(Ok::<&str, _>("foo").map_err_async(length_later).await, Ok("foo"));
    assert_eq!(Err::<&str, _>("foo").map_err_async(length_later).await, Err(3));
}

#[tokio::test]
async fn chained_steps_start_after_the_previous_settles() {
    let log = Arc::new(Mutex::new(Vec::new()));
    let first = Arc::clone(&log);
    let second = Arc::clone(&log);

    let result = Ok::<_, &str>(1)
        .and_then_async(|value| async move {
            tokio::task::yield_now().await;
            first.lock().await.push("first");
            Ok(value + 1)
        })
        .await
        .map_async(|value| async move {
            second.lock().await.push("second");
            value * 10
        })
        .await;

    assert_eq!(result, Ok(20));
    assert_eq!(*log.lock().await, vec!["first", "second"]);
}

#[tokio::test]
async fn wrap_async_resolves_to_ok() {
    let result = Result::wrap_async(async { "foo" }).await;
    assert!(matches!(result, Ok("foo")));
}

#[tokio::test]
async fn wrap_async_captures_a_panic_after_an_await() {
    let result = Result::wrap_async(fail_later("bar")).await;
    let message = result
        .err()
        .and_then(|thrown| thrown)
        .map(|thrown| thrown.message().unwrap_or_default().to_owned());
    assert_eq!(message, Some("bar".to_owned()));
}

#[tokio::test]
async fn wrap_async_maps_a_unit_payload_to_none() {
    let result: Result<(), Option<Thrown>> = Result::wrap_async(async {
        tokio::task::yield_now().await;
        std::panic::panic_any(())
    })
    .await;
    assert!(matches!(result, Err(None)));
}
