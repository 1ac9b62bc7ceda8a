//! Concurrency-limiter tests.

use crate::poll::CycleLimiter;
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn permits_free_on_drop() {
    let limiter = CycleLimiter::new(1);
    assert_eq!(limiter.available(), 1);

    let permit = limiter.acquire().await.expect("permit available");
    assert_eq!(limiter.available(), 0);

    drop(permit);
    assert_eq!(limiter.available(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn budget_caps_concurrent_holders() {
    let limiter = CycleLimiter::new(2);
    let first = limiter.acquire().await.expect("first permit");
    let second = limiter.acquire().await.expect("second permit");
    assert_eq!(limiter.available(), 0);

    drop(first);
    let third = limiter.acquire().await.expect("third permit");
    assert_eq!(limiter.available(), 0);

    drop(second);
    drop(third);
    assert_eq!(limiter.available(), 2);
}
