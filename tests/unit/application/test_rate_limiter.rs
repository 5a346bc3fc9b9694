use std::time::{Duration, Instant};
use uspto_odp::application::config::RateLimiterConfig;
use uspto_odp::application::rate_limiter::RateLimiter;

#[test]
fn test_burst_then_empty() {
    let limiter = RateLimiter::new(&RateLimiterConfig {
        max_requests: 60,
        period_seconds: 60,
        burst_size: 3,
    });
    assert!(limiter.check());
    assert!(limiter.check());
    assert!(limiter.check());
    assert!(!limiter.check());
}

#[test]
fn test_clones_share_bucket() {
    let limiter = RateLimiter::new(&RateLimiterConfig {
        max_requests: 1,
        period_seconds: 60,
        burst_size: 1,
    });
    let clone = limiter.clone();
    assert!(limiter.check());
    assert!(!clone.check());
}

#[tokio::test]
async fn test_wait_paces_requests() {
    let limiter = RateLimiter::new(&RateLimiterConfig {
        max_requests: 10,
        period_seconds: 1,
        burst_size: 1,
    });
    limiter.wait().await;
    let start = Instant::now();
    limiter.wait().await;
    assert!(start.elapsed() >= Duration::from_millis(50));
}

#[test]
fn test_wait_consumes_burst_tokens() {
    let limiter = RateLimiter::new(&RateLimiterConfig {
        max_requests: 60,
        period_seconds: 60,
        burst_size: 2,
    });
    tokio_test::block_on(async {
        limiter.wait().await;
        limiter.wait().await;
    });
    assert!(!limiter.check());
}
