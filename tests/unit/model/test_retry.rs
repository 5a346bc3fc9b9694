use std::time::Duration;
use uspto_odp::model::retry::RetryConfig;

#[test]
fn test_retry_config_infinite() {
    let config = RetryConfig::infinite();
    assert_eq!(config.max_retries(), 0);
    assert_eq!(config.delay_secs(), 10);
    assert!(config.allows_retry(1_000));
}

#[test]
fn test_retry_config_with_max_retries() {
    let config = RetryConfig::with_max_retries(5);
    assert_eq!(config.max_retries(), 5);
    assert_eq!(config.delay_secs(), 10);
}

#[test]
fn test_retry_config_with_delay() {
    let config = RetryConfig::with_delay(30);
    assert_eq!(config.max_retries(), 0);
    assert_eq!(config.delay(), Duration::from_secs(30));
}

#[test]
fn test_retry_config_with_max_retries_and_delay() {
    let config = RetryConfig::with_max_retries_and_delay(3, 15);
    assert_eq!(config.max_retries(), 3);
    assert_eq!(config.delay_secs(), 15);
}

#[test]
fn test_retry_config_allows_retry_bounded() {
    let config = RetryConfig::with_max_retries(2);
    assert!(config.allows_retry(0));
    assert!(config.allows_retry(1));
    assert!(!config.allows_retry(2));
}

#[test]
fn test_retry_config_zero_means_unbounded() {
    let config = RetryConfig::with_max_retries(0);
    assert!(config.allows_retry(50));
}

#[test]
fn test_retry_config_default() {
    let config = RetryConfig::default();
    assert!(config.max_retry_count.is_some());
}
