use std::env;
use uspto_odp::application::config::Config;
use uspto_odp::model::retry::RetryConfig;

// Single test mutating USPTO_* variables so parallel tests never observe them
#[test]
fn test_config_reads_environment() {
    unsafe {
        env::set_var("USPTO_BASE_URL", "http://localhost:9999/api");
        env::set_var("USPTO_REST_TIMEOUT", "5");
        env::set_var("USPTO_RATE_LIMIT_MAX_REQUESTS", "30");
        env::set_var("USPTO_RATE_LIMIT_PERIOD_SECONDS", "10");
        env::set_var("USPTO_RATE_LIMIT_BURST_SIZE", "not_a_number");
        env::set_var("MAX_RETRY_COUNT", "7");
        env::set_var("RETRY_DELAY_SECS", "2");
    }

    let config = Config::with_api_key("env_test_key");

    unsafe {
        for var in [
            "USPTO_BASE_URL",
            "USPTO_REST_TIMEOUT",
            "USPTO_RATE_LIMIT_MAX_REQUESTS",
            "USPTO_RATE_LIMIT_PERIOD_SECONDS",
            "USPTO_RATE_LIMIT_BURST_SIZE",
            "MAX_RETRY_COUNT",
            "RETRY_DELAY_SECS",
        ] {
            env::remove_var(var);
        }
    }

    assert_eq!(config.credentials.api_key, "env_test_key");
    assert_eq!(config.rest_api.base_url, "http://localhost:9999/api");
    assert_eq!(config.rest_api.timeout, 5);
    assert_eq!(config.rate_limiter.max_requests, 30);
    assert_eq!(config.rate_limiter.period_seconds, 10);
    assert_eq!(config.rate_limiter.burst_size, 10);
    assert_eq!(config.retry.max_retries(), 7);
    assert_eq!(config.retry.delay_secs(), 2);
}

#[test]
fn test_with_base_url_trims_trailing_slash() {
    let config = Config::with_api_key("key").with_base_url("http://127.0.0.1:1234/");
    assert_eq!(config.rest_api.base_url, "http://127.0.0.1:1234");
}

#[test]
fn test_with_retry_replaces_policy() {
    let config = Config::with_api_key("key").with_retry(RetryConfig::with_max_retries_and_delay(1, 0));
    assert_eq!(config.retry.max_retries(), 1);
    assert_eq!(config.retry.delay_secs(), 0);
}

#[test]
fn test_has_api_key() {
    assert!(Config::with_api_key("key").has_api_key());
    assert!(!Config::with_api_key("  ").has_api_key());
}

#[test]
fn test_config_output_hides_api_key() {
    let config = Config::with_api_key("very-secret-key");
    assert!(!format!("{config}").contains("very-secret-key"));
    assert!(!format!("{config:?}").contains("very-secret-key"));
}
