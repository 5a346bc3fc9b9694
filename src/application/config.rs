use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RATE_LIMIT_BURST_SIZE,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
    DEFAULT_REST_TIMEOUT_SECS, DEFAULT_RETRY_DELAY_SECS,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_or_default, get_required_env};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::debug;

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Credentials for the USPTO Open Data Portal
pub struct Credentials {
    /// API key obtained from the USPTO Developer Hub
    #[serde(skip_serializing)]
    pub api_key: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL of the patent application endpoints
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the USPTO ODP client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Retry behaviour when the API answers 429
    #[serde(skip, default = "RetryConfig::default")]
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Builds the configuration from the environment
    ///
    /// Loads `.env` first when present, then reads:
    /// `USPTO_API_KEY`, `USPTO_BASE_URL`, `USPTO_REST_TIMEOUT`,
    /// `USPTO_RATE_LIMIT_MAX_REQUESTS`, `USPTO_RATE_LIMIT_PERIOD_SECONDS`,
    /// `USPTO_RATE_LIMIT_BURST_SIZE`, `MAX_RETRY_COUNT` and `RETRY_DELAY_SECS`.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        Self::with_api_key(get_required_env("USPTO_API_KEY"))
    }

    /// Builds the configuration with an explicit API key
    ///
    /// Every other setting is still read from the environment, with defaults.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Config {
            credentials: Credentials {
                api_key: api_key.into(),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("USPTO_BASE_URL", DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_default("USPTO_REST_TIMEOUT", DEFAULT_REST_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "USPTO_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "USPTO_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECONDS,
                ),
                burst_size: get_env_or_default(
                    "USPTO_RATE_LIMIT_BURST_SIZE",
                    DEFAULT_RATE_LIMIT_BURST_SIZE,
                ),
            },
            retry: RetryConfig::with_max_retries_and_delay(
                get_env_or_default("MAX_RETRY_COUNT", DEFAULT_MAX_RETRIES),
                get_env_or_default("RETRY_DELAY_SECS", DEFAULT_RETRY_DELAY_SECS),
            ),
        }
    }

    /// Replaces the base URL, mainly for pointing the client at a mock server
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Replaces the retry policy
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Returns true when an API key has been configured
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        !self.credentials.api_key.trim().is_empty()
    }
}
