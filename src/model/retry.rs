/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::{DEFAULT_MAX_RETRIES, DEFAULT_RETRY_DELAY_SECS};
use crate::utils::config::get_env_or_none;
use std::time::Duration;

/// Retry policy applied when the API answers `429 Too Many Requests`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryConfig {
    /// Maximum number of retries (None or 0 = retry until the API accepts)
    pub max_retry_count: Option<u32>,
    /// Delay in seconds between retries (None = 10 seconds)
    pub retry_delay_secs: Option<u64>,
}

impl RetryConfig {
    /// Same as [`RetryConfig::default`]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Retries forever with the default delay
    #[must_use]
    pub fn infinite() -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: None,
        }
    }

    /// Bounded retries with the default delay
    #[must_use]
    pub fn with_max_retries(max_retries: u32) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: None,
        }
    }

    /// Unbounded retries with a custom delay
    #[must_use]
    pub fn with_delay(delay_secs: u64) -> Self {
        Self {
            max_retry_count: None,
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Bounded retries with a custom delay
    #[must_use]
    pub fn with_max_retries_and_delay(max_retries: u32, delay_secs: u64) -> Self {
        Self {
            max_retry_count: Some(max_retries),
            retry_delay_secs: Some(delay_secs),
        }
    }

    /// Maximum retry count (0 = unbounded)
    #[must_use]
    pub fn max_retries(&self) -> u32 {
        self.max_retry_count.unwrap_or(0)
    }

    /// Delay between retries in seconds (default: 10)
    #[must_use]
    pub fn delay_secs(&self) -> u64 {
        self.retry_delay_secs.unwrap_or(DEFAULT_RETRY_DELAY_SECS)
    }

    /// Delay between retries
    #[must_use]
    pub fn delay(&self) -> Duration {
        Duration::from_secs(self.delay_secs())
    }

    /// Whether another attempt is allowed after `retries_done` retries
    #[must_use]
    pub fn allows_retry(&self, retries_done: u32) -> bool {
        match self.max_retry_count {
            None | Some(0) => true,
            Some(max) => retries_done < max,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        let max_retry_count: Option<u32> =
            get_env_or_none("MAX_RETRY_COUNT").or(Some(DEFAULT_MAX_RETRIES));
        let retry_delay_secs: Option<u64> = get_env_or_none("RETRY_DELAY_SECS");

        Self {
            max_retry_count,
            retry_delay_secs,
        }
    }
}
