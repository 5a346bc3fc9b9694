/// Base URL of the USPTO ODP patent application endpoints
pub const DEFAULT_BASE_URL: &str = "https://api.uspto.gov/api/v1/patent/applications";
/// Default timeout in seconds for REST requests
pub const DEFAULT_REST_TIMEOUT_SECS: u64 = 30;
/// Maximum number of requests allowed per rate limit period
pub const DEFAULT_RATE_LIMIT_MAX_REQUESTS: u32 = 60;
/// Rate limit period in seconds
pub const DEFAULT_RATE_LIMIT_PERIOD_SECONDS: u64 = 60;
/// Number of requests that can be made at once before pacing kicks in
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 10;
/// Default number of retries when the API answers 429
pub const DEFAULT_MAX_RETRIES: u32 = 3;
/// Default delay in seconds between retries
pub const DEFAULT_RETRY_DELAY_SECS: u64 = 10;
/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("uspto-odp-rs/", env!("CARGO_PKG_VERSION"));
/// Header carrying the Developer Hub API key
pub const API_KEY_HEADER: &str = "X-API-KEY";
/// Search filter field holding the granted patent number
pub const PATENT_NUMBER_FILTER: &str = "applicationMetaData.patentNumber";
