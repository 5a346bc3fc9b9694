// Common utilities for integration tests

use mockito::{Mock, Server};
use uspto_odp::prelude::*;

pub const TEST_API_KEY: &str = "test_api_key";

/// Configuration pointing at the mock server, with a generous rate limit and no retry delay
pub fn create_test_config(server_url: &str) -> Config {
    let mut config = Config::with_api_key(TEST_API_KEY)
        .with_base_url(server_url)
        .with_retry(RetryConfig::with_max_retries_and_delay(1, 0));
    config.rest_api.timeout = 10;
    config.rate_limiter = RateLimiterConfig {
        max_requests: 1000,
        period_seconds: 1,
        burst_size: 100,
    };
    config
}

/// Client talking to the mock server
pub fn create_test_client(server: &Server) -> Client {
    setup_logger();
    Client::new(create_test_config(&server.url())).expect("Failed to create test client")
}

/// Registers a JSON answer for an authenticated GET
pub async fn mock_get_json(server: &mut Server, path: &str, status: usize, body: &str) -> Mock {
    server
        .mock("GET", path)
        .match_header("x-api-key", TEST_API_KEY)
        .match_header("accept", "application/json")
        .with_status(status)
        .with_header("content-type", "application/json")
        .with_body(body)
        .create_async()
        .await
}

/// Minimal search envelope holding one application
pub fn wrapper_body(application_number: &str, patent_number: Option<&str>) -> String {
    let patent = patent_number
        .map(|p| format!(r#", "patentNumber": "{p}""#))
        .unwrap_or_default();
    format!(
        r#"{{
            "count": 1,
            "patentFileWrapperDataBag": [{{
                "applicationNumberText": "{application_number}",
                "applicationMetaData": {{
                    "inventionTitle": "OPTICAL SYSTEM FOR BARCODE SCANNER",
                    "firstInventorName": "Kai-Yuan Tien",
                    "filingDate": "2008-12-30"{patent}
                }},
                "eventDataBag": [
                    {{"eventCode": "EML_NTR", "eventDescriptionText": "Email Notification", "eventDate": "2024-05-01"}}
                ]
            }}],
            "requestIdentifier": "req-{application_number}"
        }}"#
    )
}
