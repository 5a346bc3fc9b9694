// Integration tests for throttling behaviour

use crate::common::{self, mock_get_json, wrapper_body};
use mockito::Server;
use uspto_odp::prelude::*;

#[tokio::test]
async fn test_rate_limited_request_is_retried() {
    let mut server = Server::new_async().await;
    let throttled = server
        .mock("GET", "/12345678")
        .with_status(429)
        .expect(1)
        .create_async()
        .await;
    let ok = mock_get_json(&mut server, "/12345678", 200, &wrapper_body("12345678", None)).await;
    let client = common::create_test_client(&server);

    let wrapper = client.get_patent_wrapper("12345678").await.unwrap();

    assert_eq!(wrapper.application_number, "12345678");
    throttled.assert_async().await;
    ok.assert_async().await;
}

#[tokio::test]
async fn test_rate_limit_exhausted() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/12345678")
        .with_status(429)
        .expect(2)
        .create_async()
        .await;
    let client = common::create_test_client(&server);

    let result = client.get_patent_wrapper("12345678").await;

    assert!(matches!(result, Err(AppError::RateLimitExceeded)));
    mock.assert_async().await;
}
