/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

use crate::application::config::Config;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{API_KEY_HEADER, USER_AGENT};
use crate::error::{AppError, UsptoError};
use crate::model::retry::RetryConfig;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, error, warn};

/// HTTP transport for the USPTO ODP API
///
/// Adds the API key and content negotiation headers, resolves paths against
/// the configured base URL, paces every call through the shared rate limiter
/// and turns error answers into [`AppError`].
pub struct HttpClient {
    http_client: Client,
    config: Arc<Config>,
    rate_limiter: Arc<RwLock<RateLimiter>>,
}

impl HttpClient {
    /// Creates the transport
    ///
    /// # Errors
    /// `AppError::Network` when the underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;
        let rate_limiter = Arc::new(RwLock::new(RateLimiter::new(&config.rate_limiter)));

        Ok(Self {
            http_client,
            config,
            rate_limiter,
        })
    }

    /// Configuration the transport was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Resolves a path against the base URL; absolute URLs pass through
    pub fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.config.rest_api.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Makes a GET request and deserializes the JSON answer
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self
            .request_internal(Method::GET, path, &None::<()>)
            .await?;
        self.parse_response(path, response).await
    }

    /// Makes a POST request with a JSON body and deserializes the JSON answer
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, AppError> {
        let response = self
            .request_internal(Method::POST, path, &Some(body))
            .await?;
        self.parse_response(path, response).await
    }

    /// Makes a GET request and hands back the raw response for streaming
    ///
    /// Used for document downloads: a non-success status is reported as
    /// `AppError::Unexpected` since the body is not a JSON API error.
    pub async fn get_raw(&self, path: &str) -> Result<Response, AppError> {
        let url = self.url(path);
        let api_key = self.config.credentials.api_key.clone();
        let headers = vec![(API_KEY_HEADER, api_key.as_str())];

        let response = send_with_retry(
            &self.http_client,
            self.rate_limiter.clone(),
            Method::GET,
            &url,
            headers,
            &None::<()>,
            &self.config.retry,
        )
        .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Download failed with status {}: {}", status, url);
            return Err(AppError::Unexpected(status));
        }
        Ok(response)
    }

    async fn request_internal<B: Serialize>(
        &self,
        method: Method,
        path: &str,
        body: &Option<B>,
    ) -> Result<Response, AppError> {
        let url = self.url(path);
        let api_key = self.config.credentials.api_key.clone();

        let mut headers = vec![
            (API_KEY_HEADER, api_key.as_str()),
            ("Accept", "application/json"),
        ];
        if body.is_some() {
            headers.push(("Content-Type", "application/json"));
        }

        make_http_request(
            &self.http_client,
            self.rate_limiter.clone(),
            method,
            &url,
            headers,
            body,
            &self.config.retry,
        )
        .await
    }

    async fn parse_response<T: DeserializeOwned>(
        &self,
        path: &str,
        response: Response,
    ) -> Result<T, AppError> {
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            error!("Failed to deserialize response of {}: {}", path, e);
            AppError::Deserialization(format!("{path}: {e}"))
        })
    }
}

/// Makes an HTTP request with rate limiting, retry on 429 and error mapping
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `rate_limiter` - Shared rate limiter to control request rate
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body (serialized to JSON)
/// * `retry_config` - Retry policy for 429 answers
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response
/// * `Err(AppError::RateLimitExceeded)` - Still throttled after the allowed retries
/// * `Err(AppError::Api)` - Any other non-success status, with the API's error payload
///
/// # Example
///
/// ```ignore
/// use uspto_odp::model::http::make_http_request;
/// use uspto_odp::model::retry::RetryConfig;
/// use reqwest::{Client, Method};
///
/// let response = make_http_request(
///     &Client::new(),
///     rate_limiter.clone(),
///     Method::GET,
///     "https://api.uspto.gov/api/v1/patent/applications/16123456",
///     vec![("X-API-KEY", "your-api-key"), ("Accept", "application/json")],
///     &None::<()>,
///     &RetryConfig::with_max_retries_and_delay(3, 5),
/// ).await?;
/// ```
pub async fn make_http_request<B: Serialize>(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let response = send_with_retry(
        client,
        rate_limiter,
        method,
        url,
        headers,
        body,
        retry_config,
    )
    .await?;

    if response.status().is_success() {
        return Ok(response);
    }
    Err(AppError::Api(error_from_response(response).await))
}

/// Sends a request, retrying while the API answers 429
///
/// Any other status, success or not, is returned to the caller.
async fn send_with_retry<B: Serialize>(
    client: &Client,
    rate_limiter: Arc<RwLock<RateLimiter>>,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: &Option<B>,
    retry_config: &RetryConfig,
) -> Result<Response, AppError> {
    let mut retry_count: u32 = 0;

    loop {
        {
            let limiter = rate_limiter.read().await;
            limiter.wait().await;
        }

        debug!("{} {}", method, url);

        let mut request = client.request(method.clone(), url);
        for (name, value) in &headers {
            request = request.header(*name, *value);
        }
        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::TOO_MANY_REQUESTS {
            return Ok(response);
        }

        if !retry_config.allows_retry(retry_count) {
            error!(
                "Rate limit exceeded after {} attempts. Max retries ({}) reached.",
                retry_count + 1,
                retry_config.max_retries()
            );
            return Err(AppError::RateLimitExceeded);
        }

        retry_count += 1;
        warn!(
            "Rate limit exceeded (attempt {}). Waiting {} seconds before retry...",
            retry_count,
            retry_config.delay_secs()
        );
        tokio::time::sleep(retry_config.delay()).await;
    }
}

/// Reads an error answer into a [`UsptoError`] and logs it
async fn error_from_response(response: Response) -> UsptoError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let value = serde_json::from_str::<Value>(&body).unwrap_or(Value::Null);

    let err = UsptoError::from_body(status, &value);
    error!("{}", err.log_message());
    err
}
