/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types returned by the client

use pretty_simple_display::DisplaySimple;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Error payload returned by the USPTO API on a non-success status
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct UsptoError {
    /// Error code, taken from the body or falling back to the HTTP status
    pub code: u16,
    /// Short error message
    pub error: String,
    /// Longer explanation, when the API sends one
    pub error_details: Option<String>,
    /// Identifier of the failed request, useful when contacting USPTO support
    pub request_identifier: Option<String>,
}

impl UsptoError {
    /// Builds an error from a response body, filling gaps from the status code
    ///
    /// # Arguments
    /// * `status` - HTTP status of the response
    /// * `body` - Parsed JSON body; anything that is not an object is treated as empty
    #[must_use]
    pub fn from_body(status: StatusCode, body: &Value) -> Self {
        let text = |key: &str| body.get(key).and_then(Value::as_str).map(str::to_owned);

        let code = body
            .get("code")
            .and_then(|c| match c {
                Value::Number(n) => n.as_u64(),
                Value::String(s) => s.parse().ok(),
                _ => None,
            })
            .and_then(|c| u16::try_from(c).ok())
            .unwrap_or_else(|| status.as_u16());

        Self {
            code,
            error: text("error").unwrap_or_else(|| default_message(status).to_string()),
            error_details: text("errorDetails").or_else(|| text("errorDetailed")),
            request_identifier: text("requestIdentifier"),
        }
    }

    /// Human readable description of the error code
    #[must_use]
    pub fn status_description(&self) -> &'static str {
        match self.code {
            400 => "Bad Request - Invalid request parameters",
            403 => "Forbidden - Authentication failed or access denied",
            404 => "Not Found - Patent application doesn't exist",
            500 => "Internal Server Error - USPTO API issue",
            _ => "Unknown Error",
        }
    }

    /// Formats the error as the multi-line block written to the log
    #[must_use]
    pub fn log_message(&self) -> String {
        format!(
            "USPTO API Error: {} - {}\nError Message: {}\nDetails: {}\nRequest ID: {}",
            self.code,
            self.status_description(),
            self.error,
            self.error_details.as_deref().unwrap_or("No details provided"),
            self.request_identifier
                .as_deref()
                .unwrap_or("No request ID provided"),
        )
    }
}

fn default_message(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "Bad Request",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown Error",
    }
}

/// Main error type for the library
#[derive(Debug)]
pub enum AppError {
    /// Transport level failure
    Network(reqwest::Error),
    /// JSON (de)serialization failure
    Json(serde_json::Error),
    /// File system failure
    Io(std::io::Error),
    /// The API answered with an error payload
    Api(UsptoError),
    /// Unexpected HTTP status outside the JSON API (document downloads)
    Unexpected(StatusCode),
    /// Rate limit still exceeded after the configured retries
    RateLimitExceeded,
    /// The API answered but returned no matching record
    NotFound,
    /// Caller supplied an unusable argument
    InvalidInput(String),
    /// Download target directory is missing or not writable
    InvalidSavePath(String),
    /// Requested document format is not offered for the document
    MimeTypeUnavailable {
        /// Requested format
        requested: String,
        /// Formats the document can be downloaded in
        available: Vec<String>,
    },
    /// Response body did not match the expected model
    Deserialization(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Network(e) => write!(f, "network error: {e}"),
            AppError::Json(e) => write!(f, "json error: {e}"),
            AppError::Io(e) => write!(f, "io error: {e}"),
            AppError::Api(e) => write!(
                f,
                "{}: {} - {}",
                e.code,
                e.error,
                e.error_details.as_deref().unwrap_or("No details provided")
            ),
            AppError::Unexpected(status) => write!(f, "unexpected status: {status}"),
            AppError::RateLimitExceeded => write!(f, "rate limit exceeded"),
            AppError::NotFound => write!(f, "not found"),
            AppError::InvalidInput(msg) => write!(f, "invalid input: {msg}"),
            AppError::InvalidSavePath(msg) => write!(f, "invalid save path: {msg}"),
            AppError::MimeTypeUnavailable {
                requested,
                available,
            } => write!(
                f,
                "Mime type '{requested}' not available for this document. Available types: {}",
                available.join(", ")
            ),
            AppError::Deserialization(msg) => write!(f, "deserialization error: {msg}"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Network(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        AppError::Network(e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Json(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<UsptoError> for AppError {
    fn from(e: UsptoError) -> Self {
        AppError::Api(e)
    }
}

impl AppError {
    /// HTTP status code carried by the error, if any
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AppError::Api(e) => Some(e.code),
            AppError::Unexpected(status) => Some(status.as_u16()),
            AppError::Network(e) => e.status().map(|s| s.as_u16()),
            AppError::RateLimitExceeded => Some(429),
            _ => None,
        }
    }
}
