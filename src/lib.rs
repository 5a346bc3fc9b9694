/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # USPTO ODP client
//!
//! Async client for the USPTO Open Data Portal patent application API.
//!
//! The crate is a thin pass-through: it builds requests against the ODP
//! endpoints, authenticates them with the Developer Hub API key, paces them
//! through a rate limiter and maps the JSON answers into typed models.
//!
//! ## Example
//!
//! ```ignore
//! use uspto_odp::prelude::*;
//!
//! let client = Client::with_api_key("your-api-key")?;
//! let wrapper = client.get_patent_wrapper("16123456").await?;
//! println!("{}", wrapper.metadata.invention_title.unwrap_or_default());
//! ```

/// Application layer: client, configuration, rate limiting and service traits
pub mod application;
/// Global constants
pub mod constants;
/// Error types
pub mod error;
/// HTTP plumbing, request and response envelopes
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Typed response models
pub mod presentation;
/// Environment and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
