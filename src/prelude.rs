/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # USPTO ODP Prelude
//!
//! Imports the types needed for most interactions with the Open Data Portal.
//!
//! ## Usage
//!
//! ```rust
//! use uspto_odp::prelude::*;
//!
//! let config = Config::with_api_key("your-api-key");
//! let client = Client::new(config);
//! assert!(client.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the USPTO ODP client
pub use crate::application::config::{Config, Credentials, RateLimiterConfig, RestApiConfig};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Error types
pub use crate::error::{AppError, UsptoError};

// ============================================================================
// CLIENT AND SERVICES
// ============================================================================

/// Client implementation
pub use crate::application::client::Client;

/// Patent service trait
pub use crate::application::interfaces::PatentService;

/// HTTP transport
pub use crate::model::http::HttpClient;

/// Retry policy
pub use crate::model::retry::RetryConfig;

/// Rate limiting
pub use crate::application::rate_limiter::RateLimiter;

// ============================================================================
// REQUESTS AND RESPONSES
// ============================================================================

/// Search request and identifier helpers
pub use crate::model::requests::{
    Pagination, SearchRequest, normalize_application_number, normalize_patent_number,
};

/// Search response envelope
pub use crate::model::responses::SearchResponse;

// ============================================================================
// MODELS
// ============================================================================

/// Application record models
pub use crate::presentation::file_wrapper::{ApplicationMetadata, EntityStatus, PatentFileWrapper};

/// Document models
pub use crate::presentation::documents::{
    DownloadOption, MimeType, PatentDocument, PatentDocumentCollection,
};

/// Continuity models
pub use crate::presentation::continuity::{
    ApplicationContinuity, ChildContinuity, ContinuityCollection, ParentContinuity,
};

/// Foreign priority models
pub use crate::presentation::foreign_priority::{
    ForeignPriority, ForeignPriorityCollection, ForeignPriorityData,
};

/// Transaction models
pub use crate::presentation::transactions::{
    ApplicationTransactions, TransactionCollection, TransactionEvent,
};

/// Assignment models
pub use crate::presentation::assignment::{
    Address, ApplicationAssignment, Assignee, Assignment, AssignmentCollection, Assignor,
    Correspondent,
};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Global constants
pub use crate::constants::*;

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

/// Re-export commonly used external types
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use std::sync::Arc;
pub use tokio;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date handling
pub use chrono::{DateTime, FixedOffset, NaiveDate};
