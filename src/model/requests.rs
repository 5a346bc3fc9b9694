/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::constants::PATENT_NUMBER_FILTER;
use crate::error::AppError;
use once_cell::sync::Lazy;
use pretty_simple_display::DisplaySimple;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Separators users commonly type inside patent and application numbers
const SEPARATORS: &[char] = &[' ', ',', '.', '/', '-', '\t'];

/// Optional `US` prefix, the number itself (with a reissue/design/plant
/// prefix when present) and an optional kind code such as `B2` or `E`
static PATENT_NUMBER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:US)?((?:RE|PP|RX|AI|[DHTX])?\d+)(?:[A-Z]\d?)?$")
        .expect("valid patent number pattern")
});

fn strip_separators(raw: &str) -> String {
    raw.chars()
        .filter(|c| !SEPARATORS.contains(c))
        .collect::<String>()
        .to_ascii_uppercase()
}

/// Normalises a granted patent number to the form the search API indexes
///
/// `"US11,989,999"`, `"11,989,999"`, `"11989999"` and `"US 11989999 B2"` all
/// become `"11989999"`. Reissue, design and plant prefixes are kept
/// (`"RE49,000"` becomes `"RE49000"`).
///
/// # Errors
/// `AppError::InvalidInput` when nothing resembling a patent number remains.
pub fn normalize_patent_number(raw: &str) -> Result<String, AppError> {
    let cleaned = strip_separators(raw);
    PATENT_NUMBER_RE
        .captures(&cleaned)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| AppError::InvalidInput(format!("invalid patent number: {raw:?}")))
}

/// Normalises an application (serial) number before it is placed in a URL
///
/// `"16/123,456"` becomes `"16123456"`. PCT style numbers keep their letters.
///
/// # Errors
/// `AppError::InvalidInput` when the result is empty or holds anything other
/// than ASCII letters and digits.
pub fn normalize_application_number(raw: &str) -> Result<String, AppError> {
    let cleaned = strip_separators(raw);
    if cleaned.is_empty() || !cleaned.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(AppError::InvalidInput(format!(
            "invalid application number: {raw:?}"
        )));
    }
    Ok(cleaned)
}

/// Paging window for search requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct Pagination {
    /// Index of the first record
    pub offset: u32,
    /// Maximum number of records
    pub limit: u32,
}

/// Body of `POST /search`
#[derive(Debug, Clone, Default, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct SearchRequest {
    /// Free text query
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub q: Option<String>,
    /// Exact match filters keyed by field path
    #[serde(skip_serializing_if = "BTreeMap::is_empty", default)]
    pub filters: BTreeMap<String, String>,
    /// Paging window
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pagination: Option<Pagination>,
}

impl SearchRequest {
    /// Creates an empty request
    pub fn new() -> Self {
        Self::default()
    }

    /// Request matching a granted patent number, normalised first
    ///
    /// # Errors
    /// `AppError::InvalidInput` when the number cannot be normalised.
    pub fn by_patent_number(patent_number: &str) -> Result<Self, AppError> {
        let number = normalize_patent_number(patent_number)?;
        Ok(Self::new().with_filter(PATENT_NUMBER_FILTER, number))
    }

    /// Set the free text query
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    /// Add an exact match filter
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    /// Set the paging window
    pub fn with_pagination(mut self, offset: u32, limit: u32) -> Self {
        self.pagination = Some(Pagination { offset, limit });
        self
    }

    /// Whether the request would match everything
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.q.as_deref().is_none_or(|q| q.trim().is_empty()) && self.filters.is_empty()
    }
}
