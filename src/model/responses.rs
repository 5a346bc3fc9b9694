/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
use crate::presentation::file_wrapper::PatentFileWrapper;
use crate::presentation::serialization::{count, null_as_empty};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Envelope shared by the application lookup and search endpoints
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Number of matching records reported by the API
    #[serde(deserialize_with = "count::deserialize", default)]
    pub count: u32,
    /// Matching applications
    #[serde(
        rename = "patentFileWrapperDataBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub patent_file_wrapper_data_bag: Vec<PatentFileWrapper>,
    /// Request identifier assigned by the API
    #[serde(rename = "requestIdentifier", default)]
    pub request_identifier: Option<String>,
}

impl SearchResponse {
    /// First matching application
    #[must_use]
    pub fn first(&self) -> Option<&PatentFileWrapper> {
        self.patent_file_wrapper_data_bag.first()
    }

    /// Takes the first matching application
    #[must_use]
    pub fn into_first(self) -> Option<PatentFileWrapper> {
        self.patent_file_wrapper_data_bag.into_iter().next()
    }

    /// Application numbers of all matches
    pub fn application_numbers(&self) -> impl Iterator<Item = &str> {
        self.patent_file_wrapper_data_bag
            .iter()
            .map(|w| w.application_number.as_str())
    }

    /// Whether nothing matched
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patent_file_wrapper_data_bag.is_empty()
    }
}
