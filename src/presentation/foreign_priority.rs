use crate::presentation::serialization::{count, date_opt, null_as_empty, null_as_empty_string};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Foreign priority claim
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ForeignPriority {
    /// Name of the foreign intellectual property office
    #[serde(
        rename = "ipOfficeName",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub office_name: String,
    /// Filing date of the foreign application
    #[serde(rename = "filingDate", with = "date_opt", default)]
    pub filing_date: Option<NaiveDate>,
    /// Foreign application number
    #[serde(
        rename = "applicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub application_number: String,
}

/// Foreign priority claims of one application
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ForeignPriorityData {
    /// US application number
    #[serde(
        rename = "applicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub application_number: String,
    /// Claims made by the application
    #[serde(
        rename = "foreignPriorityBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub foreign_priorities: Vec<ForeignPriority>,
}

/// Response of the foreign priority endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ForeignPriorityCollection {
    /// Number of records reported by the API
    #[serde(deserialize_with = "count::deserialize", default)]
    pub count: u32,
    /// One entry per application
    #[serde(
        rename = "patentFileWrapperDataBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub priorities: Vec<ForeignPriorityData>,
    /// Request identifier assigned by the API
    #[serde(rename = "requestIdentifier", default)]
    pub request_identifier: Option<String>,
}
