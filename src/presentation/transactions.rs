use crate::presentation::serialization::{count, date_opt, null_as_empty, null_as_empty_string};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Single prosecution event recorded against an application
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct TransactionEvent {
    /// Event code, e.g. `"EML_NTR"`
    #[serde(
        rename = "eventCode",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub event_code: String,
    /// Description of the event
    #[serde(
        rename = "eventDescriptionText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub event_description: String,
    /// Date the event was recorded
    #[serde(rename = "eventDate", with = "date_opt", default)]
    pub event_date: Option<NaiveDate>,
}

/// Transaction history of one application
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ApplicationTransactions {
    /// Application number
    #[serde(
        rename = "applicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub application_number: String,
    /// Events in the order the API returns them
    #[serde(rename = "eventDataBag", deserialize_with = "null_as_empty::deserialize", default)]
    pub events: Vec<TransactionEvent>,
}

/// Response of the transactions endpoint
#[derive(Debug, Clone, PartialEq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct TransactionCollection {
    /// Number of records reported by the API
    #[serde(deserialize_with = "count::deserialize", default)]
    pub count: u32,
    /// One entry per application
    #[serde(
        rename = "patentFileWrapperDataBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub transactions: Vec<ApplicationTransactions>,
    /// Request identifier assigned by the API
    #[serde(rename = "requestIdentifier", default)]
    pub request_identifier: Option<String>,
}

impl TransactionCollection {
    /// Iterates over the events of every application
    pub fn events(&self) -> impl Iterator<Item = &TransactionEvent> {
        self.transactions.iter().flat_map(|t| t.events.iter())
    }
}
