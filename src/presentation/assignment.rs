use crate::presentation::serialization::{
    count, date_opt, null_as_default, null_as_empty, null_as_empty_string, number_as_u32_opt,
};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Postal address of an assignee
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct Address {
    /// First address line
    #[serde(
        rename = "addressLineOneText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub line1: String,
    /// Second address line
    #[serde(rename = "addressLineTwoText", default)]
    pub line2: Option<String>,
    /// Third address line
    #[serde(rename = "addressLineThreeText", default)]
    pub line3: Option<String>,
    /// City
    #[serde(
        rename = "cityName",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub city: String,
    /// State or region code
    #[serde(
        rename = "geographicRegionCode",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub geographic_region: String,
    /// Postal code
    #[serde(rename = "postalCode", default)]
    pub postal_code: Option<String>,
}

/// Party transferring the rights
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct Assignor {
    /// Name of the assignor
    #[serde(
        rename = "assignorName",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub name: String,
    /// Date the assignment was executed
    #[serde(rename = "executionDate", with = "date_opt", default)]
    pub execution_date: Option<NaiveDate>,
}

/// Party receiving the rights
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct Assignee {
    /// Name of the assignee
    #[serde(
        rename = "assigneeNameText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub name: String,
    /// Address of the assignee
    #[serde(
        rename = "assigneeAddress",
        deserialize_with = "null_as_default::deserialize",
        default
    )]
    pub address: Address,
}

/// Correspondence address attached to an assignment record
///
/// The API flattens the address into the correspondent itself and does not
/// send a separate city; [`Correspondent::city`] derives it from line three.
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct Correspondent {
    /// Name of the correspondent
    #[serde(
        rename = "correspondentNameText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub name: String,
    /// First address line
    #[serde(
        rename = "addressLineOneText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub address_line_one: String,
    /// Second address line
    #[serde(rename = "addressLineTwoText", default)]
    pub address_line_two: Option<String>,
    /// Third address line, usually `"CITY, ST ZIP"`
    #[serde(rename = "addressLineThreeText", default)]
    pub address_line_three: Option<String>,
}

impl Correspondent {
    /// City part of the third address line, empty when unknown
    #[must_use]
    pub fn city(&self) -> &str {
        self.address_line_three
            .as_deref()
            .and_then(|line| line.split(',').next())
            .map(str::trim)
            .unwrap_or_default()
    }

    /// Correspondent address in the same shape as an assignee's
    #[must_use]
    pub fn address(&self) -> Address {
        Address {
            line1: self.address_line_one.clone(),
            line2: self.address_line_two.clone(),
            line3: self.address_line_three.clone(),
            city: self.city().to_string(),
            geographic_region: String::new(),
            postal_code: None,
        }
    }
}

/// Single recorded assignment
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct Assignment {
    /// Date USPTO received the assignment
    #[serde(rename = "assignmentReceivedDate", with = "date_opt", default)]
    pub received_date: Option<NaiveDate>,
    /// Date the assignment was recorded
    #[serde(rename = "assignmentRecordedDate", with = "date_opt", default)]
    pub recorded_date: Option<NaiveDate>,
    /// Date the recordation notice was mailed
    #[serde(rename = "assignmentMailedDate", with = "date_opt", default)]
    pub mailed_date: Option<NaiveDate>,
    /// Reel number
    #[serde(rename = "reelNumber", with = "number_as_u32_opt", default)]
    pub reel_number: Option<u32>,
    /// Frame number
    #[serde(rename = "frameNumber", with = "number_as_u32_opt", default)]
    pub frame_number: Option<u32>,
    /// Number of pages
    #[serde(rename = "pageNumber", with = "number_as_u32_opt", default)]
    pub page_number: Option<u32>,
    /// Combined `"reel/frame"` reference
    #[serde(
        rename = "reelNumber/frameNumber",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub reel_frame: String,
    /// Nature of the conveyance, e.g. `"ASSIGNMENT OF ASSIGNORS INTEREST"`
    #[serde(
        rename = "conveyanceText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub conveyance_text: String,
    /// Assignors
    #[serde(rename = "assignorBag", deserialize_with = "null_as_empty::deserialize", default)]
    pub assignors: Vec<Assignor>,
    /// Assignees
    #[serde(rename = "assigneeBag", deserialize_with = "null_as_empty::deserialize", default)]
    pub assignees: Vec<Assignee>,
    /// Correspondents
    #[serde(
        rename = "correspondenceAddressBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub correspondents: Vec<Correspondent>,
}

/// Assignments recorded against one application
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ApplicationAssignment {
    /// Application number
    #[serde(
        rename = "applicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub application_number: String,
    /// Assignments, oldest first as returned by the API
    #[serde(rename = "assignmentBag", deserialize_with = "null_as_empty::deserialize", default)]
    pub assignments: Vec<Assignment>,
}

/// Response of the assignment endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct AssignmentCollection {
    /// Number of records reported by the API
    #[serde(deserialize_with = "count::deserialize", default)]
    pub count: u32,
    /// One entry per application
    #[serde(
        rename = "patentFileWrapperDataBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub assignments: Vec<ApplicationAssignment>,
    /// Request identifier assigned by the API
    #[serde(rename = "requestIdentifier", default)]
    pub request_identifier: Option<String>,
}
