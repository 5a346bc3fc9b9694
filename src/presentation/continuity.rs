use crate::presentation::serialization::{
    count, date_opt, indicator_opt, null_as_empty, null_as_empty_string, string_or_number_opt,
};
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Earlier application the current one claims the benefit of
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ParentContinuity {
    /// Whether the parent was filed under first-inventor-to-file rules
    #[serde(rename = "firstInventorToFileIndicator", with = "indicator_opt", default)]
    pub first_inventor_to_file: Option<bool>,
    /// Status code of the parent application
    #[serde(
        rename = "parentApplicationStatusCode",
        with = "string_or_number_opt",
        default
    )]
    pub parent_application_status_code: Option<String>,
    /// Patent number granted on the parent, if any
    #[serde(rename = "parentPatentNumber", with = "string_or_number_opt", default)]
    pub parent_patent_number: Option<String>,
    /// Status description of the parent application
    #[serde(rename = "parentApplicationStatusDescriptionText", default)]
    pub parent_application_status_description: Option<String>,
    /// Filing date of the parent application
    #[serde(rename = "parentApplicationFilingDate", with = "date_opt", default)]
    pub parent_application_filing_date: Option<NaiveDate>,
    /// Parent application number
    #[serde(
        rename = "parentApplicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub parent_application_number: String,
    /// Child application number (the one queried)
    #[serde(
        rename = "childApplicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub child_application_number: String,
    /// Relationship code, e.g. `"CON"`, `"DIV"`, `"CIP"`
    #[serde(rename = "claimParentageTypeCode", default)]
    pub claim_parentage_type_code: Option<String>,
    /// Relationship description
    #[serde(rename = "claimParentageTypeCodeDescriptionText", default)]
    pub claim_parentage_type_description: Option<String>,
}

/// Later application claiming the benefit of the current one
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ChildContinuity {
    /// Whether the child was filed under first-inventor-to-file rules
    #[serde(rename = "firstInventorToFileIndicator", with = "indicator_opt", default)]
    pub first_inventor_to_file: Option<bool>,
    /// Status code of the child application
    #[serde(
        rename = "childApplicationStatusCode",
        with = "string_or_number_opt",
        default
    )]
    pub child_application_status_code: Option<String>,
    /// Patent number granted on the child, if any
    #[serde(rename = "childPatentNumber", with = "string_or_number_opt", default)]
    pub child_patent_number: Option<String>,
    /// Status description of the child application
    #[serde(rename = "childApplicationStatusDescriptionText", default)]
    pub child_application_status_description: Option<String>,
    /// Filing date of the child application
    #[serde(rename = "childApplicationFilingDate", with = "date_opt", default)]
    pub child_application_filing_date: Option<NaiveDate>,
    /// Parent application number (the one queried)
    #[serde(
        rename = "parentApplicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub parent_application_number: String,
    /// Child application number
    #[serde(
        rename = "childApplicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub child_application_number: String,
    /// Relationship code
    #[serde(rename = "claimParentageTypeCode", default)]
    pub claim_parentage_type_code: Option<String>,
    /// Relationship description
    #[serde(rename = "claimParentageTypeCodeDescriptionText", default)]
    pub claim_parentage_type_description: Option<String>,
}

/// Continuity relationships of one application
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ApplicationContinuity {
    /// Application number
    #[serde(
        rename = "applicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub application_number: String,
    /// Parents of the application
    #[serde(
        rename = "parentContinuityBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub parent_continuity: Vec<ParentContinuity>,
    /// Children of the application
    #[serde(
        rename = "childContinuityBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub child_continuity: Vec<ChildContinuity>,
}

impl ApplicationContinuity {
    /// Parent application numbers
    pub fn parent_numbers(&self) -> impl Iterator<Item = &str> {
        self.parent_continuity
            .iter()
            .map(|p| p.parent_application_number.as_str())
    }

    /// Child application numbers
    pub fn child_numbers(&self) -> impl Iterator<Item = &str> {
        self.child_continuity
            .iter()
            .map(|c| c.child_application_number.as_str())
    }
}

/// Response of the continuity endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ContinuityCollection {
    /// Number of records reported by the API
    #[serde(deserialize_with = "count::deserialize", default)]
    pub count: u32,
    /// One entry per application
    #[serde(
        rename = "patentFileWrapperDataBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub continuities: Vec<ApplicationContinuity>,
    /// Request identifier assigned by the API
    #[serde(rename = "requestIdentifier", default)]
    pub request_identifier: Option<String>,
}
