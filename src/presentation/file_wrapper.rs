use crate::presentation::assignment::Assignment;
use crate::presentation::continuity::{ChildContinuity, ParentContinuity};
use crate::presentation::foreign_priority::ForeignPriority;
use crate::presentation::serialization::{
    date_opt, indicator_opt, null_as_default, null_as_empty, null_as_empty_string,
    number_as_u32_opt, string_or_number_opt,
};
use crate::presentation::transactions::TransactionEvent;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Entity status of the applicant (small, micro, regular undiscounted)
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct EntityStatus {
    /// e.g. `"Small"`, `"Micro"`, `"Regular Undiscounted"`
    #[serde(rename = "businessEntityStatusCategory", default)]
    pub business_entity_status_category: Option<String>,
    /// Whether small entity status is claimed
    #[serde(rename = "smallEntityStatusIndicator", with = "indicator_opt", default)]
    pub small_entity_status: Option<bool>,
}

/// Bibliographic data of an application (`applicationMetaData`)
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct ApplicationMetadata {
    /// Filed under first-inventor-to-file (AIA) rules
    #[serde(rename = "firstInventorToFileIndicator", with = "indicator_opt", default)]
    pub first_inventor_to_file: Option<bool>,
    /// Numeric status code
    #[serde(rename = "applicationStatusCode", with = "number_as_u32_opt", default)]
    pub application_status_code: Option<u32>,
    /// Status description
    #[serde(rename = "applicationStatusDescriptionText", default)]
    pub application_status_description: Option<String>,
    /// Date the status was set
    #[serde(rename = "applicationStatusDate", with = "date_opt", default)]
    pub application_status_date: Option<NaiveDate>,
    /// Type code, e.g. `"UTL"`
    #[serde(rename = "applicationTypeCode", default)]
    pub application_type_code: Option<String>,
    /// Type label, e.g. `"Utility"`
    #[serde(rename = "applicationTypeLabelName", default)]
    pub application_type_label: Option<String>,
    /// Type category, e.g. `"REGULAR"`
    #[serde(rename = "applicationTypeCategory", default)]
    pub application_type_category: Option<String>,
    /// Applicant entity status
    #[serde(rename = "entityStatusData", default)]
    pub entity_status: Option<EntityStatus>,
    /// Filing date
    #[serde(rename = "filingDate", with = "date_opt", default)]
    pub filing_date: Option<NaiveDate>,
    /// Effective filing date
    #[serde(rename = "effectiveFilingDate", with = "date_opt", default)]
    pub effective_filing_date: Option<NaiveDate>,
    /// Combined USPC `"class/subclass"`
    #[serde(rename = "class/subclass", default)]
    pub class_subclass: Option<String>,
    /// USPC class
    #[serde(rename = "class", default)]
    pub class: Option<String>,
    /// USPC subclass
    #[serde(rename = "subclass", default)]
    pub subclass: Option<String>,
    /// National stage entry of a PCT application
    #[serde(rename = "nationalStageIndicator", with = "indicator_opt", default)]
    pub national_stage: Option<bool>,
    /// Name of the first named inventor
    #[serde(rename = "firstInventorName", default)]
    pub first_inventor_name: Option<String>,
    /// Name of the first named applicant
    #[serde(rename = "firstApplicantName", default)]
    pub first_applicant_name: Option<String>,
    /// CPC classification symbols
    #[serde(
        rename = "cpcClassificationBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub cpc_classifications: Vec<String>,
    /// Publication dates
    #[serde(
        rename = "publicationDateBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub publication_dates: Vec<String>,
    /// Publication sequence numbers
    #[serde(
        rename = "publicationSequenceNumberBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub publication_sequence_numbers: Vec<String>,
    /// Publication categories
    #[serde(
        rename = "publicationCategoryBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub publication_categories: Vec<String>,
    /// Earliest publication date
    #[serde(rename = "earliestPublicationDate", with = "date_opt", default)]
    pub earliest_publication_date: Option<NaiveDate>,
    /// Earliest publication number, e.g. `"US20090108066A1"`
    #[serde(rename = "earliestPublicationNumber", default)]
    pub earliest_publication_number: Option<String>,
    /// Customer number of the correspondent
    #[serde(rename = "customerNumber", with = "string_or_number_opt", default)]
    pub customer_number: Option<String>,
    /// Group art unit
    #[serde(rename = "groupArtUnitNumber", with = "string_or_number_opt", default)]
    pub group_art_unit_number: Option<String>,
    /// Title of the invention
    #[serde(rename = "inventionTitle", default)]
    pub invention_title: Option<String>,
    /// Confirmation number
    #[serde(
        rename = "applicationConfirmationNumber",
        with = "string_or_number_opt",
        default
    )]
    pub application_confirmation_number: Option<String>,
    /// Primary examiner
    #[serde(rename = "examinerNameText", default)]
    pub examiner_name: Option<String>,
    /// Applicant docket number
    #[serde(rename = "docketNumber", default)]
    pub docket_number: Option<String>,
    /// Granted patent number
    #[serde(rename = "patentNumber", with = "string_or_number_opt", default)]
    pub patent_number: Option<String>,
    /// Grant date
    #[serde(rename = "grantDate", with = "date_opt", default)]
    pub grant_date: Option<NaiveDate>,
}

/// Full record of a patent application
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct PatentFileWrapper {
    /// Application number
    #[serde(
        rename = "applicationNumberText",
        deserialize_with = "null_as_empty_string::deserialize",
        default
    )]
    pub application_number: String,
    /// Bibliographic data
    #[serde(
        rename = "applicationMetaData",
        deserialize_with = "null_as_default::deserialize",
        default
    )]
    pub metadata: ApplicationMetadata,
    /// Prosecution history
    #[serde(rename = "eventDataBag", deserialize_with = "null_as_empty::deserialize", default)]
    pub events: Vec<TransactionEvent>,
    /// Recorded assignments
    #[serde(rename = "assignmentBag", deserialize_with = "null_as_empty::deserialize", default)]
    pub assignments: Vec<Assignment>,
    /// Foreign priority claims
    #[serde(
        rename = "foreignPriorityBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub foreign_priorities: Vec<ForeignPriority>,
    /// Parent applications
    #[serde(
        rename = "parentContinuityBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub parent_continuity: Vec<ParentContinuity>,
    /// Child applications
    #[serde(
        rename = "childContinuityBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub child_continuity: Vec<ChildContinuity>,
    /// When USPTO last refreshed the record
    #[serde(rename = "lastIngestionDateTime", default)]
    pub last_ingestion_date_time: Option<String>,
}

impl PatentFileWrapper {
    /// Whether a patent has been granted on the application
    #[must_use]
    pub fn is_patented(&self) -> bool {
        self.metadata.patent_number.is_some()
    }

    /// Most recent event by date
    #[must_use]
    pub fn latest_event(&self) -> Option<&TransactionEvent> {
        self.events
            .iter()
            .filter(|e| e.event_date.is_some())
            .max_by_key(|e| e.event_date)
    }
}
