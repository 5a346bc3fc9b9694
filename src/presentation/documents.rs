use crate::error::AppError;
use crate::presentation::serialization::{datetime, null_as_empty, number_as_u32_opt};
use chrono::{DateTime, FixedOffset};
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Format a document can be downloaded in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MimeType {
    /// Portable Document Format
    #[default]
    #[serde(rename = "PDF")]
    Pdf,
    /// Microsoft Word document
    #[serde(rename = "MS_WORD")]
    MsWord,
    /// XML full text
    #[serde(rename = "XML")]
    Xml,
}

impl MimeType {
    /// Identifier used by the API in `mimeTypeIdentifier`
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::Pdf => "PDF",
            MimeType::MsWord => "MS_WORD",
            MimeType::Xml => "XML",
        }
    }

    /// File extension used for downloads, without the dot
    #[must_use]
    pub fn extension(&self) -> &'static str {
        match self {
            MimeType::Pdf => "pdf",
            MimeType::MsWord => "doc",
            MimeType::Xml => "xml",
        }
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MimeType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "PDF" => Ok(MimeType::Pdf),
            "MS_WORD" | "MSWORD" | "DOC" => Ok(MimeType::MsWord),
            "XML" => Ok(MimeType::Xml),
            other => Err(AppError::InvalidInput(format!("unknown mime type: {other}"))),
        }
    }
}

/// Location of one downloadable rendition of a document
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct DownloadOption {
    /// Format identifier, e.g. `"PDF"`
    #[serde(rename = "mimeTypeIdentifier")]
    pub mime_type: String,
    /// Absolute download URL
    #[serde(rename = "downloadUrl")]
    pub download_url: String,
    /// Number of pages, when known
    #[serde(rename = "pageTotalQuantity", with = "number_as_u32_opt", default)]
    pub page_count: Option<u32>,
}

/// Document from the application's file wrapper
#[derive(Debug, Clone, PartialEq, Eq, DisplaySimple, Serialize, Deserialize)]
pub struct PatentDocument {
    /// Application number
    #[serde(rename = "applicationNumberText")]
    pub application_number: String,
    /// Official date of the document
    #[serde(rename = "officialDate", with = "datetime")]
    pub official_date: DateTime<FixedOffset>,
    /// Unique document identifier
    #[serde(rename = "documentIdentifier")]
    pub document_identifier: String,
    /// Document code, e.g. `"CTNF"`
    #[serde(rename = "documentCode")]
    pub document_code: String,
    /// Description of the document code
    #[serde(rename = "documentCodeDescriptionText")]
    pub document_description: String,
    /// `"INCOMING"`, `"OUTGOING"` or `"INTERNAL"`
    #[serde(rename = "directionCategory")]
    pub direction_category: String,
    /// Available renditions
    #[serde(
        rename = "downloadOptionBag",
        deserialize_with = "null_as_empty::deserialize",
        default
    )]
    pub download_options: Vec<DownloadOption>,
}

impl PatentDocument {
    /// Download option matching the requested format
    #[must_use]
    pub fn download_option(&self, mime_type: MimeType) -> Option<&DownloadOption> {
        self.download_options
            .iter()
            .find(|opt| opt.mime_type == mime_type.as_str())
    }

    /// Formats offered for this document
    #[must_use]
    pub fn available_mime_types(&self) -> Vec<String> {
        self.download_options
            .iter()
            .map(|opt| opt.mime_type.clone())
            .collect()
    }

    /// File name used when the caller does not pick one:
    /// `{application}_{code}_{identifier}.{ext}`
    #[must_use]
    pub fn default_filename(&self, mime_type: MimeType) -> String {
        format!(
            "{}_{}_{}.{}",
            self.application_number,
            self.document_code,
            self.document_identifier,
            mime_type.extension()
        )
    }
}

/// Response of the documents endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, DisplaySimple, Serialize, Deserialize)]
pub struct PatentDocumentCollection {
    /// Documents, newest first as returned by the API
    #[serde(rename = "documentBag", deserialize_with = "null_as_empty::deserialize", default)]
    pub documents: Vec<PatentDocument>,
}

impl PatentDocumentCollection {
    /// Documents with the given code
    pub fn by_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a PatentDocument> {
        self.documents.iter().filter(move |d| d.document_code == code)
    }

    /// Number of documents
    #[must_use]
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
