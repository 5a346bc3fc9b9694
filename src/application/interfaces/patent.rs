use crate::error::AppError;
use crate::model::requests::SearchRequest;
use crate::model::responses::SearchResponse;
use crate::presentation::{
    AssignmentCollection, ContinuityCollection, ForeignPriorityCollection, MimeType,
    PatentDocument, PatentDocumentCollection, PatentFileWrapper, TransactionCollection,
};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Interface for the patent application service
///
/// Every `serial_number` is a USPTO application number such as `"16123456"`;
/// separators (`"16/123,456"`) are accepted and stripped.
#[async_trait]
pub trait PatentService: Send + Sync {
    /// Gets the full file wrapper of an application
    ///
    /// Returns `AppError::NotFound` when the API answers without a record.
    async fn get_patent_wrapper(&self, serial_number: &str) -> Result<PatentFileWrapper, AppError>;

    /// Gets the file wrappers of several applications, one request each
    async fn get_multiple_patent_wrappers(
        &self,
        serial_numbers: &[String],
    ) -> Result<Vec<PatentFileWrapper>, AppError>;

    /// Gets the documents of an application's file wrapper
    async fn get_patent_documents(
        &self,
        serial_number: &str,
    ) -> Result<PatentDocumentCollection, AppError>;

    /// Downloads a document into `save_dir`
    ///
    /// # Arguments
    /// * `document` - Document returned by [`PatentService::get_patent_documents`]
    /// * `save_dir` - Existing, writable directory
    /// * `filename` - Plain file name (no path components); defaults to
    ///   `{application}_{code}_{identifier}.{ext}`
    /// * `mime_type` - Format to download
    ///
    /// # Returns
    /// * Full path of the written file
    async fn download_document(
        &self,
        document: &PatentDocument,
        save_dir: &Path,
        filename: Option<&str>,
        mime_type: MimeType,
    ) -> Result<PathBuf, AppError>;

    /// Gets parent and child continuity of an application
    async fn get_patent_continuity(
        &self,
        serial_number: &str,
    ) -> Result<ContinuityCollection, AppError>;

    /// Gets the foreign priority claims of an application
    async fn get_foreign_priority(
        &self,
        serial_number: &str,
    ) -> Result<ForeignPriorityCollection, AppError>;

    /// Gets the transaction (prosecution event) history of an application
    async fn get_patent_transactions(
        &self,
        serial_number: &str,
    ) -> Result<TransactionCollection, AppError>;

    /// Gets the recorded assignments of an application
    async fn get_patent_assignments(
        &self,
        serial_number: &str,
    ) -> Result<AssignmentCollection, AppError>;

    /// Searches applications
    async fn search_applications(&self, request: &SearchRequest)
    -> Result<SearchResponse, AppError>;

    /// Finds the application a granted patent was issued on
    ///
    /// Accepts `"US11,989,999"`, `"11,989,999"`, `"11989999"` and similar.
    /// Returns `None` when no application matches.
    async fn get_app_metadata_from_patent_number(
        &self,
        patent_number: &str,
    ) -> Result<Option<PatentFileWrapper>, AppError>;

    /// Application number for a granted patent number, `None` when unknown
    async fn get_app_number_from_patent_number(
        &self,
        patent_number: &str,
    ) -> Result<Option<String>, AppError>;
}
