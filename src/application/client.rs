/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Client for the USPTO ODP patent application API
//!
//! # Example
//! ```ignore
//! use uspto_odp::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let documents = client.get_patent_documents("16123456").await?;
//! for doc in &documents.documents {
//!     println!("{} {}", doc.document_code, doc.document_description);
//! }
//! ```

use crate::application::config::Config;
use crate::application::interfaces::patent::PatentService;
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::requests::{SearchRequest, normalize_application_number};
use crate::model::responses::SearchResponse;
use crate::presentation::{
    AssignmentCollection, ContinuityCollection, ForeignPriorityCollection, MimeType,
    PatentDocument, PatentDocumentCollection, PatentFileWrapper, TransactionCollection,
};
use async_trait::async_trait;
use std::ffi::OsStr;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs::{self, File};
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info, warn};

/// Async client for the USPTO Open Data Portal
///
/// Cheap to clone; clones share the connection pool and the rate limiter.
#[derive(Clone)]
pub struct Client {
    http_client: Arc<HttpClient>,
}

impl Client {
    /// Creates a client from a configuration
    ///
    /// # Errors
    /// `AppError::Network` when the HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, AppError> {
        if !config.has_api_key() {
            warn!("No USPTO API key configured, requests will be rejected");
        }
        Ok(Self {
            http_client: Arc::new(HttpClient::new(config)?),
        })
    }

    /// Creates a client with an explicit API key; other settings come from the environment
    pub fn with_api_key(api_key: impl Into<String>) -> Result<Self, AppError> {
        Self::new(Config::with_api_key(api_key))
    }

    /// Configuration in use
    pub fn config(&self) -> &Config {
        self.http_client.config()
    }

    async fn get_for_application<T>(&self, serial_number: &str, suffix: &str) -> Result<T, AppError>
    where
        T: serde::de::DeserializeOwned,
    {
        let serial = normalize_application_number(serial_number)?;
        let path = if suffix.is_empty() {
            serial
        } else {
            format!("{serial}/{suffix}")
        };
        self.http_client.get(&path).await
    }
}

fn not_writable(save_dir: &Path) -> AppError {
    AppError::InvalidSavePath(format!("Save path is not writable: {}", save_dir.display()))
}

impl Default for Client {
    /// Client configured from the environment, see [`Config::new`]
    ///
    /// # Panics
    /// When the underlying HTTP client cannot be built (TLS backend failure).
    fn default() -> Self {
        let config = Config::default();
        Self::new(config).expect("Failed to create HTTP client")
    }
}

#[async_trait]
impl PatentService for Client {
    async fn get_patent_wrapper(&self, serial_number: &str) -> Result<PatentFileWrapper, AppError> {
        info!("Getting patent file wrapper: {}", serial_number);
        let response: SearchResponse = self.get_for_application(serial_number, "").await?;
        let wrapper = response.into_first().ok_or(AppError::NotFound)?;
        debug!(
            "File wrapper obtained for {}: {} events",
            wrapper.application_number,
            wrapper.events.len()
        );
        Ok(wrapper)
    }

    async fn get_multiple_patent_wrappers(
        &self,
        serial_numbers: &[String],
    ) -> Result<Vec<PatentFileWrapper>, AppError> {
        if serial_numbers.is_empty() {
            return Ok(Vec::new());
        }
        info!("Getting {} patent file wrappers", serial_numbers.len());

        let mut wrappers = Vec::with_capacity(serial_numbers.len());
        for serial in serial_numbers {
            match self.get_patent_wrapper(serial).await {
                Ok(wrapper) => wrappers.push(wrapper),
                Err(e) => {
                    error!("Failed to get file wrapper for {}: {}", serial, e);
                    return Err(e);
                }
            }
        }

        debug!("File wrappers obtained: {}", wrappers.len());
        Ok(wrappers)
    }

    async fn get_patent_documents(
        &self,
        serial_number: &str,
    ) -> Result<PatentDocumentCollection, AppError> {
        info!("Getting documents: {}", serial_number);
        let result: PatentDocumentCollection =
            self.get_for_application(serial_number, "documents").await?;
        debug!("Documents obtained: {} documents", result.documents.len());
        Ok(result)
    }

    async fn download_document(
        &self,
        document: &PatentDocument,
        save_dir: &Path,
        filename: Option<&str>,
        mime_type: MimeType,
    ) -> Result<PathBuf, AppError> {
        let metadata = fs::metadata(save_dir).await.map_err(|_| {
            AppError::InvalidSavePath(format!("Save path does not exist: {}", save_dir.display()))
        })?;
        if !metadata.is_dir() {
            return Err(AppError::InvalidSavePath(format!(
                "Save path is not a directory: {}",
                save_dir.display()
            )));
        }
        if metadata.permissions().readonly() {
            return Err(not_writable(save_dir));
        }

        let filename = match filename {
            Some(name) if !name.trim().is_empty() => {
                if Path::new(name).file_name() != Some(OsStr::new(name)) {
                    return Err(AppError::InvalidInput(format!(
                        "filename must not contain path components: {name:?}"
                    )));
                }
                name.to_string()
            }
            _ => document.default_filename(mime_type),
        };

        let option = document
            .download_option(mime_type)
            .ok_or_else(|| AppError::MimeTypeUnavailable {
                requested: mime_type.to_string(),
                available: document.available_mime_types(),
            })?;

        let full_path = save_dir.join(&filename);
        let part_path = save_dir.join(format!("{filename}.part"));

        // Creating the part file is the writability check
        let file = File::create(&part_path).await.map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => not_writable(save_dir),
            _ => AppError::Io(e),
        })?;

        let written = async {
            let mut file = file;
            let mut response = self.http_client.get_raw(&option.download_url).await?;
            let mut written = 0u64;
            while let Some(chunk) = response.chunk().await? {
                file.write_all(&chunk).await?;
                written += chunk.len() as u64;
            }
            file.flush().await?;
            Ok::<_, AppError>(written)
        }
        .await;

        let written = match written {
            Ok(n) => n,
            Err(e) => {
                let _ = fs::remove_file(&part_path).await;
                return Err(e);
            }
        };
        fs::rename(&part_path, &full_path).await?;

        info!(
            "Successfully downloaded document {} ({}) to {} ({} bytes)",
            document.document_identifier,
            mime_type,
            full_path.display(),
            written
        );
        Ok(full_path)
    }

    async fn get_patent_continuity(
        &self,
        serial_number: &str,
    ) -> Result<ContinuityCollection, AppError> {
        info!("Getting continuity: {}", serial_number);
        let result: ContinuityCollection =
            self.get_for_application(serial_number, "continuity").await?;
        debug!("Continuity obtained: {} records", result.continuities.len());
        Ok(result)
    }

    async fn get_foreign_priority(
        &self,
        serial_number: &str,
    ) -> Result<ForeignPriorityCollection, AppError> {
        info!("Getting foreign priority: {}", serial_number);
        let result: ForeignPriorityCollection = self
            .get_for_application(serial_number, "foreign-priority")
            .await?;
        debug!("Foreign priority obtained: {} records", result.priorities.len());
        Ok(result)
    }

    async fn get_patent_transactions(
        &self,
        serial_number: &str,
    ) -> Result<TransactionCollection, AppError> {
        info!("Getting transactions: {}", serial_number);
        let result: TransactionCollection = self
            .get_for_application(serial_number, "transactions")
            .await?;
        debug!("Transactions obtained: {} events", result.events().count());
        Ok(result)
    }

    async fn get_patent_assignments(
        &self,
        serial_number: &str,
    ) -> Result<AssignmentCollection, AppError> {
        info!("Getting assignments: {}", serial_number);
        let result: AssignmentCollection =
            self.get_for_application(serial_number, "assignment").await?;
        debug!("Assignments obtained: {} records", result.assignments.len());
        Ok(result)
    }

    async fn search_applications(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, AppError> {
        info!("Searching applications: {}", request);
        let result: SearchResponse = self.http_client.post("search", request).await?;
        debug!(
            "Search returned {} of {} applications",
            result.patent_file_wrapper_data_bag.len(),
            result.count
        );
        Ok(result)
    }

    async fn get_app_metadata_from_patent_number(
        &self,
        patent_number: &str,
    ) -> Result<Option<PatentFileWrapper>, AppError> {
        let request = SearchRequest::by_patent_number(patent_number)?;
        let result = self.search_applications(&request).await?;
        if result.is_empty() {
            debug!("No application found for patent {}", patent_number);
        }
        Ok(result.into_first())
    }

    async fn get_app_number_from_patent_number(
        &self,
        patent_number: &str,
    ) -> Result<Option<String>, AppError> {
        Ok(self
            .get_app_metadata_from_patent_number(patent_number)
            .await?
            .map(|wrapper| wrapper.application_number))
    }
}
