use std::path::PathBuf;
use uspto_odp::prelude::*;

/// Downloads every office action (CTNF/CTFR) of an application as PDF
///
/// Run with: cargo run --bin download_document_example -- 16123456 ./downloads
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let mut args = std::env::args().skip(1);
    let serial = args.next().unwrap_or_else(|| "16123456".to_string());
    let save_dir = PathBuf::from(args.next().unwrap_or_else(|| "downloads".to_string()));
    tokio::fs::create_dir_all(&save_dir).await?;

    let client = Client::default();
    let documents = client.get_patent_documents(&serial).await?;
    info!("{} documents in the file wrapper of {}", documents.len(), serial);

    for doc in documents
        .documents
        .iter()
        .filter(|d| d.document_code == "CTNF" || d.document_code == "CTFR")
    {
        match client
            .download_document(doc, &save_dir, None, MimeType::Pdf)
            .await
        {
            Ok(path) => info!("Saved {} to {}", doc.document_description, path.display()),
            Err(AppError::MimeTypeUnavailable { available, .. }) => {
                warn!("{} has no PDF, only {:?}", doc.document_identifier, available)
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
