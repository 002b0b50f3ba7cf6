use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, SourceFormat};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Page-wise PDF text extraction. Pages are joined with a newline in page
/// order; a page yielding no text contributes an empty segment instead of
/// failing the document.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != SourceFormat::Pdf {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read file: {e}")))?;

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem_by_pages(&data)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF extraction timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(pages.join("\n"))
    }
}
