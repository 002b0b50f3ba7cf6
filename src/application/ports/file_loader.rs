use std::path::Path;

use async_trait::async_trait;

use crate::domain::Document;

/// Format-specific extraction of plain text from a spooled upload.
///
/// Implementations read the file at `path`; they never write it.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
