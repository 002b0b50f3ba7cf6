use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, SourceFormat};

use super::table_render::render_table;

/// Loads a CSV file in full, header row included, and renders it as aligned
/// text columns. No column filtering.
#[derive(Default)]
pub struct CsvAdapter;

impl CsvAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for CsvAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(document_id = %document.id.as_uuid(), filename = %document.filename)
    )]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != SourceFormat::Csv {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let path = path.to_path_buf();
        let rows = tokio::task::spawn_blocking(move || -> Result<Vec<Vec<String>>, csv::Error> {
            let mut reader = csv::ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_path(&path)?;

            let mut rows = Vec::new();
            for record in reader.records() {
                let record = record?;
                rows.push(record.iter().map(str::to_string).collect());
            }
            Ok(rows)
        })
        .await
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse CSV: {e}")))?;

        tracing::debug!(row_count = rows.len(), "CSV table loaded");

        Ok(render_table(&rows))
    }
}
