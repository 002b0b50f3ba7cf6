use std::path::Path;

use async_trait::async_trait;
use calamine::{open_workbook_auto, Reader};

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

use super::table_render::render_table;

/// XLS/XLSX adapter: loads the first worksheet in full and renders it as
/// aligned text columns, matching the CSV rendering.
#[derive(Default)]
pub struct SpreadsheetAdapter;

impl SpreadsheetAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for SpreadsheetAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(document_id = %document.id.as_uuid(), filename = %document.filename)
    )]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if !document.format.is_spreadsheet() {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let path = path.to_path_buf();
        let rows =
            tokio::task::spawn_blocking(move || -> Result<Vec<Vec<String>>, FileLoaderError> {
                let mut workbook = open_workbook_auto(&path).map_err(|e| {
                    FileLoaderError::ExtractionFailed(format!("failed to open workbook: {e}"))
                })?;

                let range = workbook
                    .worksheet_range_at(0)
                    .ok_or_else(|| {
                        FileLoaderError::ExtractionFailed("workbook has no sheets".to_string())
                    })?
                    .map_err(|e| {
                        FileLoaderError::ExtractionFailed(format!("failed to read sheet: {e}"))
                    })?;

                Ok(range
                    .rows()
                    .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                    .collect())
            })
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::debug!(row_count = rows.len(), "Spreadsheet table loaded");

        Ok(render_table(&rows))
    }
}
