use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError, OcrEngine};
use crate::domain::Document;

/// PNG/JPEG adapter: hands the whole image to the OCR engine and returns
/// the raw recognized text, no pre-processing.
pub struct ImageAdapter {
    ocr_engine: Arc<dyn OcrEngine>,
}

impl ImageAdapter {
    pub fn new(ocr_engine: Arc<dyn OcrEngine>) -> Self {
        Self { ocr_engine }
    }
}

#[async_trait]
impl FileLoader for ImageAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(document_id = %document.id.as_uuid(), filename = %document.filename)
    )]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if !document.format.is_image() {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        self.ocr_engine
            .recognize(path)
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(e.to_string()))
    }
}
