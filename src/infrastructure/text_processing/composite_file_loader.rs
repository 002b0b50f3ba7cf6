use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, SourceFormat};

/// Dispatches to the adapter registered for the document's format.
pub struct CompositeFileLoader {
    adapters: HashMap<SourceFormat, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(SourceFormat, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// The full adapter set for every recognized statement format.
    pub fn with_default_adapters(ocr_engine: Arc<dyn crate::application::ports::OcrEngine>) -> Self {
        let pdf: Arc<dyn FileLoader> = Arc::new(super::PdfAdapter::new());
        let csv: Arc<dyn FileLoader> = Arc::new(super::CsvAdapter::new());
        let sheet: Arc<dyn FileLoader> = Arc::new(super::SpreadsheetAdapter::new());
        let ofx: Arc<dyn FileLoader> = Arc::new(super::OfxAdapter::new());
        let image: Arc<dyn FileLoader> = Arc::new(super::ImageAdapter::new(ocr_engine));

        Self::new(vec![
            (SourceFormat::Pdf, pdf),
            (SourceFormat::Csv, csv),
            (SourceFormat::Xls, Arc::clone(&sheet)),
            (SourceFormat::Xlsx, sheet),
            (SourceFormat::Ofx, ofx),
            (SourceFormat::Png, Arc::clone(&image)),
            (SourceFormat::Jpg, Arc::clone(&image)),
            (SourceFormat::Jpeg, image),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.format).ok_or_else(|| {
            FileLoaderError::UnsupportedFormat(document.format.as_extension().to_string())
        })?;

        adapter.extract_text(path, document).await
    }
}
