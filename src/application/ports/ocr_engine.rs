use std::path::Path;

use async_trait::async_trait;

/// Optical character recognition over a whole image file.
///
/// No deskew or thresholding is applied here; recognition quality is the
/// engine's responsibility.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    async fn recognize(&self, path: &Path) -> Result<String, OcrEngineError>;
}

#[derive(Debug, thiserror::Error)]
pub enum OcrEngineError {
    #[error("ocr engine unavailable: {0}")]
    EngineUnavailable(String),
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),
}
