use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::process::Command;

use crate::application::ports::{OcrEngine, OcrEngineError};

/// Runs the tesseract CLI over the image and captures stdout.
pub struct TesseractOcrEngine {
    binary: PathBuf,
}

impl TesseractOcrEngine {
    pub fn new() -> Self {
        Self::with_binary("tesseract")
    }

    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for TesseractOcrEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OcrEngine for TesseractOcrEngine {
    #[tracing::instrument(skip(self))]
    async fn recognize(&self, path: &Path) -> Result<String, OcrEngineError> {
        let output = Command::new(&self.binary)
            .arg(path)
            .arg("stdout")
            .output()
            .await
            .map_err(|e| OcrEngineError::EngineUnavailable(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrEngineError::RecognitionFailed(stderr.into_owned()));
        }

        let text = String::from_utf8_lossy(&output.stdout).into_owned();
        tracing::debug!(chars = text.len(), "OCR pass complete");
        Ok(text)
    }
}
