use std::path::Path;
use std::sync::Arc;

use crate::application::ports::{
    FileLoader, FileLoaderError, LlmClient, LlmClientError, TextSplitter, TextSplitterError,
};
use crate::domain::{Document, SourceFormat, Statement};

use super::statement_prompt::build_statement_prompt;

/// The document-to-structured-record pipeline: format adaptation, chunking,
/// and one schema-constrained completion call.
///
/// Stateless across requests; the caller's credential flows through each
/// `process` call and is never stored here.
pub struct ExtractionService<F, L, T: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    file_loader: Arc<F>,
    llm_client: Arc<L>,
    text_splitter: Arc<T>,
    max_prompt_chunks: usize,
}

/// Outcome of a successful extraction. `truncated` reports that chunks
/// beyond the prompt budget were dropped from the outbound request.
#[derive(Debug, Clone, PartialEq)]
pub struct StatementExtraction {
    pub statement: Statement,
    pub truncated: bool,
}

impl<F, L, T: ?Sized> ExtractionService<F, L, T>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    pub fn new(
        file_loader: Arc<F>,
        llm_client: Arc<L>,
        text_splitter: Arc<T>,
        max_prompt_chunks: usize,
    ) -> Self {
        Self {
            file_loader,
            llm_client,
            text_splitter,
            max_prompt_chunks,
        }
    }

    #[tracing::instrument(skip_all, fields(filename = %filename))]
    pub async fn process(
        &self,
        path: &Path,
        filename: &str,
        size_bytes: u64,
        api_key: &str,
    ) -> Result<StatementExtraction, ExtractionError> {
        let extension = Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();

        let format = SourceFormat::from_extension(extension)
            .ok_or_else(|| ExtractionError::UnsupportedFormat(extension.to_string()))?;

        let document = Document::new(filename.to_string(), format, size_bytes);

        let text = self.file_loader.extract_text(path, &document).await?;
        tracing::debug!(chars = text.chars().count(), "Document normalized to text");

        let chunks = self.text_splitter.split(&text, document.id).await?;

        let truncated = chunks.len() > self.max_prompt_chunks;
        if truncated {
            tracing::warn!(
                total_chunks = chunks.len(),
                kept = self.max_prompt_chunks,
                "Prompt budget exceeded, tail chunks dropped"
            );
        }

        let content = chunks
            .iter()
            .take(self.max_prompt_chunks)
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n");

        let prompt = build_statement_prompt(&content);

        let raw = self
            .llm_client
            .complete_json(&prompt, api_key)
            .await
            .map_err(ExtractionError::from_llm)?;

        let value: serde_json::Value =
            serde_json::from_str(&raw).map_err(ExtractionError::MalformedResponse)?;

        let statement: Statement =
            serde_json::from_value(value).map_err(ExtractionError::SchemaViolation)?;

        tracing::info!(
            document_id = %document.id.as_uuid(),
            size_bytes = document.size_bytes,
            transactions = statement.transactions.len(),
            truncated,
            "Statement extraction complete"
        );

        Ok(StatementExtraction {
            statement,
            truncated,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("unsupported format: {0:?}")]
    UnsupportedFormat(String),
    #[error("file loading: {0}")]
    FileLoading(#[from] FileLoaderError),
    #[error("text splitting: {0}")]
    Splitting(#[from] TextSplitterError),
    #[error("completion service rejected the credential")]
    UpstreamAuth,
    #[error("completion service rate limited")]
    UpstreamRateLimited,
    #[error("completion service error: {0}")]
    UpstreamService(String),
    #[error("completion response is not valid JSON: {0}")]
    MalformedResponse(#[source] serde_json::Error),
    #[error("completion response does not match the statement schema: {0}")]
    SchemaViolation(#[source] serde_json::Error),
}

impl ExtractionError {
    fn from_llm(err: LlmClientError) -> Self {
        match err {
            LlmClientError::AuthRejected => Self::UpstreamAuth,
            LlmClientError::RateLimited => Self::UpstreamRateLimited,
            LlmClientError::ApiRequestFailed(msg) | LlmClientError::InvalidResponse(msg) => {
                Self::UpstreamService(msg)
            }
        }
    }
}
