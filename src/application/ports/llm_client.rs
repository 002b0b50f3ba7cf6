use async_trait::async_trait;

/// Single request/response exchange with the completion service.
///
/// The credential is a request-scoped capability supplied per call; clients
/// must not cache it between invocations.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Request a completion constrained to a JSON object and return the raw
    /// reply text. Parsing of the reply belongs to the caller.
    async fn complete_json(&self, prompt: &str, api_key: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("completion service rejected the credential")]
    AuthRejected,
    #[error("rate limited or quota exhausted")]
    RateLimited,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response envelope: {0}")]
    InvalidResponse(String),
}
