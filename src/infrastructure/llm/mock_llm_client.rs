use async_trait::async_trait;

use crate::application::ports::{LlmClient, LlmClientError};

/// Returns a fixed, schema-conforming reply. Useful for wiring checks
/// without a completion-service credential.
pub struct MockLlmClient;

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn complete_json(&self, _prompt: &str, _api_key: &str) -> Result<String, LlmClientError> {
        Ok(r#"{
            "institution": "Mock Bank",
            "document_type": "bank_statement",
            "account_holder": null,
            "period": null,
            "transactions": []
        }"#
        .to_string())
    }
}
