mod extraction_service;
mod statement_prompt;

pub use extraction_service::{ExtractionError, ExtractionService, StatementExtraction};
pub use statement_prompt::{build_statement_prompt, STATEMENT_SCHEMA_INSTRUCTIONS};
