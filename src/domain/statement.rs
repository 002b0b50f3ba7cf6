use serde::{Deserialize, Serialize};

/// The statement shape the completion service is instructed to produce.
///
/// Every field is nullable: the model is told to emit `null` rather than
/// guess. Unknown fields are rejected so that a reply drifting from the
/// instructed shape surfaces as a schema violation instead of being passed
/// through silently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Statement {
    pub institution: Option<String>,
    pub document_type: Option<DocumentType>,
    pub account_holder: Option<String>,
    pub period: Option<String>,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    BankStatement,
    CreditCardStatement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Transaction {
    pub date: Option<String>,
    pub description: Option<String>,
    /// Signed amount: negative for debits, positive for credits.
    pub amount: Option<f64>,
    pub currency: Option<String>,
    pub category: Option<String>,
    pub source_page: Option<u32>,
}
