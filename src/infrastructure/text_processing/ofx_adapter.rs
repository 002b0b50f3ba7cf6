use std::path::Path;
use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{Document, SourceFormat};

static STMTTRN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<STMTTRN>(.*?)</STMTTRN>").unwrap());
static DTPOSTED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<DTPOSTED>\s*([^<\r\n]+)").unwrap());
static TRNAMT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<TRNAMT>\s*([^<\r\n]+)").unwrap());
static MEMO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<MEMO>\s*([^<\r\n]+)").unwrap());

/// OFX adapter: renders one `date memo amount` line per `<STMTTRN>` record,
/// in the order the source declares them. Handles both SGML (OFX 1.x) and
/// XML (OFX 2.x) bodies since only leaf values are read.
#[derive(Default)]
pub struct OfxAdapter;

impl OfxAdapter {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FileLoader for OfxAdapter {
    #[tracing::instrument(
        skip(self, path),
        fields(document_id = %document.id.as_uuid(), filename = %document.filename)
    )]
    async fn extract_text(
        &self,
        path: &Path,
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.format != SourceFormat::Ofx {
            return Err(FileLoaderError::UnsupportedFormat(
                document.format.as_extension().to_string(),
            ));
        }

        let data = tokio::fs::read(path)
            .await
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to read file: {e}")))?;

        // OFX 1.x files commonly carry legacy encodings; lossy decoding
        // keeps the transaction structure intact either way.
        let content = String::from_utf8_lossy(&data);

        let mut lines = Vec::new();
        for capture in STMTTRN_RE.captures_iter(&content) {
            let block = &capture[1];

            let date = DTPOSTED_RE
                .captures(block)
                .map(|c| normalize_ofx_date(c[1].trim()))
                .unwrap_or_default();
            let memo = MEMO_RE
                .captures(block)
                .map(|c| c[1].trim().to_string())
                .unwrap_or_default();
            let amount = TRNAMT_RE
                .captures(block)
                .map(|c| c[1].trim().to_string())
                .unwrap_or_default();

            lines.push(format!("{date} {memo} {amount}"));
        }

        tracing::debug!(transaction_count = lines.len(), "OFX records parsed");

        Ok(lines.join("\n"))
    }
}

/// DTPOSTED carries `YYYYMMDD` optionally followed by time and timezone;
/// normalize to `YYYY-MM-DD`, falling back to the raw value.
fn normalize_ofx_date(raw: &str) -> String {
    let digits: String = raw.chars().take_while(char::is_ascii_digit).collect();
    if digits.len() >= 8 {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(&digits[..8], "%Y%m%d") {
            return date.format("%Y-%m-%d").to_string();
        }
    }
    raw.to_string()
}
