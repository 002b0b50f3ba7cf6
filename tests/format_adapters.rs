use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use statex::application::ports::{FileLoader, FileLoaderError, OcrEngine, OcrEngineError};
use statex::domain::{Document, SourceFormat};
use statex::infrastructure::text_processing::{
    CompositeFileLoader, CsvAdapter, ImageAdapter, OfxAdapter, PdfAdapter, SpreadsheetAdapter,
};

struct StubOcrEngine {
    text: String,
}

#[async_trait]
impl OcrEngine for StubOcrEngine {
    async fn recognize(&self, _path: &Path) -> Result<String, OcrEngineError> {
        Ok(self.text.clone())
    }
}

#[test]
fn given_recognized_extensions_when_resolved_then_format_matches_case_insensitively() {
    assert_eq!(SourceFormat::from_extension("pdf"), Some(SourceFormat::Pdf));
    assert_eq!(SourceFormat::from_extension("PDF"), Some(SourceFormat::Pdf));
    assert_eq!(SourceFormat::from_extension(".csv"), Some(SourceFormat::Csv));
    assert_eq!(SourceFormat::from_extension("Xlsx"), Some(SourceFormat::Xlsx));
    assert_eq!(SourceFormat::from_extension("OFX"), Some(SourceFormat::Ofx));
    assert_eq!(SourceFormat::from_extension("JPeG"), Some(SourceFormat::Jpeg));
}

#[test]
fn given_unrecognized_extension_when_resolved_then_no_format() {
    assert_eq!(SourceFormat::from_extension("docx"), None);
    assert_eq!(SourceFormat::from_extension("txt"), None);
    assert_eq!(SourceFormat::from_extension(""), None);
}

#[tokio::test]
async fn given_csv_file_when_extracted_then_all_rows_and_columns_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statement.csv");
    std::fs::write(
        &path,
        "date,memo,amount\n2024-01-05,Coffee Shop,-4.50\n2024-01-06,Salary,2500.00\n2024-01-07,Groceries,-82.13\n",
    )
    .unwrap();

    let adapter = CsvAdapter::new();
    let document = Document::new("statement.csv".to_string(), SourceFormat::Csv, 0);

    let text = adapter.extract_text(&path, &document).await.unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 4, "header plus three data rows");
    assert!(lines[0].contains("date") && lines[0].contains("memo") && lines[0].contains("amount"));
    assert!(text.contains("Coffee Shop"));
    assert!(text.contains("2500.00"));
    assert!(text.contains("-82.13"));
}

#[tokio::test]
async fn given_wrong_format_document_when_csv_adapter_called_then_unsupported() {
    let adapter = CsvAdapter::new();
    let document = Document::new("statement.pdf".to_string(), SourceFormat::Pdf, 0);

    let result = adapter
        .extract_text(Path::new("does-not-matter.pdf"), &document)
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn given_ofx_file_when_extracted_then_one_line_per_transaction_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statement.ofx");
    std::fs::write(
        &path,
        concat!(
            "OFXHEADER:100\nDATA:OFXSGML\n\n<OFX><BANKMSGSRSV1><STMTTRNRS><STMTRS><BANKTRANLIST>\n",
            "<STMTTRN>\n<TRNTYPE>DEBIT\n<DTPOSTED>20240115120000\n<TRNAMT>-45.90\n<MEMO>GROCERY STORE\n</STMTTRN>\n",
            "<STMTTRN>\n<TRNTYPE>CREDIT\n<DTPOSTED>20240120\n<TRNAMT>2500.00\n<MEMO>SALARY\n</STMTTRN>\n",
            "</BANKTRANLIST></STMTRS></STMTTRNRS></BANKMSGSRSV1></OFX>\n",
        ),
    )
    .unwrap();

    let adapter = OfxAdapter::new();
    let document = Document::new("statement.ofx".to_string(), SourceFormat::Ofx, 0);

    let text = adapter.extract_text(&path, &document).await.unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "2024-01-15 GROCERY STORE -45.90");
    assert_eq!(lines[1], "2024-01-20 SALARY 2500.00");
}

#[tokio::test]
async fn given_non_pdf_bytes_when_pdf_adapter_called_then_extraction_failed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statement.pdf");
    std::fs::write(&path, b"plain text masquerading as a PDF").unwrap();

    let adapter = PdfAdapter::new();
    let document = Document::new("statement.pdf".to_string(), SourceFormat::Pdf, 32);

    let result = adapter.extract_text(&path, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_wrong_format_document_when_pdf_adapter_called_then_unsupported() {
    let adapter = PdfAdapter::new();
    let document = Document::new("statement.csv".to_string(), SourceFormat::Csv, 0);

    let result = adapter
        .extract_text(Path::new("does-not-matter.csv"), &document)
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn given_non_workbook_bytes_when_spreadsheet_adapter_called_then_extraction_failed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("statement.xlsx");
    std::fs::write(&path, b"not a zip archive").unwrap();

    let adapter = SpreadsheetAdapter::new();
    let document = Document::new("statement.xlsx".to_string(), SourceFormat::Xlsx, 17);

    let result = adapter.extract_text(&path, &document).await;

    assert!(matches!(result, Err(FileLoaderError::ExtractionFailed(_))));
}

#[tokio::test]
async fn given_wrong_format_document_when_spreadsheet_adapter_called_then_unsupported() {
    let adapter = SpreadsheetAdapter::new();
    let document = Document::new("scan.png".to_string(), SourceFormat::Png, 0);

    let result = adapter
        .extract_text(Path::new("does-not-matter.png"), &document)
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn given_image_document_when_extracted_then_ocr_text_returned_verbatim() {
    let recognized = "ACME BANK\nStatement period 2024-01\n".to_string();
    let adapter = ImageAdapter::new(Arc::new(StubOcrEngine {
        text: recognized.clone(),
    }));
    let document = Document::new("scan.png".to_string(), SourceFormat::Png, 0);

    let text = adapter
        .extract_text(Path::new("unused.png"), &document)
        .await
        .unwrap();

    assert_eq!(text, recognized);
}

#[tokio::test]
async fn given_non_image_document_when_image_adapter_called_then_unsupported() {
    let adapter = ImageAdapter::new(Arc::new(StubOcrEngine {
        text: String::new(),
    }));
    let document = Document::new("statement.ofx".to_string(), SourceFormat::Ofx, 0);

    let result = adapter
        .extract_text(Path::new("unused.ofx"), &document)
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFormat(_))
    ));
}

#[tokio::test]
async fn given_format_without_registered_adapter_when_dispatched_then_unsupported() {
    let csv: Arc<dyn FileLoader> = Arc::new(CsvAdapter::new());
    let composite = CompositeFileLoader::new(vec![(SourceFormat::Csv, csv)]);
    let document = Document::new("statement.pdf".to_string(), SourceFormat::Pdf, 0);

    let result = composite
        .extract_text(Path::new("unused.pdf"), &document)
        .await;

    assert!(matches!(
        result,
        Err(FileLoaderError::UnsupportedFormat(_))
    ));
}
