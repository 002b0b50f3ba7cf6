mod file_loader;
mod llm_client;
mod ocr_engine;
mod text_splitter;

pub use file_loader::{FileLoader, FileLoaderError};
pub use llm_client::{LlmClient, LlmClientError};
pub use ocr_engine::{OcrEngine, OcrEngineError};
pub use text_splitter::{TextSplitter, TextSplitterError};
