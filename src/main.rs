use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use statex::application::ports::{OcrEngine, TextSplitter};
use statex::application::services::ExtractionService;
use statex::infrastructure::llm::OpenAiClient;
use statex::infrastructure::observability::{init_tracing, TracingConfig};
use statex::infrastructure::ocr::TesseractOcrEngine;
use statex::infrastructure::text_processing::{CompositeFileLoader, RecursiveCharacterSplitter};
use statex::presentation::{create_router, AppState, Settings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let settings = Settings::from_env();

    init_tracing(TracingConfig::default(), settings.server.port);

    std::fs::create_dir_all(&settings.upload.spool_dir)?;

    let ocr_engine: Arc<dyn OcrEngine> = Arc::new(TesseractOcrEngine::new());
    let file_loader = Arc::new(CompositeFileLoader::with_default_adapters(ocr_engine));

    let text_splitter: Arc<dyn TextSplitter> = Arc::new(RecursiveCharacterSplitter::new(
        settings.chunking.chunk_size,
        settings.chunking.chunk_overlap,
    ));

    let llm_client = Arc::new(OpenAiClient::new(
        settings.llm.base_url.clone(),
        settings.llm.model.clone(),
    ));

    let extraction_service = Arc::new(ExtractionService::new(
        file_loader,
        llm_client,
        text_splitter,
        settings.llm.max_prompt_chunks,
    ));

    let state = AppState {
        extraction_service,
        settings: settings.clone(),
    };

    let router = create_router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, router).await?;

    Ok(())
}
