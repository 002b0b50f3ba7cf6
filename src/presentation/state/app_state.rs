use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::application::services::ExtractionService;
use crate::presentation::config::Settings;

pub struct AppState<F, L, T: ?Sized>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    pub extraction_service: Arc<ExtractionService<F, L, T>>,
    pub settings: Settings,
}

impl<F, L, T: ?Sized> Clone for AppState<F, L, T>
where
    F: FileLoader,
    L: LlmClient,
    T: TextSplitter,
{
    fn clone(&self) -> Self {
        Self {
            extraction_service: Arc::clone(&self.extraction_service),
            settings: self.settings.clone(),
        }
    }
}
