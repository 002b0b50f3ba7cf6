mod settings;

pub use settings::{ChunkingSettings, LlmSettings, ServerSettings, Settings, UploadSettings};
