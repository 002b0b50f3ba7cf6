use std::path::PathBuf;
use std::str::FromStr;

const DEFAULT_MAX_UPLOAD_BYTES: u64 = 10 * 1024 * 1024;

/// Process configuration, read once from the environment at startup.
#[derive(Debug, Clone)]
pub struct Settings {
    pub server: ServerSettings,
    pub upload: UploadSettings,
    pub chunking: ChunkingSettings,
    pub llm: LlmSettings,
}

#[derive(Debug, Clone)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct UploadSettings {
    pub max_upload_bytes: u64,
    /// Transient storage for in-flight uploads; files live here only for
    /// the duration of one request.
    pub spool_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ChunkingSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub base_url: String,
    pub model: String,
    /// Hard cap on chunks joined into the prompt; overflow is reported via
    /// the `truncated` flag in the result.
    pub max_prompt_chunks: usize,
}

impl Settings {
    pub fn from_env() -> Self {
        Self {
            server: ServerSettings {
                host: env_or("SERVER_HOST", "0.0.0.0"),
                port: env_parse("SERVER_PORT", 3000),
            },
            upload: UploadSettings {
                max_upload_bytes: env_parse("MAX_UPLOAD_BYTES", DEFAULT_MAX_UPLOAD_BYTES),
                spool_dir: std::env::var("SPOOL_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|_| std::env::temp_dir().join("statement-spool")),
            },
            chunking: ChunkingSettings {
                chunk_size: env_parse("CHUNK_SIZE", 1200),
                chunk_overlap: env_parse("CHUNK_OVERLAP", 200),
            },
            llm: LlmSettings {
                base_url: env_or("OPENAI_BASE_URL", "https://api.openai.com/v1"),
                model: env_or("OPENAI_MODEL", "gpt-5.2"),
                max_prompt_chunks: env_parse("MAX_PROMPT_CHUNKS", 8),
            },
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
