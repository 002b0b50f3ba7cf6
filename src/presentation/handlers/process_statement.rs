use std::path::{Path, PathBuf};

use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::application::services::ExtractionError;
use crate::domain::Statement;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct ProcessStatementResponse {
    #[serde(flatten)]
    pub statement: Statement,
    /// True when chunks beyond the prompt budget were dropped from the
    /// extraction request.
    pub truncated: bool,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Removes the spooled file when dropped, so success, failure, panic, and
/// mid-request cancellation (the client disconnecting while the handler is
/// parked in file I/O or the completion call) all leave the spool clean.
struct SpoolGuard {
    path: PathBuf,
}

impl SpoolGuard {
    fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SpoolGuard {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // NotFound covers the write never having happened.
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(
                    error = %e,
                    path = %self.path.display(),
                    "Failed to delete spooled upload"
                );
            }
        }
    }
}

/// `POST /process-statement`: multipart upload in, extracted statement JSON
/// out. The upload is spooled under a request-scoped name and removed on
/// every exit path once processing has started.
#[tracing::instrument(skip(state, headers, multipart))]
pub async fn process_statement_handler<F, L, T>(
    State(state): State<AppState<F, L, T>>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    // Credential check comes first, before any file I/O.
    let token = match bearer_token(&headers) {
        Ok(token) => token,
        Err(response) => return response,
    };

    let max_bytes = state.settings.upload.max_upload_bytes;

    if let Some(declared) = headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
    {
        if declared > max_bytes {
            tracing::warn!(content_length = declared, "Content-Length exceeds limit");
            return error_response(StatusCode::PAYLOAD_TOO_LARGE, "File too large");
        }
    }

    let (filename, data) = loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                // The upload is the first field carrying a filename.
                let Some(filename) = field.file_name().map(str::to_string) else {
                    continue;
                };
                match field.bytes().await {
                    Ok(bytes) => break (filename, bytes),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to read file bytes");
                        return multipart_error_response(&e, "Failed to read file");
                    }
                }
            }
            Ok(None) => {
                tracing::warn!("Request with no file field");
                return error_response(StatusCode::BAD_REQUEST, "No file uploaded");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to read multipart");
                return multipart_error_response(&e, "Failed to read multipart");
            }
        }
    };

    if data.len() as u64 > max_bytes {
        tracing::warn!(file_size = data.len(), "Uploaded file exceeds limit");
        return error_response(StatusCode::PAYLOAD_TOO_LARGE, "File too large");
    }

    tracing::debug!(filename = %filename, bytes = data.len(), "File data received");

    // Spool under a generated id plus the original extension, never the
    // client-supplied filename, so concurrent uploads cannot collide.
    let extension = Path::new(&filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let spool_name = if extension.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        format!("{}.{}", Uuid::new_v4(), extension)
    };
    // The guard is created before the write, so a failed or partial write
    // is cleaned up the same as a completed one.
    let spool = SpoolGuard::new(state.settings.upload.spool_dir.join(spool_name));

    if let Err(e) = tokio::fs::write(spool.path(), &data).await {
        tracing::error!(error = %e, "Failed to spool upload");
        return error_response(StatusCode::INTERNAL_SERVER_ERROR, "Failed to store upload");
    }

    let result = state
        .extraction_service
        .process(spool.path(), &filename, data.len() as u64, &token)
        .await;

    match result {
        Ok(extraction) => (
            StatusCode::OK,
            Json(ProcessStatementResponse {
                statement: extraction.statement,
                truncated: extraction.truncated,
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(filename = %filename, error = %e, "Statement extraction failed");
            error_response(status_for(&e), e.to_string())
        }
    }
}

/// A body that outgrows the request limit mid-stream (chunked uploads carry
/// no Content-Length to check upfront) surfaces as a length-limit error
/// inside multipart reading; report it as 413 like the explicit size checks.
fn multipart_error_response(err: &MultipartError, context: &str) -> Response {
    if is_length_limit(err) {
        return error_response(StatusCode::PAYLOAD_TOO_LARGE, "File too large");
    }
    error_response(StatusCode::BAD_REQUEST, format!("{context}: {err}"))
}

fn is_length_limit(err: &MultipartError) -> bool {
    let mut source = std::error::Error::source(err);
    while let Some(inner) = source {
        if inner.is::<http_body_util::LengthLimitError>() {
            return true;
        }
        source = inner.source();
    }
    false
}

fn status_for(err: &ExtractionError) -> StatusCode {
    match err {
        ExtractionError::UnsupportedFormat(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ExtractionError::UpstreamAuth => StatusCode::UNAUTHORIZED,
        ExtractionError::UpstreamRateLimited => StatusCode::TOO_MANY_REQUESTS,
        ExtractionError::FileLoading(_)
        | ExtractionError::Splitting(_)
        | ExtractionError::UpstreamService(_)
        | ExtractionError::MalformedResponse(_)
        | ExtractionError::SchemaViolation(_) => StatusCode::BAD_GATEWAY,
    }
}

fn bearer_token(headers: &HeaderMap) -> Result<String, Response> {
    let Some(value) = headers.get(header::AUTHORIZATION) else {
        tracing::warn!("Authorization header missing");
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Authorization header missing",
        ));
    };

    let value = value.to_str().unwrap_or_default();
    let token = value
        .split_once(' ')
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .map(|(_, token)| token.trim())
        .unwrap_or_default();

    if token.is_empty() {
        tracing::warn!("Invalid authorization scheme");
        return Err(error_response(
            StatusCode::UNAUTHORIZED,
            "Invalid authorization scheme",
        ));
    }

    Ok(token.to_string())
}

fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}
