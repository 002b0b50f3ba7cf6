use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::application::ports::{FileLoader, LlmClient, TextSplitter};
use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{health_handler, process_statement_handler};
use crate::presentation::state::AppState;

// Headroom for multipart framing on top of the payload cap; the handler
// enforces the exact byte limit itself.
const MULTIPART_OVERHEAD: usize = 64 * 1024;

pub fn create_router<F, L, T>(state: AppState<F, L, T>) -> Router
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
    T: TextSplitter + 'static + ?Sized,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = state.settings.upload.max_upload_bytes as usize + MULTIPART_OVERHEAD;

    Router::new()
        .route("/health", get(health_handler))
        .route(
            "/process-statement",
            post(process_statement_handler::<F, L, T>),
        )
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
