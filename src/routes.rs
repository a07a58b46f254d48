// Route path constants and router assembly

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::handlers;
use crate::state::AppState;

pub const BLOB: &str = "/{key}";

/// Build the gateway router.
///
/// Only `GET` and `POST` on a single path segment are served. Everything else,
/// including other methods on `/{key}`, falls through to a bare 400.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            BLOB,
            get(handlers::get_handler)
                .post(handlers::post_handler)
                // get() would otherwise answer HEAD too
                .head(handlers::fallback_handler)
                .fallback(handlers::fallback_handler),
        )
        .fallback(handlers::fallback_handler)
        // Values have no size limit
        .layer(DefaultBodyLimit::disable())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
