use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
};

/// POST /{key} handler - Store a blob
///
/// With lock versions enabled the first write to a key wins and every later
/// write is refused with 400. Otherwise the content is overwritten.
#[utoipa::path(
    post,
    path = routes::BLOB,
    params(
        ("key" = String, Path, description = "Key to store the content under")
    ),
    request_body(content = Vec<u8>, content_type = "application/octet-stream"),
    responses(
        (status = 200, description = "Content stored"),
        (status = 400, description = "Unreadable body, or key already stored while versions are locked"),
        (status = 500, description = "Store unavailable or failed")
    ),
    tag = "blob"
)]
pub async fn post_handler(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(key) = key.map_err(|_| ApiError::UnmatchedRoute)?;
    let content = body.map_err(ApiError::UnreadableBody)?;

    if state.config.lock_versions {
        let stored = state.store.set_if_absent(&key, &content).await;
        match stored {
            Ok(true) => {}
            Ok(false) => return Err(ApiError::KeyExists(key)),
            Err(e) => return Err(ApiError::store(key, e)),
        }
    } else {
        state
            .store
            .set(&key, &content)
            .await
            .map_err(|e| ApiError::store(key.as_str(), e))?;
    }

    tracing::debug!("Stored {} bytes for key '{}'", content.len(), key);
    Ok(StatusCode::OK)
}
