use crate::error::ApiError;
use crate::routes;
use crate::state::AppState;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
};

/// GET /{key} handler - Retrieve a stored blob
///
/// The body of a successful response is exactly the bytes that were stored.
#[utoipa::path(
    get,
    path = routes::BLOB,
    params(
        ("key" = String, Path, description = "Key the content is stored under")
    ),
    responses(
        (status = 200, description = "Stored content", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 400, description = "Malformed key"),
        (status = 404, description = "Key not found"),
        (status = 500, description = "Store unavailable or failed")
    ),
    tag = "blob"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    key: Result<Path<String>, PathRejection>,
) -> Result<(StatusCode, Vec<u8>), ApiError> {
    let Path(key) = key.map_err(|_| ApiError::UnmatchedRoute)?;

    let result = state.store.get(&key).await;
    match result {
        Ok(Some(content)) => {
            tracing::debug!("Retrieved {} bytes for key '{}'", content.len(), key);
            Ok((StatusCode::OK, content))
        }
        Ok(None) => Err(ApiError::KeyNotFound(key)),
        Err(e) => Err(ApiError::store(key, e)),
    }
}
