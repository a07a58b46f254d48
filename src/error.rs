use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::store::StoreError;

/// Custom error type for API endpoints
///
/// Every variant maps to a bare status code. Details are written to the log
/// and never to the client.
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be read
    UnreadableBody(BytesRejection),
    /// Lock mode refused to overwrite an existing key
    KeyExists(String),
    /// Key not found in the store
    KeyNotFound(String),
    /// Path or method not served by the gateway
    UnmatchedRoute,
    /// Pool exhaustion or store failure
    Store { key: String, source: StoreError },
}

impl ApiError {
    pub fn store(key: impl Into<String>, source: StoreError) -> Self {
        ApiError::Store {
            key: key.into(),
            source,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::UnreadableBody(_) => StatusCode::BAD_REQUEST,
            ApiError::KeyExists(_) => StatusCode::BAD_REQUEST,
            ApiError::KeyNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UnmatchedRoute => StatusCode::BAD_REQUEST,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::UnreadableBody(rejection) => {
                tracing::warn!("Failed to read request body: {}", rejection);
            }
            ApiError::KeyExists(key) => {
                tracing::info!("Refused to overwrite locked key '{}'", key);
            }
            ApiError::KeyNotFound(key) => {
                tracing::info!("No content for key '{}'", key);
            }
            ApiError::UnmatchedRoute => {
                tracing::debug!("Unmatched route");
            }
            ApiError::Store { key, source } => {
                tracing::error!("Store operation on key '{}' failed: {}", key, source);
            }
        }

        status.into_response()
    }
}
