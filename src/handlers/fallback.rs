use crate::error::ApiError;

/// Any path or method the gateway does not serve
pub async fn fallback_handler() -> ApiError {
    ApiError::UnmatchedRoute
}
