use crate::config::Config;
use crate::store::BlobStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlobStore>,
    pub config: Arc<Config>,
}
