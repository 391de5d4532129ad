use std::sync::Arc;

use crate::llm_client::{Embedder, TextGenerator};
use crate::store::WardrobeStore;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Capability handles are built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn WardrobeStore>,
    pub llm: Arc<dyn TextGenerator>,
    pub embedder: Arc<dyn Embedder>,
}
