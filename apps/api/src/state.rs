use std::sync::Arc;

use sqlx::PgPool;

use crate::llm_client::TextGenerator;
use crate::store::ResponseStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Used directly only by the readiness probe; cache reads go through `store`.
    pub db: PgPool,
    /// Cached AI responses. Default: `PgResponseStore` over `db`.
    pub store: Arc<dyn ResponseStore>,
    /// Text generator for cache misses. Default: `LlmClient`.
    pub generator: Arc<dyn TextGenerator>,
}
