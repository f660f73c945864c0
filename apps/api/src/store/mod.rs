//! Record store for cached AI responses.
//!
//! The matcher only reads; inserts come from the generation path.

use anyhow::Result;
use async_trait::async_trait;

use crate::models::ai_response::{Category, NewStoredResponse, StoredResponse};

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgResponseStore;

/// Carried in `AppState` as `Arc<dyn ResponseStore>`.
#[async_trait]
pub trait ResponseStore: Send + Sync {
    /// Every record of `category`, in a stable order (oldest first).
    async fn fetch_by_category(&self, category: Category) -> Result<Vec<StoredResponse>>;

    async fn insert(&self, record: NewStoredResponse) -> Result<StoredResponse>;
}
