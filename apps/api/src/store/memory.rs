use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::ai_response::{Category, NewStoredResponse, StoredResponse};
use crate::store::ResponseStore;

/// Vec-backed store for tests. Preserves insertion order.
#[derive(Default)]
pub struct InMemoryResponseStore {
    records: RwLock<Vec<StoredResponse>>,
    failing: bool,
}

impl InMemoryResponseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every call fails, for the fail-open paths.
    pub fn failing() -> Self {
        Self {
            records: RwLock::default(),
            failing: true,
        }
    }

    pub fn with_records(records: Vec<StoredResponse>) -> Self {
        Self {
            records: RwLock::new(records),
            failing: false,
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

/// Test fixture record.
pub fn record(
    category: Category,
    prompt: &str,
    response: &str,
    role: Option<&str>,
) -> StoredResponse {
    StoredResponse {
        id: Uuid::new_v4(),
        category,
        prompt: prompt.to_string(),
        response: response.to_string(),
        role: role.map(String::from),
        created_at: Utc::now(),
    }
}

#[async_trait]
impl ResponseStore for InMemoryResponseStore {
    async fn fetch_by_category(&self, category: Category) -> Result<Vec<StoredResponse>> {
        if self.failing {
            return Err(anyhow!("connection refused"));
        }
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.category == category)
            .cloned()
            .collect())
    }

    async fn insert(&self, new: NewStoredResponse) -> Result<StoredResponse> {
        if self.failing {
            return Err(anyhow!("connection refused"));
        }
        let stored = StoredResponse {
            id: Uuid::new_v4(),
            category: new.category,
            prompt: new.prompt,
            response: new.response,
            role: new.role,
            created_at: Utc::now(),
        };
        self.records.write().await.push(stored.clone());
        Ok(stored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fetch_filters_by_category_in_order() {
        let store = InMemoryResponseStore::with_records(vec![
            record(Category::Skills, "rust", "a", None),
            record(Category::Education, "bca", "b", None),
            record(Category::Skills, "go", "c", None),
        ]);

        let skills = store.fetch_by_category(Category::Skills).await.unwrap();
        let prompts: Vec<_> = skills.iter().map(|r| r.prompt.as_str()).collect();
        assert_eq!(prompts, vec!["rust", "go"]);
    }

    #[tokio::test]
    async fn test_insert_is_visible_to_fetch() {
        let store = InMemoryResponseStore::new();
        store
            .insert(NewStoredResponse {
                category: Category::Awards,
                prompt: "hackathon winner".to_string(),
                response: "Won first place".to_string(),
                role: None,
            })
            .await
            .unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(store.fetch_by_category(Category::Awards).await.unwrap().len(), 1);
        assert!(store.fetch_by_category(Category::Address).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_failing_store_errors() {
        let store = InMemoryResponseStore::failing();
        assert!(store.fetch_by_category(Category::Skills).await.is_err());
    }
}
