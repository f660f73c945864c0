use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::ai_response::{AiResponseRow, Category, NewStoredResponse, StoredResponse};
use crate::store::ResponseStore;

/// `ai_responses` table on PostgreSQL.
#[derive(Clone)]
pub struct PgResponseStore {
    pool: PgPool,
}

impl PgResponseStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ResponseStore for PgResponseStore {
    async fn fetch_by_category(&self, category: Category) -> Result<Vec<StoredResponse>> {
        let rows = sqlx::query_as::<_, AiResponseRow>(
            r#"
            SELECT id, category, prompt, response, role, created_at
            FROM ai_responses
            WHERE category = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(category.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .filter_map(|row| {
                let id = row.id;
                StoredResponse::try_from(row)
                    .map_err(|e| warn!("Skipping ai_responses row {id}: {e}"))
                    .ok()
            })
            .collect())
    }

    async fn insert(&self, record: NewStoredResponse) -> Result<StoredResponse> {
        let row = sqlx::query_as::<_, AiResponseRow>(
            r#"
            INSERT INTO ai_responses (id, category, prompt, response, role)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, category, prompt, response, role, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(record.category.as_str())
        .bind(&record.prompt)
        .bind(&record.response)
        .bind(&record.role)
        .fetch_one(&self.pool)
        .await?;

        info!("Cached {} response {}", record.category, row.id);
        StoredResponse::try_from(row)
    }
}
