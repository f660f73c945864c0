//! Profile assistance: reuse a cached response when one is similar enough,
//! otherwise generate fresh text and cache it.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::assist::prompts::build_prompt;
use crate::errors::AppError;
use crate::llm_client::prompts::PROFILE_WRITER_SYSTEM;
use crate::llm_client::TextGenerator;
use crate::matching::find_similar_response;
use crate::models::ai_response::{Category, NewStoredResponse};
use crate::store::ResponseStore;

#[derive(Debug, Clone, Deserialize)]
pub struct AssistRequest {
    pub prompt: String,
    pub category: Category,
    pub role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    Cache,
    Generated,
}

#[derive(Debug, Serialize)]
pub struct AssistResponse {
    pub content: String,
    pub source: ResponseSource,
    /// Set only for cache hits.
    pub similarity_percent: Option<u32>,
    /// Cache row backing `content`; `None` when caching a fresh response failed.
    pub cached_response_id: Option<Uuid>,
}

pub async fn assist(
    store: &dyn ResponseStore,
    generator: &dyn TextGenerator,
    request: AssistRequest,
) -> Result<AssistResponse, AppError> {
    let AssistRequest {
        prompt,
        category,
        role,
    } = request;

    if prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    if let Some(hit) = find_similar_response(store, &prompt, category, role.as_deref()).await {
        return Ok(AssistResponse {
            content: hit.record.response,
            source: ResponseSource::Cache,
            similarity_percent: Some(hit.similarity_percent),
            cached_response_id: Some(hit.record.id),
        });
    }

    let generation_prompt = build_prompt(category, &prompt, role.as_deref());
    let content = generator
        .generate(&generation_prompt, PROFILE_WRITER_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("{category} generation failed: {e}")))?
        .trim()
        .to_string();
    if content.is_empty() {
        return Err(AppError::Llm(format!("{category} generation returned no text")));
    }
    info!("Generated fresh {category} response ({} chars)", content.len());

    let cached_response_id = match store
        .insert(NewStoredResponse {
            category,
            prompt,
            response: content.clone(),
            role,
        })
        .await
    {
        Ok(stored) => Some(stored.id),
        Err(e) => {
            warn!("Failed to cache generated {category} response: {e:?}");
            None
        }
    };

    Ok(AssistResponse {
        content,
        source: ResponseSource::Generated,
        similarity_percent: None,
        cached_response_id,
    })
}
