use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Profile field a cached AI response was generated for.
/// Drives which normalization and boosting rules apply during matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Address,
    Education,
    Experience,
    Portfolio,
    Awards,
    Skills,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Address,
        Category::Education,
        Category::Experience,
        Category::Portfolio,
        Category::Awards,
        Category::Skills,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Address => "Address",
            Category::Education => "Education",
            Category::Experience => "Experience",
            Category::Portfolio => "Portfolio",
            Category::Awards => "Awards",
            Category::Skills => "Skills",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| anyhow::anyhow!("unknown response category '{s}'"))
    }
}

/// Raw `ai_responses` row. `category` is free text in the table.
#[derive(Debug, Clone, FromRow)]
pub struct AiResponseRow {
    pub id: Uuid,
    pub category: String,
    pub prompt: String,
    pub response: String,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A previously generated response, as consumed by the matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResponse {
    pub id: Uuid,
    pub category: Category,
    pub prompt: String,
    pub response: String,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<AiResponseRow> for StoredResponse {
    type Error = anyhow::Error;

    fn try_from(row: AiResponseRow) -> Result<Self, Self::Error> {
        Ok(StoredResponse {
            id: row.id,
            category: row.category.parse()?,
            prompt: row.prompt,
            response: row.response,
            role: row.role,
            created_at: row.created_at,
        })
    }
}

/// Insert payload for the cache-population path.
#[derive(Debug, Clone)]
pub struct NewStoredResponse {
    pub category: Category,
    pub prompt: String,
    pub response: String,
    pub role: Option<String>,
}

/// Winning candidate of a similarity lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchResult {
    pub record: StoredResponse,
    /// 0 – 100
    pub similarity_percent: u32,
}
