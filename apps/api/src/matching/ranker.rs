use tracing::{debug, error, info};

use crate::matching::normalize::normalize;
use crate::matching::scoring::typed_similarity;
use crate::models::ai_response::{Category, MatchResult, StoredResponse};
use crate::store::ResponseStore;

/// Minimum typed similarity for a cached response to be reused. Inclusive.
pub const SIMILARITY_THRESHOLD: f64 = 0.75;

/// Looks up a cached response similar enough to `prompt` to be reused.
///
/// Store failures are logged and reported as `None` so callers can always
/// fall through to fresh generation.
pub async fn find_similar_response(
    store: &dyn ResponseStore,
    prompt: &str,
    category: Category,
    role: Option<&str>,
) -> Option<MatchResult> {
    let candidates = match store.fetch_by_category(category).await {
        Ok(candidates) => candidates,
        Err(e) => {
            error!("Failed to fetch cached {category} responses: {e:?}");
            return None;
        }
    };

    let result = rank_candidates(prompt, category, role, &candidates);
    match &result {
        Some(m) => info!(
            "Cache hit for {category}: response {} at {}%",
            m.record.id, m.similarity_percent
        ),
        None => info!(
            "No cached {category} response above threshold ({} candidates)",
            candidates.len()
        ),
    }
    result
}

/// Picks the highest-scoring candidate at or above the threshold.
/// On equal scores the earlier candidate is kept.
pub fn rank_candidates(
    prompt: &str,
    category: Category,
    role: Option<&str>,
    candidates: &[StoredResponse],
) -> Option<MatchResult> {
    let query = normalize(prompt, category, role);

    let mut best: Option<&StoredResponse> = None;
    let mut best_similarity = 0.0_f64;

    for candidate in candidates.iter().filter(|c| c.category == category) {
        let stored = normalize(&candidate.prompt, category, candidate.role.as_deref());
        let score = typed_similarity(&query, &stored, category);
        debug!("Candidate {} scored {score:.4}", candidate.id);

        if improves(score, best_similarity) {
            best = Some(candidate);
            best_similarity = score;
        }
    }

    best.map(|record| MatchResult {
        record: record.clone(),
        similarity_percent: (best_similarity * 100.0).round() as u32,
    })
}

fn improves(score: f64, best: f64) -> bool {
    score > best && score >= SIMILARITY_THRESHOLD
}
