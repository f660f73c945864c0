//! Category-aware similarity between two normalized prompts.

use crate::matching::distance::similarity;
use crate::models::ai_response::Category;

const DEGREE_MISMATCH_FACTOR: f64 = 0.3;
const EDUCATION_OVERLAP_WEIGHT: f64 = 0.2;
const EXPERIENCE_OVERLAP_WEIGHT: f64 = 0.15;
const SKILL_TOKEN_MATCH: f64 = 0.8;
const SKILL_TOKEN_MIN_LEN: usize = 3;

const EDUCATION_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "diploma",
    "computer",
    "science",
    "engineering",
    "technology",
    "applications",
];

const EXPERIENCE_KEYWORDS: &[&str] = &[
    "developer",
    "engineer",
    "manager",
    "senior",
    "junior",
    "lead",
    "years",
    "experience",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DegreeLevel {
    Undergraduate,
    Postgraduate,
    Doctorate,
    Secondary,
    Unknown,
}

impl DegreeLevel {
    /// First matching rule wins, so "higher secondary" stays `Secondary`
    /// and "bachelor ... master" reads as `Undergraduate`.
    fn classify(text: &str) -> Self {
        if text.contains("bachelor") || text.contains("diploma") {
            DegreeLevel::Undergraduate
        } else if text.contains("master") {
            DegreeLevel::Postgraduate
        } else if text.contains("doctor") || text.contains("phd") {
            DegreeLevel::Doctorate
        } else if text.contains("secondary") {
            DegreeLevel::Secondary
        } else {
            DegreeLevel::Unknown
        }
    }
}

/// Scores two normalized prompts of the same category, clamped to at most 1.0.
///
/// Identical strings short-circuit to 1.0. Otherwise the base edit-distance
/// similarity is adjusted per category:
/// - Education: ×0.3 on a degree-level mismatch, plus a keyword-overlap bonus
/// - Experience: additive bonus for shared role keywords
/// - Skills: max of base and token-overlap ratio
/// - everything else: base only
pub fn typed_similarity(a: &str, b: &str, category: Category) -> f64 {
    if a == b {
        return 1.0;
    }

    let base = similarity(a, b);
    let score = match category {
        Category::Education => education_score(base, a, b),
        Category::Experience => base + experience_boost(a, b),
        Category::Skills => base.max(skill_overlap(a, b)),
        Category::Portfolio | Category::Awards | Category::Address => base,
    };

    score.min(1.0)
}

fn education_score(base: f64, a: &str, b: &str) -> f64 {
    let mut score = base;

    let (level_a, level_b) = (DegreeLevel::classify(a), DegreeLevel::classify(b));
    if level_a != DegreeLevel::Unknown && level_b != DegreeLevel::Unknown && level_a != level_b {
        score *= DEGREE_MISMATCH_FACTOR;
    }

    let mut total = 0usize;
    let mut common = 0usize;
    for keyword in EDUCATION_KEYWORDS {
        let (in_a, in_b) = (a.contains(keyword), b.contains(keyword));
        if in_a || in_b {
            total += 1;
        }
        if in_a && in_b {
            common += 1;
        }
    }

    // Bonus only; low overlap carries no extra penalty.
    if total > 0 {
        let ratio = common as f64 / total as f64;
        if ratio > 0.5 {
            score += ratio * EDUCATION_OVERLAP_WEIGHT;
        }
    }

    score
}

fn experience_boost(a: &str, b: &str) -> f64 {
    let shared = EXPERIENCE_KEYWORDS
        .iter()
        .filter(|k| a.contains(*k) && b.contains(*k))
        .count();
    shared as f64 / EXPERIENCE_KEYWORDS.len() as f64 * EXPERIENCE_OVERLAP_WEIGHT
}

/// Fraction of near-identical token pairs, over the longer token list.
fn skill_overlap(a: &str, b: &str) -> f64 {
    let tokens_a = skill_tokens(a);
    let tokens_b = skill_tokens(b);
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return 0.0;
    }

    let matching = tokens_a
        .iter()
        .flat_map(|ta| tokens_b.iter().map(move |tb| (ta, tb)))
        .filter(|(ta, tb)| similarity(ta, tb) > SKILL_TOKEN_MATCH)
        .count();

    matching as f64 / tokens_a.len().max(tokens_b.len()) as f64
}

fn skill_tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|t| t.chars().count() >= SKILL_TOKEN_MIN_LEN)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identical_strings_short_circuit() {
        for category in Category::ALL {
            assert_eq!(typed_similarity("same text", "same text", category), 1.0);
        }
    }

    #[test]
    fn test_degree_level_classification_order() {
        assert_eq!(DegreeLevel::classify("bachelor of arts"), DegreeLevel::Undergraduate);
        assert_eq!(DegreeLevel::classify("diploma"), DegreeLevel::Undergraduate);
        assert_eq!(DegreeLevel::classify("master of science"), DegreeLevel::Postgraduate);
        assert_eq!(DegreeLevel::classify("doctor of philosophy"), DegreeLevel::Doctorate);
        assert_eq!(DegreeLevel::classify("phd in physics"), DegreeLevel::Doctorate);
        assert_eq!(DegreeLevel::classify("higher secondary"), DegreeLevel::Secondary);
        assert_eq!(DegreeLevel::classify("bootcamp"), DegreeLevel::Unknown);
        assert_eq!(
            DegreeLevel::classify("bachelor and master dual degree"),
            DegreeLevel::Undergraduate
        );
    }

    #[test]
    fn test_degree_mismatch_penalty() {
        let (a, b) = ("bachelor of arts", "master of arts");
        let base = similarity(a, b);
        let score = typed_similarity(a, b, Category::Education);
        assert!(score <= base * DEGREE_MISMATCH_FACTOR + EPS, "Score was {score}");
        assert!((score - base * DEGREE_MISMATCH_FACTOR).abs() < EPS);
    }

    #[test]
    fn test_same_level_is_not_penalized() {
        let (a, b) = ("bachelor of arts", "bachelors of art");
        let base = similarity(a, b);
        let score = typed_similarity(a, b, Category::Education);
        assert!(score >= base, "Score was {score}, base {base}");
    }

    #[test]
    fn test_unknown_level_is_not_penalized() {
        let (a, b) = ("certificate in arts", "master of arts");
        assert_eq!(
            typed_similarity(a, b, Category::Education),
            similarity(a, b)
        );
    }

    #[test]
    fn test_education_keyword_overlap_bonus() {
        // bachelor, science, computer shared; engineering / technology not: 3/5 = 0.6
        let a = "bachelor of science in computer engineering";
        let b = "bachelor of science in computer technology";
        let expected = similarity(a, b) + 0.6 * EDUCATION_OVERLAP_WEIGHT;
        let score = typed_similarity(a, b, Category::Education);
        assert!((score - expected.min(1.0)).abs() < EPS, "Score was {score}");
    }

    #[test]
    fn test_education_overlap_at_half_gets_no_bonus() {
        // bachelor, computer shared; applications / science not: exactly 0.5
        let a = "bachelor of computer applications";
        let b = "bachelor of computer science";
        assert!((typed_similarity(a, b, Category::Education) - similarity(a, b)).abs() < EPS);
    }

    #[test]
    fn test_education_score_is_clamped() {
        let a = "bachelor of computer applications";
        let b = "bachelor of computer applications!";
        assert_eq!(typed_similarity(a, b, Category::Education), 1.0);
    }

    #[test]
    fn test_experience_keyword_boost() {
        // developer, senior, years, experience shared: 4/8 * 0.15
        let a = "senior frontend developer with 5 years experience";
        let b = "senior backend developer with 5 years experience";
        let expected = similarity(a, b) + 0.5 * EXPERIENCE_OVERLAP_WEIGHT;
        let score = typed_similarity(a, b, Category::Experience);
        assert!((score - expected.min(1.0)).abs() < EPS, "Score was {score}");
    }

    #[test]
    fn test_experience_without_shared_keywords_is_base() {
        let (a, b) = ("data analyst at acme", "teacher at school");
        assert_eq!(typed_similarity(a, b, Category::Experience), similarity(a, b));
    }

    #[test]
    fn test_skill_tokens_drop_short_words() {
        assert_eq!(skill_tokens("c go rust,sql;js"), vec!["rust", "sql"]);
    }

    #[test]
    fn test_skills_reordered_tokens_score_full() {
        let a = "react nodejs javascript";
        let b = "javascript react nodejs";
        assert!(similarity(a, b) < 0.75);
        assert_eq!(typed_similarity(a, b, Category::Skills), 1.0);
    }

    #[test]
    fn test_skills_overlap_is_max_not_sum() {
        // 2 of 4 tokens match: overlap 0.5
        let a = "python django react nodejs";
        let b = "python django kotlin swift";
        let base = similarity(a, b);
        let score = typed_similarity(a, b, Category::Skills);
        assert!((score - base.max(0.5)).abs() < EPS, "Score was {score}");
    }

    #[test]
    fn test_skills_only_short_tokens_falls_back_to_base() {
        let (a, b) = ("c go", "go c");
        assert_eq!(skill_overlap(a, b), 0.0);
        assert_eq!(typed_similarity(a, b, Category::Skills), similarity(a, b));
    }

    #[test]
    fn test_unboosted_categories_use_base() {
        let (a, b) = ("github.com/alice", "github.com/alicia");
        for category in [Category::Portfolio, Category::Awards, Category::Address] {
            assert_eq!(typed_similarity(a, b, category), similarity(a, b));
        }
    }
}
