// Per-category generation templates. Replace `{input}` (and `{role}` where present)
// before sending; `build_prompt` does both.

use crate::llm_client::prompts::GROUNDING_INSTRUCTION;
use crate::models::ai_response::Category;

const ADDRESS_TEMPLATE: &str = "Format the following address as a clean, single-line \
    postal address suitable for a job-board profile. Fix capitalisation and punctuation only.\n\n\
    Input: {input}";

const EDUCATION_TEMPLATE: &str = "Write a one-sentence education entry for a job-board \
    profile from the following input. Expand degree abbreviations (e.g. BCA, B.Tech) to \
    their full names.\n\nInput: {input}";

const EXPERIENCE_TEMPLATE: &str = "Write a concise 2-3 sentence work experience summary \
    for a job-board profile from the following input.\n\nInput: {input}";

const EXPERIENCE_WITH_ROLE_TEMPLATE: &str = "Write a concise 2-3 sentence work experience \
    summary for a job-board profile of a {role}, from the following input.\n\nInput: {input}";

const PORTFOLIO_TEMPLATE: &str = "Write a short portfolio description (at most 2 sentences) \
    for a job-board profile from the following input. Keep any URLs exactly as given.\n\n\
    Input: {input}";

const AWARDS_TEMPLATE: &str = "Write a one-line awards and achievements entry for a \
    job-board profile from the following input.\n\nInput: {input}";

const SKILLS_TEMPLATE: &str = "Turn the following input into a comma-separated list of \
    professional skills with canonical capitalisation (e.g. JavaScript, Node.js). \
    Remove duplicates.\n\nInput: {input}";

/// Builds the user prompt for a cache miss.
pub fn build_prompt(category: Category, input: &str, role: Option<&str>) -> String {
    let role = role.map(str::trim).filter(|r| !r.is_empty());
    let template = match (category, role) {
        (Category::Address, _) => ADDRESS_TEMPLATE,
        (Category::Education, _) => EDUCATION_TEMPLATE,
        (Category::Experience, Some(_)) => EXPERIENCE_WITH_ROLE_TEMPLATE,
        (Category::Experience, None) => EXPERIENCE_TEMPLATE,
        (Category::Portfolio, _) => PORTFOLIO_TEMPLATE,
        (Category::Awards, _) => AWARDS_TEMPLATE,
        (Category::Skills, _) => SKILLS_TEMPLATE,
    };

    let prompt = template
        .replace("{role}", role.unwrap_or_default())
        .replace("{input}", input.trim());
    format!("{prompt}\n\n{GROUNDING_INSTRUCTION}")
}
