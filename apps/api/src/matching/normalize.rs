use crate::models::ai_response::Category;

/// Exact-match aliases for education input, keyed by lowercased trimmed text.
const EDUCATION_ALIASES: &[(&str, &str)] = &[
    ("bca", "bachelor of computer applications"),
    ("b.ca", "bachelor of computer applications"),
    ("b.c.a", "bachelor of computer applications"),
    ("b.c.a.", "bachelor of computer applications"),
    ("bachelor in computer applications", "bachelor of computer applications"),
    ("bachelor of computer application", "bachelor of computer applications"),
    ("btech", "bachelor of technology"),
    ("b.tech", "bachelor of technology"),
    ("b tech", "bachelor of technology"),
    ("bachelor in technology", "bachelor of technology"),
    ("be", "bachelor of engineering"),
    ("b.e", "bachelor of engineering"),
    ("b.e.", "bachelor of engineering"),
    ("bachelor in engineering", "bachelor of engineering"),
    ("bsc", "bachelor of science"),
    ("b.sc", "bachelor of science"),
    ("b.sc.", "bachelor of science"),
    ("bachelor in science", "bachelor of science"),
    ("ba", "bachelor of arts"),
    ("b.a", "bachelor of arts"),
    ("b.a.", "bachelor of arts"),
    ("bachelor in arts", "bachelor of arts"),
    ("bcom", "bachelor of commerce"),
    ("b.com", "bachelor of commerce"),
    ("bachelor in commerce", "bachelor of commerce"),
    ("mca", "master of computer applications"),
    ("m.ca", "master of computer applications"),
    ("m.c.a", "master of computer applications"),
    ("master in computer applications", "master of computer applications"),
    ("mtech", "master of technology"),
    ("m.tech", "master of technology"),
    ("master in technology", "master of technology"),
    ("me", "master of engineering"),
    ("m.e", "master of engineering"),
    ("master in engineering", "master of engineering"),
    ("msc", "master of science"),
    ("m.sc", "master of science"),
    ("master in science", "master of science"),
    ("ma", "master of arts"),
    ("m.a", "master of arts"),
    ("master in arts", "master of arts"),
    ("mba", "master of business administration"),
    ("m.b.a", "master of business administration"),
    ("master in business administration", "master of business administration"),
    ("phd", "doctor of philosophy"),
    ("ph.d", "doctor of philosophy"),
    ("ph.d.", "doctor of philosophy"),
    ("doctorate", "doctor of philosophy"),
    ("polytechnic", "diploma"),
    ("diploma in engineering", "diploma"),
    ("12th", "higher secondary"),
    ("class 12", "higher secondary"),
    ("class xii", "higher secondary"),
    ("intermediate", "higher secondary"),
    ("hsc", "higher secondary"),
    ("10th", "secondary"),
    ("class 10", "secondary"),
    ("class x", "secondary"),
    ("matriculation", "secondary"),
    ("ssc", "secondary"),
];

/// Job-title spellings collapsed to one canonical title. Each key is
/// replaced at its first occurrence; no canonical value contains a key.
const JOB_TITLE_VARIANTS: &[(&str, &str)] = &[
    ("front-end developer", "frontend developer"),
    ("front end developer", "frontend developer"),
    ("back-end developer", "backend developer"),
    ("back end developer", "backend developer"),
    ("full-stack developer", "fullstack developer"),
    ("full stack developer", "fullstack developer"),
    ("software development engineer", "software engineer"),
    ("ui/ux designer", "ux designer"),
    ("ui ux designer", "ux designer"),
    ("sr. ", "senior "),
    ("jr. ", "junior "),
];

/// Collapses known synonymous phrasings to one canonical string for the category.
/// `role` only participates for `Experience`.
pub fn normalize(text: &str, category: Category, role: Option<&str>) -> String {
    let text = text.trim().to_lowercase();

    match category {
        Category::Education => normalize_education(text),
        Category::Experience => normalize_experience(text, role),
        Category::Skills => normalize_skills(&text),
        Category::Portfolio | Category::Awards | Category::Address => text,
    }
}

fn normalize_education(text: String) -> String {
    EDUCATION_ALIASES
        .iter()
        .find(|(alias, _)| *alias == text)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or(text)
}

fn normalize_experience(text: String, role: Option<&str>) -> String {
    let mut text = match role.map(str::trim).filter(|r| !r.is_empty()) {
        Some(role) => format!("{} {}", role.to_lowercase(), text),
        None => text,
    };

    for (variant, canonical) in JOB_TITLE_VARIANTS {
        if text.contains(variant) {
            text = text.replacen(variant, canonical, 1);
        }
    }
    text
}

/// Separators become spaces and whitespace runs collapse to one space.
/// Runs at the edges are kept, so a trailing comma still leaves a space.
fn normalize_skills(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_whitespace() || c == ',' || c == ';' {
            if !out.ends_with(' ') {
                out.push(' ');
            }
        } else {
            out.push(c);
        }
    }
    out
}
