use strsim::levenshtein;

/// Levenshtein edit distance over Unicode scalar values.
/// Case-sensitive; callers fold case first.
pub fn distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// Case-insensitive similarity in `[0, 1]`: `(max_len - distance) / max_len`.
/// Two empty strings are identical.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    (max_len - distance(&a, &b)) as f64 / max_len as f64
}
