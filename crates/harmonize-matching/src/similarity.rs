//! Similarity primitives: embedding cosine and brand-name agreement.

use deunicode::deunicode;

/// Cosine similarity between two vectors, 0.0 when either norm is zero.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| (*x as f64) * (*y as f64)).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// Fold a brand name for comparison: accent fold, lowercase, drop
/// everything that is not alphanumeric so "Lay's" and "LAYS" compare equal.
pub fn fold_brand(name: &str) -> String {
    deunicode(name)
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Normalized string-similarity ratio between two brand names after
/// case/accent folding, in [0,1].
pub fn brand_similarity(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(&fold_brand(a), &fold_brand(b))
}
