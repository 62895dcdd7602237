//! Scoring heuristics for abbreviation matching, kept as standalone
//! functions so each can be tested and swapped independently.

use harmonize_core::constants::FUZZY_PREFIX_BONUS;

/// Uppercase the token and drop vowels, keeping everything else in order.
/// "WHTN" and "WHITENING" share the skeleton "WHTNNG"-prefix family that
/// vowel-dropping abbreviations produce.
pub fn consonant_skeleton(token: &str) -> String {
    token
        .to_uppercase()
        .chars()
        .filter(|c| !matches!(c, 'A' | 'E' | 'I' | 'O' | 'U'))
        .collect()
}

/// Prefix-match score: token length over candidate length plus a flat
/// bonus, capped at 1.0. Only defined for tokens of length >= 2 that the
/// candidate actually starts with.
pub fn prefix_score(token: &str, candidate: &str) -> Option<f64> {
    if token.len() >= 2 && candidate.starts_with(token) {
        let score = token.len() as f64 / candidate.len() as f64 + FUZZY_PREFIX_BONUS;
        Some(score.min(1.0))
    } else {
        None
    }
}

/// Normalized sequence-similarity ratio in [0,1].
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    strsim::normalized_levenshtein(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skeleton_drops_vowels_only() {
        assert_eq!(consonant_skeleton("Whitening"), "WHTNNG");
        assert_eq!(consonant_skeleton("WHTN"), "WHTN");
        assert_eq!(consonant_skeleton("aeiou"), "");
        assert_eq!(consonant_skeleton("3D"), "3D");
    }

    #[test]
    fn prefix_score_requires_two_chars_and_a_real_prefix() {
        assert!(prefix_score("S", "STRAWBERRY").is_none());
        assert!(prefix_score("XY", "STRAWBERRY").is_none());
        let s = prefix_score("STRAW", "STRAWBERRY").unwrap();
        assert!((s - (0.5 + 0.3)).abs() < 1e-12);
    }

    #[test]
    fn prefix_score_is_capped_at_one() {
        assert_eq!(prefix_score("WATER", "WATER"), Some(1.0));
    }

    #[test]
    fn sequence_ratio_bounds() {
        assert_eq!(sequence_ratio("MINT", "MINT"), 1.0);
        assert!(sequence_ratio("MINT", "ZZZZ") < 0.3);
    }
}
