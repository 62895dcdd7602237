//! Multi-strategy abbreviation expansion.
//!
//! Strategies are tried in strict order of decreasing confidence:
//! dictionary, known word, consonant-skeleton pattern, fuzzy. First hit
//! wins; a token nothing matches passes through capitalized.

use std::sync::Arc;

use harmonize_core::confidence::Confidence;
use harmonize_core::constants::PATTERN_MATCH_CONFIDENCE;
use harmonize_core::models::normalization::{Expansion, ExpansionMethod};
use harmonize_knowledge::BrandKnowledgeBase;

use crate::heuristics::{consonant_skeleton, prefix_score, sequence_ratio};
use crate::words::WORDS;

/// First-letter-upper, rest-lower rendering for pass-through tokens.
pub(crate) fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

pub struct AbbreviationExpander {
    kb: Arc<BrandKnowledgeBase>,
}

impl AbbreviationExpander {
    pub fn new(kb: Arc<BrandKnowledgeBase>) -> Self {
        Self { kb }
    }

    /// Expand a single token using the best available strategy.
    pub fn expand(&self, token: &str) -> Expansion {
        let clean = token.trim().to_uppercase();

        // Strategy 1: abbreviation dictionary (static, then learned).
        if let Some(expanded) = self.kb.expand_abbreviation(&clean) {
            return Expansion {
                original: token.to_string(),
                expanded,
                confidence: Confidence::new(Confidence::EXACT),
                method: ExpansionMethod::Dictionary,
            };
        }

        // Strategy 2: the token is already a canonical word.
        if let Some(word) = WORDS.get(&clean) {
            return Expansion {
                original: token.to_string(),
                expanded: (*word).to_string(),
                confidence: Confidence::new(Confidence::EXACT),
                method: ExpansionMethod::Dictionary,
            };
        }

        // Strategy 3: vowel-dropping detection via consonant skeletons.
        if let Some(word) = self.vowel_pattern_match(&clean) {
            return Expansion {
                original: token.to_string(),
                expanded: word,
                confidence: Confidence::new(PATTERN_MATCH_CONFIDENCE),
                method: ExpansionMethod::Pattern,
            };
        }

        // Strategy 4: fuzzy match against the vocabulary.
        if let Some((word, score)) = self.fuzzy_match(&clean) {
            if score >= Confidence::FUZZY_FLOOR {
                return Expansion {
                    original: token.to_string(),
                    expanded: word,
                    confidence: Confidence::new(score),
                    method: ExpansionMethod::Fuzzy,
                };
            }
        }

        Expansion {
            original: token.to_string(),
            expanded: capitalize(token),
            confidence: Confidence::new(0.0),
            method: ExpansionMethod::None,
        }
    }

    /// Match a token whose consonant skeleton equals a strictly longer
    /// word's skeleton, e.g. "WHTNNG" -> "Whitening".
    fn vowel_pattern_match(&self, token: &str) -> Option<String> {
        let token_skeleton = consonant_skeleton(token);
        if token_skeleton.is_empty() {
            return None;
        }
        for (word, canonical) in WORDS.iter() {
            if token.len() < word.len() && token_skeleton == consonant_skeleton(word) {
                return Some((*canonical).to_string());
            }
        }
        None
    }

    /// Best fuzzy candidate and its score. Candidates are visited in fixed
    /// lexical order and only a strictly greater score replaces the current
    /// best, so ties resolve to the lexically smallest word.
    fn fuzzy_match(&self, token: &str) -> Option<(String, f64)> {
        let mut best: Option<(&str, f64)> = None;

        for (word, canonical) in WORDS.iter() {
            let mut candidate_score = 0.0f64;
            if let Some(score) = prefix_score(token, word) {
                candidate_score = score;
            }
            let ratio = sequence_ratio(token, word);
            if ratio >= Confidence::FUZZY_FLOOR && ratio > candidate_score {
                candidate_score = ratio;
            }
            if candidate_score > 0.0 && best.map_or(true, |(_, s)| candidate_score > s) {
                best = Some((*canonical, candidate_score));
            }
        }

        best.map(|(word, score)| (word.to_string(), score))
    }

    /// Expand every whitespace-separated token in a text independently.
    /// Returns the reassembled text and the expansions that changed a token.
    pub fn expand_text(&self, text: &str) -> (String, Vec<Expansion>) {
        let mut expanded_tokens = Vec::new();
        let mut expansions = Vec::new();

        for token in text.split_whitespace() {
            let result = self.expand(token);
            expanded_tokens.push(result.expanded.clone());
            if result.changed() {
                expansions.push(result);
            }
        }

        (expanded_tokens.join(" "), expansions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use harmonize_knowledge::MemoryStore;

    fn expander() -> AbbreviationExpander {
        let kb = Arc::new(BrandKnowledgeBase::new(Arc::new(MemoryStore::new())));
        AbbreviationExpander::new(kb)
    }

    #[test]
    fn dictionary_strategy_wins_first() {
        let e = expander().expand("WHTN");
        assert_eq!(e.expanded, "Whitening");
        assert_eq!(e.method, ExpansionMethod::Dictionary);
        assert_eq!(e.confidence.value(), 1.0);
    }

    #[test]
    fn known_word_passes_through_with_full_confidence() {
        let e = expander().expand("whitening");
        assert_eq!(e.expanded, "Whitening");
        assert_eq!(e.method, ExpansionMethod::Dictionary);
    }

    #[test]
    fn vowel_pattern_matches_consonant_skeleton() {
        // CHCLT is not in any dictionary; skeleton equals Chocolate's.
        let e = expander().expand("CHCLT");
        assert_eq!(e.expanded, "Chocolate");
        assert_eq!(e.method, ExpansionMethod::Pattern);
        assert_eq!(e.confidence.value(), 0.85);
    }

    #[test]
    fn fuzzy_prefix_match_scores_above_floor() {
        let e = expander().expand("STRAW");
        assert_eq!(e.expanded, "Strawberry");
        assert_eq!(e.method, ExpansionMethod::Fuzzy);
        assert!((e.confidence.value() - 0.8).abs() < 1e-9);
    }

    #[test]
    fn unknown_token_passes_through_capitalized() {
        let e = expander().expand("XQZJ");
        assert_eq!(e.expanded, "Xqzj");
        assert_eq!(e.method, ExpansionMethod::None);
        assert_eq!(e.confidence.value(), 0.0);
    }

    #[test]
    fn expand_text_reports_only_changed_tokens() {
        let (text, expansions) = expander().expand_text("WHTN Mint XQZJ");
        assert_eq!(text, "Whitening Mint Xqzj");
        assert_eq!(expansions.len(), 1);
        assert_eq!(expansions[0].original, "WHTN");
    }

    #[test]
    fn fuzzy_match_is_deterministic() {
        let e = expander();
        let first = e.expand("GRP");
        for _ in 0..5 {
            assert_eq!(e.expand("GRP"), first);
        }
    }
}
