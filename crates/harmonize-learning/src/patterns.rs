//! Abbreviation-pattern mining and the learned-pattern store.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::warn;

use harmonize_core::confidence::Confidence;
use harmonize_core::constants::{
    PATTERN_BASE_CONFIDENCE, PATTERN_CONFIDENCE_CAP, PATTERN_CONFIDENCE_STEP,
    PATTERN_PROMOTION_CONFIDENCE, PATTERN_PROMOTION_OCCURRENCES,
};
use harmonize_core::errors::HarmonizeResult;
use harmonize_core::models::feedback::LearnedPattern;
use harmonize_core::traits::ISnapshotStore;
use harmonize_normalize::heuristics::consonant_skeleton;

/// Whether `abbrev` plausibly abbreviates `full`: strictly shorter, and
/// either its consonant skeleton prefixes the full word's skeleton or the
/// full word starts with it.
pub fn is_abbreviation_of(abbrev: &str, full: &str) -> bool {
    let abbrev = abbrev.to_uppercase();
    let full = full.to_uppercase();

    if abbrev.chars().count() >= full.chars().count() {
        return false;
    }

    let abbrev_skeleton = consonant_skeleton(&abbrev);
    if !abbrev_skeleton.is_empty() && consonant_skeleton(&full).starts_with(&abbrev_skeleton) {
        return true;
    }

    abbrev.chars().count() >= 2 && full.starts_with(&abbrev)
}

/// Mine candidate (abbreviation, expansion) pairs from an approved match.
/// Raw tokens containing digits or shorter than two characters are skipped;
/// the first canonical token each raw token abbreviates wins.
pub fn mine_patterns(raw: &str, canonical: &str) -> Vec<(String, String)> {
    let canonical_tokens: Vec<String> = canonical
        .to_uppercase()
        .split_whitespace()
        .map(str::to_string)
        .collect();

    let mut pairs = Vec::new();
    for raw_token in raw.to_uppercase().split_whitespace() {
        if raw_token.chars().any(|c| c.is_ascii_digit()) || raw_token.chars().count() < 2 {
            continue;
        }
        if let Some(full) = canonical_tokens
            .iter()
            .find(|full| is_abbreviation_of(raw_token, full))
        {
            pairs.push((raw_token.to_string(), full.clone()));
        }
    }
    pairs
}

/// The learned-pattern store. Patterns persist indefinitely once created;
/// confidence only ever grows, capped below the static-dictionary level.
pub struct PatternBook {
    patterns: BTreeMap<String, LearnedPattern>,
    store: Arc<dyn ISnapshotStore<BTreeMap<String, LearnedPattern>>>,
}

impl PatternBook {
    pub fn new(store: Arc<dyn ISnapshotStore<BTreeMap<String, LearnedPattern>>>) -> Self {
        let patterns = match store.load() {
            Ok(Some(patterns)) => patterns,
            Ok(None) => BTreeMap::new(),
            Err(e) => {
                warn!(error = %e, "could not load learned patterns, starting empty");
                BTreeMap::new()
            }
        };
        Self { patterns, store }
    }

    /// Fold one sighting into the book and return the updated pattern.
    pub fn observe(
        &mut self,
        abbreviation: &str,
        expansion: &str,
        source_id: &str,
        now: DateTime<Utc>,
    ) -> &LearnedPattern {
        let key = abbreviation.to_uppercase();
        let entry = self.patterns.entry(key).or_insert_with(|| LearnedPattern {
            abbreviation: abbreviation.to_uppercase(),
            expansion: capitalize(expansion),
            occurrences: 0,
            confidence: Confidence::new(PATTERN_BASE_CONFIDENCE),
            sources: Default::default(),
            last_seen: now,
        });

        entry.occurrences += 1;
        if entry.occurrences > 1 {
            entry.confidence = Confidence::new(
                (PATTERN_BASE_CONFIDENCE + entry.occurrences as f64 * PATTERN_CONFIDENCE_STEP)
                    .min(PATTERN_CONFIDENCE_CAP),
            );
        }
        entry.sources.insert(source_id.to_string());
        entry.last_seen = now;
        entry
    }

    /// Whether a pattern has cleared both promotion gates.
    pub fn promotable(pattern: &LearnedPattern) -> bool {
        pattern.confidence.value() >= PATTERN_PROMOTION_CONFIDENCE
            && pattern.occurrences >= PATTERN_PROMOTION_OCCURRENCES
    }

    /// Patterns with at least `min_occurrences` sightings, most seen first.
    pub fn all(&self, min_occurrences: u32) -> Vec<LearnedPattern> {
        let mut patterns: Vec<LearnedPattern> = self
            .patterns
            .values()
            .filter(|p| p.occurrences >= min_occurrences)
            .cloned()
            .collect();
        patterns.sort_by(|a, b| {
            b.occurrences
                .cmp(&a.occurrences)
                .then_with(|| a.abbreviation.cmp(&b.abbreviation))
        });
        patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn high_confidence_count(&self) -> usize {
        self.patterns
            .values()
            .filter(|p| p.confidence.value() >= PATTERN_PROMOTION_CONFIDENCE)
            .count()
    }

    /// Rewrite the persisted pattern store.
    pub fn persist(&self) -> HarmonizeResult<()> {
        self.store.save(&self.patterns)
    }
}

/// First-letter-upper rendering for learned expansions ("WHITENING" is
/// taught to the knowledge base as "Whitening").
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
        None => String::new(),
    }
}
