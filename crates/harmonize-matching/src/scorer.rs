//! Weighted match scoring and threshold classification.

use harmonize_core::confidence::Confidence;
use harmonize_core::constants::{
    DEFAULT_AUTO_THRESHOLD, DEFAULT_REVIEW_THRESHOLD, NORMALIZATION_BONUS_CAP,
    NORMALIZATION_BONUS_STEP,
};
use harmonize_core::models::matching::{MatchScore, MatchSide, RecommendedStatus};

use crate::similarity::brand_similarity;

/// Relative weights of the attribute-score terms.
///
/// The default is the production-tuned baseline: brand and size only. The
/// category-aware alternative reserves a slice of the score for category
/// agreement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeWeights {
    pub brand: f64,
    pub size: f64,
    pub category: f64,
}

impl Default for AttributeWeights {
    fn default() -> Self {
        Self {
            brand: 0.6,
            size: 0.4,
            category: 0.0,
        }
    }
}

impl AttributeWeights {
    /// Variant that grants category agreement its own term.
    pub fn with_category() -> Self {
        Self {
            brand: 0.5,
            size: 0.35,
            category: 0.15,
        }
    }
}

/// Confidence cutoffs for routing a match.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// At or above: confirm without review.
    pub auto: f64,
    /// At or above (but below `auto`): queue for human review.
    pub review: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            auto: DEFAULT_AUTO_THRESHOLD,
            review: DEFAULT_REVIEW_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Looser starting point for deployments that let the feedback loop
    /// tighten the bounds itself.
    pub fn adaptive_defaults() -> Self {
        Self {
            auto: 0.90,
            review: 0.60,
        }
    }

    pub fn classify(&self, confidence: f64) -> RecommendedStatus {
        if confidence >= self.auto {
            RecommendedStatus::AutoConfirm
        } else if confidence >= self.review {
            RecommendedStatus::PendingReview
        } else {
            RecommendedStatus::LowConfidence
        }
    }
}

/// Full scoring configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringConfig {
    pub weights: AttributeWeights,
    pub thresholds: Thresholds,
    /// Weight of the externally supplied semantic similarity.
    pub semantic_weight: f64,
    /// Weight of the locally computed attribute score.
    pub attribute_weight: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: AttributeWeights::default(),
            thresholds: Thresholds::default(),
            semantic_weight: 0.70,
            attribute_weight: 0.30,
        }
    }
}

pub struct MatchScorer {
    config: ScoringConfig,
}

impl MatchScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Replace the classification thresholds, e.g. with adaptive values
    /// recommended by the feedback learner.
    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.config.thresholds = thresholds;
    }

    /// Attribute agreement between the two sides, in [0,1].
    ///
    /// Missing data is handled symmetrically: a term where both sides are
    /// absent contributes neutral half-credit, a term known on one side
    /// only contributes zero.
    pub fn attribute_score(&self, master: &MatchSide, raw: &MatchSide) -> f64 {
        let w = self.config.weights;
        let mut score = 0.0;

        match (&master.brand, &raw.brand) {
            (Some(a), Some(b)) => score += w.brand * brand_similarity(a, b),
            (None, None) => score += w.brand * 0.5,
            _ => {}
        }

        match (master.size_canonical, raw.size_canonical) {
            (Some(a), Some(b)) => score += w.size * size_closeness(a, b),
            (None, None) => score += w.size * 0.5,
            _ => {}
        }

        if w.category > 0.0 {
            if let (Some(a), Some(b)) = (&master.category, &raw.category) {
                if a.eq_ignore_ascii_case(b) {
                    score += w.category;
                }
            }
        }

        score
    }

    /// Combine the semantic score with attribute agreement and an optional
    /// normalization bonus into the final confidence and routing decision.
    ///
    /// `expansion_count` is the number of distinct successful token
    /// expansions performed during normalization; `None` means
    /// normalization was not requested.
    pub fn score(
        &self,
        semantic_score: f64,
        master: &MatchSide,
        raw: &MatchSide,
        expansion_count: Option<usize>,
    ) -> MatchScore {
        let attribute_score = self.attribute_score(master, raw);
        let normalization_bonus = expansion_count
            .map(|n| (NORMALIZATION_BONUS_STEP * n as f64).min(NORMALIZATION_BONUS_CAP))
            .unwrap_or(0.0);

        let final_confidence = Confidence::new(
            self.config.semantic_weight * semantic_score
                + self.config.attribute_weight * attribute_score
                + normalization_bonus,
        );

        MatchScore {
            semantic_score,
            attribute_score,
            normalization_bonus,
            final_confidence,
            recommended_status: self.config.thresholds.classify(final_confidence.value()),
        }
    }
}

impl Default for MatchScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

/// 1.0 for equal sizes, decreasing with relative difference, guarded
/// against a zero denominator.
fn size_closeness(a: f64, b: f64) -> f64 {
    if a == b {
        return 1.0;
    }
    let max = a.max(b);
    if max <= 0.0 {
        return 0.0;
    }
    (1.0 - (a - b).abs() / max).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_sizes_are_fully_close() {
        assert_eq!(size_closeness(124.21, 124.21), 1.0);
        assert_eq!(size_closeness(0.0, 0.0), 1.0);
    }

    #[test]
    fn closeness_decreases_with_relative_difference() {
        let c = size_closeness(1000.0, 500.0);
        assert!((c - 0.5).abs() < 1e-12);
        assert_eq!(size_closeness(1000.0, 0.0), 0.0);
    }

    #[test]
    fn bonus_is_capped() {
        let scorer = MatchScorer::default();
        let side = MatchSide::default();
        let s = scorer.score(0.5, &side, &side, Some(12));
        assert_eq!(s.normalization_bonus, 0.05);
        let s = scorer.score(0.5, &side, &side, Some(3));
        assert!((s.normalization_bonus - 0.03).abs() < 1e-12);
        let s = scorer.score(0.5, &side, &side, None);
        assert_eq!(s.normalization_bonus, 0.0);
    }
}
