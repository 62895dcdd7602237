//! Integration tests for attribute scoring and classification.

use harmonize_core::models::matching::{MatchSide, RecommendedStatus};
use harmonize_matching::similarity::brand_similarity;
use harmonize_matching::{MatchScorer, ScoringConfig, Thresholds};

fn side(brand: Option<&str>, size: Option<f64>) -> MatchSide {
    MatchSide {
        brand: brand.map(str::to_string),
        size_canonical: size,
        category: None,
    }
}

#[test]
fn identical_brand_and_size_score_exactly_one() {
    let scorer = MatchScorer::default();
    let a = side(Some("Crest"), Some(124.21));
    let b = side(Some("Crest"), Some(124.21));
    let score = scorer.attribute_score(&a, &b);
    assert!((score - 1.0).abs() < 1e-9, "got {score}");
}

#[test]
fn brand_mismatch_with_matching_size_decomposes_by_weights() {
    let scorer = MatchScorer::default();
    let a = side(Some("Crest"), Some(100.0));
    let b = side(Some("Colgate"), Some(100.0));
    let expected = 0.4 * 1.0 + 0.6 * brand_similarity("Crest", "Colgate");
    let score = scorer.attribute_score(&a, &b);
    assert!((score - expected).abs() < 1e-9);
}

#[test]
fn both_sides_missing_get_neutral_half_credit() {
    let scorer = MatchScorer::default();
    let score = scorer.attribute_score(&side(None, None), &side(None, None));
    // 0.6 * 0.5 + 0.4 * 0.5
    assert!((score - 0.5).abs() < 1e-9);
}

#[test]
fn one_sided_attributes_contribute_zero() {
    let scorer = MatchScorer::default();
    let score = scorer.attribute_score(&side(Some("Crest"), Some(100.0)), &side(None, None));
    assert_eq!(score, 0.0);
}

#[test]
fn category_term_only_counts_under_category_weights() {
    let config = ScoringConfig {
        weights: harmonize_matching::AttributeWeights::with_category(),
        ..ScoringConfig::default()
    };
    let scorer = MatchScorer::new(config);
    let mut a = side(Some("Crest"), Some(100.0));
    let mut b = side(Some("Crest"), Some(100.0));
    a.category = Some("Oral Care".to_string());
    b.category = Some("oral care".to_string());
    let score = scorer.attribute_score(&a, &b);
    // 0.5 + 0.35 + 0.15, category compared case-insensitively.
    assert!((score - 1.0).abs() < 1e-9);

    b.category = Some("Snacks".to_string());
    let score = scorer.attribute_score(&a, &b);
    assert!((score - 0.85).abs() < 1e-9);
}

#[test]
fn final_confidence_blends_seventy_thirty() {
    let scorer = MatchScorer::default();
    let a = side(Some("Crest"), Some(124.21));
    let b = side(Some("Crest"), Some(124.21));
    let score = scorer.score(0.9, &a, &b, None);
    let expected = 0.70 * 0.9 + 0.30 * 1.0;
    assert!((score.final_confidence.value() - expected).abs() < 1e-9);
}

#[test]
fn confidence_is_clamped_even_with_bonus() {
    let scorer = MatchScorer::default();
    let a = side(Some("Crest"), Some(124.21));
    let score = scorer.score(1.0, &a, &a, Some(10));
    assert_eq!(score.final_confidence.value(), 1.0);
}

#[test]
fn classification_uses_inclusive_thresholds() {
    let t = Thresholds::default();
    assert_eq!(t.classify(0.95), RecommendedStatus::AutoConfirm);
    assert_eq!(t.classify(0.9499), RecommendedStatus::PendingReview);
    assert_eq!(t.classify(0.70), RecommendedStatus::PendingReview);
    assert_eq!(t.classify(0.6999), RecommendedStatus::LowConfidence);
}

#[test]
fn adaptive_defaults_are_looser() {
    let t = Thresholds::adaptive_defaults();
    assert_eq!(t.classify(0.91), RecommendedStatus::AutoConfirm);
    assert_eq!(t.classify(0.65), RecommendedStatus::PendingReview);
}
