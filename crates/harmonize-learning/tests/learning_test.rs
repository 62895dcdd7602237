//! Integration tests for the feedback learner.

use std::sync::Arc;

use harmonize_core::models::feedback::Decision;
use harmonize_knowledge::{BrandKnowledgeBase, MemoryStore};
use harmonize_learning::{DecisionRequest, FeedbackLearner};

fn learner() -> (Arc<BrandKnowledgeBase>, FeedbackLearner) {
    let kb = Arc::new(BrandKnowledgeBase::new(Arc::new(MemoryStore::new())));
    let learner = FeedbackLearner::new(
        kb.clone(),
        Arc::new(MemoryStore::new()),
        Arc::new(MemoryStore::new()),
    );
    (kb, learner)
}

fn request(raw: &str, canonical: &str, decision: Decision, confidence: f64) -> DecisionRequest {
    DecisionRequest {
        mapping_id: "map-1".to_string(),
        raw_description: raw.to_string(),
        canonical_text: canonical.to_string(),
        decision,
        original_confidence: confidence,
        source_id: "kroger".to_string(),
        corrections: None,
    }
}

#[test]
fn recording_updates_source_stats_incrementally() {
    let (_, learner) = learner();
    learner.record_decision(request("RAW", "Canonical", Decision::Approved, 0.9));
    learner.record_decision(request("RAW", "Canonical", Decision::Approved, 0.8));
    learner.record_decision(request("RAW", "Canonical", Decision::Rejected, 0.55));

    let stats = learner.source_stats("kroger").unwrap();
    assert_eq!(stats.total, 3);
    assert_eq!(stats.approved, 2);
    assert_eq!(stats.rejected, 1);
    assert!((stats.avg_confidence_approved - 0.85).abs() < 1e-12);
    assert!((stats.avg_confidence_rejected - 0.55).abs() < 1e-12);
}

#[test]
fn no_decisions_yields_defaults_with_a_note() {
    let (_, learner) = learner();
    let rec = learner.recommendations();
    assert_eq!(rec.auto_confirm_threshold, 0.95);
    assert_eq!(rec.review_threshold, 0.70);
    assert!(rec.note.is_some());
}

#[test]
fn auto_threshold_tracks_fifth_percentile_of_approvals() {
    let (_, learner) = learner();
    // 20 approvals uniformly spread over [0.85, 1.0].
    let confidences: Vec<f64> = (0..20).map(|i| 0.85 + i as f64 * (0.15 / 19.0)).collect();
    for c in &confidences {
        learner.record_decision(request("RAW", "Canonical", Decision::Approved, *c));
    }

    let rec = learner.recommendations();
    let expected = confidences[1]; // floor(0.05 * 20) = index 1 of the sorted list
    assert!((rec.auto_confirm_threshold - expected).abs() < 0.01);
    assert!(rec.auto_confirm_threshold >= confidences[0] - 1e-9);
    assert!(rec.note.is_none());
    // No rejections yet: review threshold stays at the default.
    assert_eq!(rec.review_threshold, 0.70);
}

#[test]
fn review_threshold_sits_under_lowest_rejection_with_floor() {
    let (_, learner) = learner();
    learner.record_decision(request("RAW", "Canonical", Decision::Approved, 0.9));
    learner.record_decision(request("RAW", "Canonical", Decision::Rejected, 0.72));
    let rec = learner.recommendations();
    assert!((rec.review_threshold - 0.67).abs() < 1e-9);

    learner.record_decision(request("RAW", "Canonical", Decision::Rejected, 0.4));
    let rec = learner.recommendations();
    assert_eq!(rec.review_threshold, 0.50, "floored at 0.50");
}

#[test]
fn approvals_mine_patterns_rejections_do_not() {
    let (_, learner) = learner();
    learner.record_decision(request(
        "CRST WHTN FLRD",
        "Crest Whitening Fluoride",
        Decision::Rejected,
        0.6,
    ));
    assert!(learner.patterns(1).is_empty());

    learner.record_decision(request(
        "CRST WHTN FLRD",
        "Crest Whitening Fluoride",
        Decision::Approved,
        0.9,
    ));
    let patterns = learner.patterns(1);
    let abbrevs: Vec<&str> = patterns.iter().map(|p| p.abbreviation.as_str()).collect();
    assert!(abbrevs.contains(&"FLRD"), "got {abbrevs:?}");
    assert!(abbrevs.contains(&"WHTN"));
}

#[test]
fn third_approval_promotes_pattern_into_knowledge_base() {
    let (kb, learner) = learner();
    assert!(kb.expand_abbreviation("FLRD").is_none());

    for _ in 0..2 {
        learner.record_decision(request("FLRD", "Fluoride", Decision::Approved, 0.9));
    }
    // Two sightings: confidence 0.8 but occurrence gate not yet met.
    assert!(kb.expand_abbreviation("FLRD").is_none());

    learner.record_decision(request("FLRD", "Fluoride", Decision::Approved, 0.9));
    assert_eq!(kb.expand_abbreviation("FLRD").as_deref(), Some("Fluoride"));

    // Promotion is idempotent: further approvals do not disturb the mapping.
    learner.record_decision(request("FLRD", "Fluoride", Decision::Approved, 0.9));
    assert_eq!(kb.expand_abbreviation("FLRD").as_deref(), Some("Fluoride"));
}

#[test]
fn failed_store_write_reports_unpersisted_but_keeps_state() {
    let kb = Arc::new(BrandKnowledgeBase::new(Arc::new(MemoryStore::new())));
    let decision_store = Arc::new(MemoryStore::new());
    let learner = FeedbackLearner::new(kb, decision_store.clone(), Arc::new(MemoryStore::new()));

    decision_store.fail_saves(true);
    let outcome =
        learner.record_decision(request("RAW", "Canonical", Decision::Approved, 0.9));
    assert!(!outcome.persisted);
    // Memory state is authoritative regardless.
    assert_eq!(learner.source_stats("kroger").unwrap().total, 1);

    decision_store.fail_saves(false);
    let outcome =
        learner.record_decision(request("RAW", "Canonical", Decision::Approved, 0.8));
    assert!(outcome.persisted);
}

#[test]
fn summary_aggregates_counts_and_recommendations() {
    let (_, learner) = learner();
    learner.record_decision(request(
        "CRST WHTN",
        "Crest Whitening",
        Decision::Approved,
        0.9,
    ));
    let summary = learner.summary();
    assert_eq!(summary.total_decisions, 1);
    assert!(summary.patterns_learned >= 1);
    assert_eq!(summary.sources_seen, vec!["kroger".to_string()]);
    assert!(summary.source_stats.contains_key("kroger"));
}

#[test]
fn patterns_filter_by_minimum_occurrences() {
    let (_, learner) = learner();
    learner.record_decision(request("WHTN", "Whitening", Decision::Approved, 0.9));
    learner.record_decision(request("WHTN", "Whitening", Decision::Approved, 0.9));
    learner.record_decision(request("FLRD", "Fluoride", Decision::Approved, 0.9));

    assert_eq!(learner.patterns(2).len(), 1);
    assert_eq!(learner.patterns(1).len(), 2);
    // Sorted by occurrences, most seen first.
    assert_eq!(learner.patterns(1)[0].abbreviation, "WHTN");
}
