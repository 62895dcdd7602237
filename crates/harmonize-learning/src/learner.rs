//! FeedbackLearner: records human decisions and turns them into knowledge.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use harmonize_core::confidence::Confidence;
use harmonize_core::constants::{
    DEFAULT_AUTO_THRESHOLD, DEFAULT_REVIEW_THRESHOLD, REVIEW_FLOOR, REVIEW_MARGIN,
};
use harmonize_core::models::feedback::{
    Decision, HitlDecision, LearnedPattern, LearningSummary, SourceStats, ThresholdRecommendation,
};
use harmonize_core::traits::ISnapshotStore;
use harmonize_knowledge::BrandKnowledgeBase;

use crate::decision_log::DecisionLog;
use crate::patterns::{mine_patterns, PatternBook};
use crate::stats::StatsBook;

/// Caller-facing payload for recording one decision.
#[derive(Debug, Clone)]
pub struct DecisionRequest {
    pub mapping_id: String,
    pub raw_description: String,
    pub canonical_text: String,
    pub decision: Decision,
    pub original_confidence: f64,
    pub source_id: String,
    pub corrections: Option<serde_json::Value>,
}

/// What happened when a decision was recorded.
///
/// `persisted` is false when a store write failed; the in-memory state is
/// still updated and stays authoritative until the next successful save.
#[derive(Debug, Clone)]
pub struct RecordOutcome {
    pub decision: HitlDecision,
    pub persisted: bool,
}

struct LearnerState {
    log: DecisionLog,
    patterns: PatternBook,
    stats: StatsBook,
}

/// Records approve/reject decisions, mines abbreviation patterns from
/// approvals, and recomputes the adaptive confidence thresholds.
///
/// All mutation is serialized behind one lock; reads take the same lock
/// briefly and never touch I/O.
pub struct FeedbackLearner {
    kb: Arc<BrandKnowledgeBase>,
    state: Mutex<LearnerState>,
}

impl FeedbackLearner {
    pub fn new(
        kb: Arc<BrandKnowledgeBase>,
        decision_store: Arc<dyn ISnapshotStore<Vec<HitlDecision>>>,
        pattern_store: Arc<dyn ISnapshotStore<BTreeMap<String, LearnedPattern>>>,
    ) -> Self {
        let log = DecisionLog::new(decision_store);
        let stats = StatsBook::rebuild(log.iter());
        let patterns = PatternBook::new(pattern_store);
        Self {
            kb,
            state: Mutex::new(LearnerState {
                log,
                patterns,
                stats,
            }),
        }
    }

    /// Record an immutable decision, update source statistics, and mine
    /// new abbreviation patterns when the match was approved.
    pub fn record_decision(&self, request: DecisionRequest) -> RecordOutcome {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let now = Utc::now();
        let mut persisted = true;

        let decision = HitlDecision {
            id: Uuid::new_v4(),
            mapping_id: request.mapping_id,
            raw_description: request.raw_description.clone(),
            canonical_text: request.canonical_text.clone(),
            decision: request.decision,
            original_confidence: Confidence::new(request.original_confidence),
            source_id: request.source_id.clone(),
            timestamp: now,
            corrections: request.corrections,
        };

        state.stats.record(&decision);
        state.log.append(decision.clone());

        if request.decision == Decision::Approved {
            for (abbrev, full) in mine_patterns(&request.raw_description, &request.canonical_text)
            {
                let pattern = state
                    .patterns
                    .observe(&abbrev, &full, &request.source_id, now)
                    .clone();
                if PatternBook::promotable(&pattern) {
                    match self.kb.learn(&pattern.abbreviation, &pattern.expansion) {
                        Ok(()) => info!(
                            abbreviation = %pattern.abbreviation,
                            expansion = %pattern.expansion,
                            occurrences = pattern.occurrences,
                            "promoted learned pattern into knowledge base"
                        ),
                        Err(e) => {
                            warn!(error = %e, "pattern promotion did not persist");
                            persisted = false;
                        }
                    }
                }
            }
        }

        if let Err(e) = state.log.persist() {
            warn!(error = %e, "decision log write failed, memory state kept");
            persisted = false;
        }
        if let Err(e) = state.patterns.persist() {
            warn!(error = %e, "pattern store write failed, memory state kept");
            persisted = false;
        }

        RecordOutcome {
            decision,
            persisted,
        }
    }

    /// Recommend confidence thresholds from the retained decision window.
    ///
    /// The auto-confirm bound sits at the 5th percentile of approved
    /// confidences, so roughly 95% of historically approved matches would
    /// clear it. The review bound sits just under the lowest rejection,
    /// floored at 0.50.
    pub fn recommendations(&self) -> ThresholdRecommendation {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        Self::recommendations_from(&state.log)
    }

    fn recommendations_from(log: &DecisionLog) -> ThresholdRecommendation {
        let defaults = |note: &str, approved: usize, rejected: usize| ThresholdRecommendation {
            auto_confirm_threshold: DEFAULT_AUTO_THRESHOLD,
            review_threshold: DEFAULT_REVIEW_THRESHOLD,
            total_decisions: log.len(),
            approved,
            rejected,
            approval_rate: if log.len() > 0 {
                approved as f64 / log.len() as f64
            } else {
                0.0
            },
            note: Some(note.to_string()),
        };

        if log.is_empty() {
            return defaults("no feedback recorded yet, using defaults", 0, 0);
        }

        let mut approved: Vec<f64> = Vec::new();
        let mut rejected: Vec<f64> = Vec::new();
        for decision in log.iter() {
            let confidence = decision.original_confidence.value();
            match decision.decision {
                Decision::Approved => approved.push(confidence),
                Decision::Rejected => rejected.push(confidence),
            }
        }

        if approved.is_empty() {
            return defaults("no approved matches yet, using defaults", 0, rejected.len());
        }

        approved.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        let percentile_index = (approved.len() as f64 * 0.05).floor() as usize;
        let auto_confirm = round2(approved[percentile_index.min(approved.len() - 1)]);

        let review = if rejected.is_empty() {
            DEFAULT_REVIEW_THRESHOLD
        } else {
            let min_rejected = rejected.iter().copied().fold(f64::INFINITY, f64::min);
            round2((min_rejected - REVIEW_MARGIN).max(REVIEW_FLOOR))
        };

        ThresholdRecommendation {
            auto_confirm_threshold: auto_confirm,
            review_threshold: review,
            total_decisions: log.len(),
            approved: approved.len(),
            rejected: rejected.len(),
            approval_rate: approved.len() as f64 / log.len() as f64,
            note: None,
        }
    }

    /// Patterns with at least `min_occurrences` sightings, most seen first.
    pub fn patterns(&self, min_occurrences: u32) -> Vec<LearnedPattern> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.patterns.all(min_occurrences)
    }

    /// Statistics for one source.
    pub fn source_stats(&self, source_id: &str) -> Option<SourceStats> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.stats.get(source_id).cloned()
    }

    /// Statistics for every source seen so far.
    pub fn all_source_stats(&self) -> BTreeMap<String, SourceStats> {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.stats.all().clone()
    }

    /// Aggregate view of decisions, patterns, and recommendations.
    pub fn summary(&self) -> LearningSummary {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        LearningSummary {
            total_decisions: state.log.len(),
            patterns_learned: state.patterns.len(),
            high_confidence_patterns: state.patterns.high_confidence_count(),
            sources_seen: state.stats.sources(),
            source_stats: state.stats.all().clone(),
            recommendations: Self::recommendations_from(&state.log),
        }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
