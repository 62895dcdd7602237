use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::confidence::Confidence;

/// A human reviewer's verdict on a proposed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Approved,
    Rejected,
}

/// Immutable record of one human decision.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitlDecision {
    /// Record identity, generated at append time.
    pub id: Uuid,
    /// The mapping the reviewer judged.
    pub mapping_id: String,
    /// Raw retailer description as received.
    pub raw_description: String,
    /// Canonical golden-record text the mapping proposed.
    pub canonical_text: String,
    pub decision: Decision,
    /// Confidence the scorer assigned before review.
    pub original_confidence: Confidence,
    /// Retailer or feed that produced the raw description.
    pub source_id: String,
    pub timestamp: DateTime<Utc>,
    /// Free-form corrections supplied by the reviewer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrections: Option<serde_json::Value>,
}

/// An abbreviation pattern mined from approved matches.
///
/// Confidence grows with repeat sightings and never decreases; it is capped
/// below the static-dictionary level so learned mappings stay distinguishable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearnedPattern {
    pub abbreviation: String,
    pub expansion: String,
    pub occurrences: u32,
    pub confidence: Confidence,
    /// Sources that produced this pattern at least once.
    pub sources: BTreeSet<String>,
    pub last_seen: DateTime<Utc>,
}

/// Per-source decision statistics with incremental running means.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceStats {
    pub total: u64,
    pub approved: u64,
    pub rejected: u64,
    pub avg_confidence_approved: f64,
    pub avg_confidence_rejected: f64,
}

impl SourceStats {
    /// Fold one decision into the running means.
    pub fn record(&mut self, decision: Decision, confidence: Confidence) {
        self.total += 1;
        match decision {
            Decision::Approved => {
                self.approved += 1;
                let n = self.approved as f64;
                self.avg_confidence_approved =
                    (self.avg_confidence_approved * (n - 1.0) + confidence.value()) / n;
            }
            Decision::Rejected => {
                self.rejected += 1;
                let n = self.rejected as f64;
                self.avg_confidence_rejected =
                    (self.avg_confidence_rejected * (n - 1.0) + confidence.value()) / n;
            }
        }
    }

    /// Share of decisions that were approvals, or None before any decision.
    pub fn approval_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.approved as f64 / self.total as f64)
    }
}

/// Threshold recommendation derived from the decision history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRecommendation {
    pub auto_confirm_threshold: f64,
    pub review_threshold: f64,
    pub total_decisions: usize,
    pub approved: usize,
    pub rejected: usize,
    pub approval_rate: f64,
    /// Present when defaults were returned for lack of data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Aggregate view of everything the system has learned so far.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningSummary {
    pub total_decisions: usize,
    pub patterns_learned: usize,
    /// Patterns at or above the promotion confidence.
    pub high_confidence_patterns: usize,
    pub sources_seen: Vec<String>,
    pub source_stats: std::collections::BTreeMap<String, SourceStats>,
    pub recommendations: ThresholdRecommendation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn running_mean_matches_batch_mean() {
        let mut stats = SourceStats::default();
        let values = [0.9, 0.8, 0.7, 0.95];
        for v in values {
            stats.record(Decision::Approved, Confidence::new(v));
        }
        let expected = values.iter().sum::<f64>() / values.len() as f64;
        assert!((stats.avg_confidence_approved - expected).abs() < 1e-12);
        assert_eq!(stats.approval_rate(), Some(1.0));
    }

    #[test]
    fn rejected_mean_tracked_separately() {
        let mut stats = SourceStats::default();
        stats.record(Decision::Approved, Confidence::new(0.9));
        stats.record(Decision::Rejected, Confidence::new(0.4));
        stats.record(Decision::Rejected, Confidence::new(0.6));
        assert!((stats.avg_confidence_approved - 0.9).abs() < 1e-12);
        assert!((stats.avg_confidence_rejected - 0.5).abs() < 1e-12);
        assert!((stats.approval_rate().unwrap() - 1.0 / 3.0).abs() < 1e-12);
    }
}
