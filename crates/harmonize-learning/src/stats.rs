//! Per-source accuracy bookkeeping.

use std::collections::BTreeMap;

use harmonize_core::models::feedback::{HitlDecision, SourceStats};

/// Running statistics per source. Means are incremental, so they reflect
/// every decision ever recorded even after the decision log evicts old
/// entries.
#[derive(Default)]
pub struct StatsBook {
    by_source: BTreeMap<String, SourceStats>,
}

impl StatsBook {
    /// Rebuild from a persisted decision window at startup.
    pub fn rebuild<'a>(decisions: impl Iterator<Item = &'a HitlDecision>) -> Self {
        let mut book = Self::default();
        for decision in decisions {
            book.record(decision);
        }
        book
    }

    pub fn record(&mut self, decision: &HitlDecision) {
        self.by_source
            .entry(decision.source_id.clone())
            .or_default()
            .record(decision.decision, decision.original_confidence);
    }

    pub fn get(&self, source_id: &str) -> Option<&SourceStats> {
        self.by_source.get(source_id)
    }

    pub fn all(&self) -> &BTreeMap<String, SourceStats> {
        &self.by_source
    }

    pub fn sources(&self) -> Vec<String> {
        self.by_source.keys().cloned().collect()
    }
}
