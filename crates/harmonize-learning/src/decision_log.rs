//! Bounded, append-only log of HITL decisions.
//!
//! One ring buffer serves both the in-memory state and the persisted file:
//! what is on disk is always the retained window serialized, so the two can
//! never disagree about which decisions exist.

use std::collections::VecDeque;
use std::sync::Arc;

use tracing::warn;

use harmonize_core::constants::DECISION_LOG_CAPACITY;
use harmonize_core::errors::HarmonizeResult;
use harmonize_core::models::feedback::HitlDecision;
use harmonize_core::traits::ISnapshotStore;

pub struct DecisionLog {
    ring: VecDeque<HitlDecision>,
    store: Arc<dyn ISnapshotStore<Vec<HitlDecision>>>,
}

impl DecisionLog {
    /// Load the retained window from the store; a missing or corrupt file
    /// starts the log empty.
    pub fn new(store: Arc<dyn ISnapshotStore<Vec<HitlDecision>>>) -> Self {
        let ring = match store.load() {
            Ok(Some(decisions)) => {
                let mut ring = VecDeque::from(decisions);
                while ring.len() > DECISION_LOG_CAPACITY {
                    ring.pop_front();
                }
                ring
            }
            Ok(None) => VecDeque::new(),
            Err(e) => {
                warn!(error = %e, "could not load decision log, starting empty");
                VecDeque::new()
            }
        };
        Self { ring, store }
    }

    /// Append a decision, evicting the oldest once the window is full.
    pub fn append(&mut self, decision: HitlDecision) {
        self.ring.push_back(decision);
        while self.ring.len() > DECISION_LOG_CAPACITY {
            self.ring.pop_front();
        }
    }

    /// Rewrite the persisted window.
    pub fn persist(&self) -> HarmonizeResult<()> {
        let window: Vec<HitlDecision> = self.ring.iter().cloned().collect();
        self.store.save(&window)
    }

    pub fn len(&self) -> usize {
        self.ring.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HitlDecision> {
        self.ring.iter()
    }
}
