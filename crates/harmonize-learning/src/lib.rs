//! # harmonize-learning
//!
//! Closes the feedback loop: records human approve/reject decisions, mines
//! abbreviation patterns from approvals, tracks per-source accuracy, and
//! recomputes the confidence thresholds the scorer classifies with.

pub mod decision_log;
pub mod learner;
pub mod patterns;
pub mod stats;

pub use learner::{DecisionRequest, FeedbackLearner, RecordOutcome};
pub use patterns::is_abbreviation_of;
