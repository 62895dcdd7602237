//! # harmonize-core
//!
//! Foundation crate for the harmonize product-matching engine.
//! Defines all shared types, traits, errors, and constants.
//! Every other crate in the workspace depends on this.

pub mod confidence;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use confidence::Confidence;
pub use errors::{HarmonizeError, HarmonizeResult};
pub use models::brand::{BrandEntry, BrandMatch, DictionarySource};
pub use models::feedback::{Decision, HitlDecision, LearnedPattern, SourceStats};
pub use models::matching::{MatchScore, MatchSide, RecommendedStatus};
pub use models::normalization::{Expansion, ExpansionMethod, NormalizationResult, SizeInfo};
