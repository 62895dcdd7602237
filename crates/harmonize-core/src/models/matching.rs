use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// Routing decision derived from the final confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedStatus {
    /// Confident enough to confirm without human review.
    AutoConfirm,
    /// Queue for human review.
    PendingReview,
    /// Likely a new or unmatched product.
    LowConfidence,
}

/// One side of a match comparison, reduced to the attributes the scorer uses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchSide {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    /// Size in the canonical volume/mass family (ml or g).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size_canonical: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Combined score for a proposed raw-to-canonical match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchScore {
    /// Externally supplied embedding cosine similarity, in [0,1].
    pub semantic_score: f64,
    /// Locally computed brand/size/category agreement, in [0,1].
    pub attribute_score: f64,
    /// Small bonus for descriptions the normalizer was able to clean up.
    pub normalization_bonus: f64,
    pub final_confidence: Confidence,
    pub recommended_status: RecommendedStatus,
}
