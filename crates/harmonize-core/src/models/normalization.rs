use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// Strategy that produced an expansion, ordered by decreasing trust.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionMethod {
    /// Exact hit in the static or learned abbreviation table.
    Dictionary,
    /// Consonant-skeleton match against the known-word table.
    Pattern,
    /// Best-scoring prefix or sequence-similarity candidate.
    Fuzzy,
    /// No strategy matched; the token passed through unchanged.
    None,
}

/// A single token expansion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expansion {
    pub original: String,
    pub expanded: String,
    pub confidence: Confidence,
    pub method: ExpansionMethod,
}

impl Expansion {
    /// Whether the expansion actually changed the token (case-insensitive).
    pub fn changed(&self) -> bool {
        self.method != ExpansionMethod::None
            && !self.original.eq_ignore_ascii_case(&self.expanded)
    }
}

/// Extracted package size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeInfo {
    /// Value as written, e.g. 4.2.
    pub value: f64,
    /// Canonical display unit, e.g. "oz", "L", "g".
    pub unit: String,
    /// Value converted to the canonical volume/mass family (ml or g).
    pub canonical: f64,
}

/// Result of normalizing one product description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub original: String,
    pub normalized: String,
    /// Detected canonical brand, if any leading-token window matched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    pub brand_confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeInfo>,
    /// Expansions that actually changed a token.
    pub expansions: Vec<Expansion>,
    /// Category of the detected brand, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_hint: Option<String>,
}

/// Attributes parsed out of a description without full normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<SizeInfo>,
    /// Variant or flavor hint, e.g. "Mint" or "Whitening".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
}
