use serde::{Deserialize, Serialize};

use crate::confidence::Confidence;

/// Where a dictionary entry came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DictionarySource {
    /// Seeded from the built-in FMCG tables.
    #[default]
    Static,
    /// Acquired through the feedback loop.
    Learned,
}

/// Canonical brand identity behind one or more aliases.
///
/// Many aliases may map to the same entry ("CRST", "CR" and "CREST" all
/// resolve to Crest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandEntry {
    /// Canonical brand name as printed on the golden record.
    pub name: String,
    /// Product category, e.g. "Oral Care".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Owning manufacturer, e.g. "Procter & Gamble".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
    #[serde(default)]
    pub source: DictionarySource,
}

impl BrandEntry {
    pub fn new(name: &str, category: &str, manufacturer: &str) -> Self {
        Self {
            name: name.to_string(),
            category: Some(category.to_string()),
            manufacturer: Some(manufacturer.to_string()),
            source: DictionarySource::Static,
        }
    }
}

/// Result of a brand lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandMatch {
    /// The text the caller looked up.
    pub original: String,
    /// Canonical brand name.
    pub canonical_name: String,
    /// 1.0 for static hits, 0.95 for hits routed through the learned table.
    pub confidence: Confidence,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<String>,
}
