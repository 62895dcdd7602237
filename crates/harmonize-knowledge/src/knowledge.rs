//! The brand knowledge base: static tables plus the learned overlay.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use harmonize_core::confidence::Confidence;
use harmonize_core::errors::HarmonizeResult;
use harmonize_core::models::brand::{BrandEntry, BrandMatch, DictionarySource};
use harmonize_core::traits::ISnapshotStore;

use crate::statics;

/// Persisted form of everything the knowledge base has learned.
///
/// `brands` is reserved for learned brand aliases; the current feedback loop
/// only grows `abbreviations`, but the slot is kept so the file format does
/// not need to change when brand learning lands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LearnedSnapshot {
    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,
    #[serde(default)]
    pub brands: BTreeMap<String, BrandEntry>,
}

/// Caller-supplied dictionary merged over the static tables at startup.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomDictionary {
    #[serde(default)]
    pub brands: BTreeMap<String, BrandEntry>,
    #[serde(default)]
    pub abbreviations: BTreeMap<String, String>,
}

impl CustomDictionary {
    /// Load from a JSON file with `brands` and `abbreviations` sections.
    pub fn from_file(path: impl AsRef<Path>) -> HarmonizeResult<Self> {
        let bytes = std::fs::read(path.as_ref())
            .map_err(harmonize_core::errors::StoreError::Io)?;
        let dict = serde_json::from_slice(&bytes)
            .map_err(harmonize_core::errors::StoreError::Json)?;
        Ok(dict)
    }
}

struct KnowledgeState {
    /// Static + custom + learned brand aliases, keyed uppercase.
    brands: BTreeMap<String, BrandEntry>,
    /// Static + custom abbreviations, keyed uppercase.
    abbreviations: BTreeMap<String, String>,
    /// The learned overlay, exactly as persisted.
    learned: LearnedSnapshot,
}

/// Dictionary mapping abbreviations and codes to canonical brand identity
/// and short tokens to expanded words.
///
/// Read operations take a read lock and never touch I/O. `learn` serializes
/// mutations behind the write lock and synchronously rewrites the persisted
/// snapshot.
pub struct BrandKnowledgeBase {
    store: Arc<dyn ISnapshotStore<LearnedSnapshot>>,
    state: RwLock<KnowledgeState>,
}

impl BrandKnowledgeBase {
    pub fn new(store: Arc<dyn ISnapshotStore<LearnedSnapshot>>) -> Self {
        Self::with_custom_dictionary(store, CustomDictionary::default())
    }

    /// Build the knowledge base, merging a custom dictionary over the static
    /// tables. A missing or corrupt learned snapshot degrades to an empty
    /// learned table; the static dictionary is always available.
    pub fn with_custom_dictionary(
        store: Arc<dyn ISnapshotStore<LearnedSnapshot>>,
        custom: CustomDictionary,
    ) -> Self {
        let mut brands: BTreeMap<String, BrandEntry> = statics::BRANDS
            .iter()
            .map(|(alias, entry)| (alias.to_string(), entry.clone()))
            .collect();
        let mut abbreviations: BTreeMap<String, String> = statics::ABBREVIATIONS
            .iter()
            .map(|(abbrev, full)| (abbrev.to_string(), full.to_string()))
            .collect();

        for (alias, entry) in custom.brands {
            brands.insert(alias.to_uppercase(), entry);
        }
        for (abbrev, full) in custom.abbreviations {
            abbreviations.insert(abbrev.to_uppercase(), full);
        }

        let learned = match store.load() {
            Ok(Some(snapshot)) => snapshot,
            Ok(None) => LearnedSnapshot::default(),
            Err(e) => {
                warn!(error = %e, "could not load learned mappings, starting empty");
                LearnedSnapshot::default()
            }
        };

        // Learned brand aliases join the main table with learned trust.
        for (alias, entry) in &learned.brands {
            let mut entry = entry.clone();
            entry.source = DictionarySource::Learned;
            brands.insert(alias.to_uppercase(), entry);
        }

        Self {
            store,
            state: RwLock::new(KnowledgeState {
                brands,
                abbreviations,
                learned,
            }),
        }
    }

    /// Look up a brand by alias or code. Static hits carry confidence 1.0,
    /// anything resolved through the learned overlay carries 0.95.
    pub fn lookup(&self, text: &str) -> Option<BrandMatch> {
        let key = text.trim().to_uppercase();
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);

        if let Some(entry) = state.brands.get(&key) {
            let confidence = match entry.source {
                DictionarySource::Static => Confidence::EXACT,
                DictionarySource::Learned => Confidence::LEARNED,
            };
            return Some(BrandMatch {
                original: text.to_string(),
                canonical_name: entry.name.clone(),
                confidence: Confidence::new(confidence),
                category: entry.category.clone(),
                manufacturer: entry.manufacturer.clone(),
            });
        }

        // A learned abbreviation may alias a known brand.
        if let Some(expansion) = state.learned.abbreviations.get(&key) {
            if let Some(entry) = state.brands.get(&expansion.to_uppercase()) {
                return Some(BrandMatch {
                    original: text.to_string(),
                    canonical_name: entry.name.clone(),
                    confidence: Confidence::new(Confidence::LEARNED),
                    category: entry.category.clone(),
                    manufacturer: entry.manufacturer.clone(),
                });
            }
        }

        None
    }

    /// Expand a single token: static table first, then learned.
    pub fn expand_abbreviation(&self, token: &str) -> Option<String> {
        let key = token.trim().to_uppercase();
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .abbreviations
            .get(&key)
            .or_else(|| state.learned.abbreviations.get(&key))
            .cloned()
    }

    /// Record a learned abbreviation and synchronously rewrite the snapshot.
    ///
    /// Idempotent upsert. A failed write is reported to the caller but the
    /// in-memory mapping stays authoritative; the next successful save
    /// reconciles disk state.
    pub fn learn(&self, abbreviation: &str, expansion: &str) -> HarmonizeResult<()> {
        let key = abbreviation.trim().to_uppercase();
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        let previous = state
            .learned
            .abbreviations
            .insert(key.clone(), expansion.to_string());

        if previous.as_deref() != Some(expansion) {
            info!(abbreviation = %key, expansion, "learned abbreviation mapping");
        }

        if let Err(e) = self.store.save(&state.learned) {
            warn!(error = %e, "failed to persist learned mappings, memory state kept");
            return Err(e);
        }
        Ok(())
    }

    /// Deduplicated canonical brand names.
    pub fn all_brands(&self) -> Vec<String> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = state.brands.values().map(|e| e.name.clone()).collect();
        names.sort();
        names.dedup();
        names
    }

    /// Full entry for a brand by canonical name, case-insensitive.
    pub fn brand_info(&self, name: &str) -> Option<BrandEntry> {
        let state = self.state.read().unwrap_or_else(PoisonError::into_inner);
        state
            .brands
            .values()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .cloned()
    }
}
