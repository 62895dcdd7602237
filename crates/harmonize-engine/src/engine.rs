//! The engine facade.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use harmonize_core::models::feedback::{
    LearnedPattern, LearningSummary, SourceStats, ThresholdRecommendation,
};
use harmonize_core::models::matching::{MatchScore, MatchSide};
use harmonize_core::models::normalization::{Expansion, NormalizationResult, ParsedAttributes};
use harmonize_knowledge::{BrandKnowledgeBase, JsonFileStore, LearnedSnapshot, MemoryStore};
use harmonize_learning::{DecisionRequest, FeedbackLearner, RecordOutcome};
use harmonize_matching::{
    semantic_search, CorpusEntry, MatchScorer, ScoringConfig, SearchHit, Thresholds,
};
use harmonize_normalize::TextNormalizer;

/// Inputs for scoring one proposed raw-to-canonical match.
///
/// `semantic_score` is resolved by the caller, outside the engine, from the
/// embedding provider. Attributes left `None` are extracted from the texts.
#[derive(Debug, Clone)]
pub struct MatchRequest {
    pub master_text: String,
    pub master_attrs: Option<MatchSide>,
    pub raw_text: String,
    pub raw_attrs: Option<MatchSide>,
    pub semantic_score: f64,
    /// When set, the raw description's successful expansions earn the
    /// normalization bonus.
    pub normalize: bool,
}

/// The logically-single shared engine instance.
///
/// Read operations are safe to run in parallel; learning operations
/// serialize per mutable store.
pub struct HarmonizeEngine {
    kb: Arc<BrandKnowledgeBase>,
    normalizer: TextNormalizer,
    scorer: RwLock<MatchScorer>,
    learner: FeedbackLearner,
}

impl HarmonizeEngine {
    /// Open an engine with file-backed stores under `data_dir`.
    pub fn open(data_dir: impl AsRef<Path>) -> Self {
        let dir = data_dir.as_ref();
        let learned_store =
            Arc::new(JsonFileStore::<LearnedSnapshot>::new(dir.join("learned_mappings.json")));
        let kb = Arc::new(BrandKnowledgeBase::new(learned_store));
        let learner = FeedbackLearner::new(
            kb.clone(),
            Arc::new(JsonFileStore::new(dir.join("hitl_decisions.json"))),
            Arc::new(JsonFileStore::new(dir.join("learned_patterns.json"))),
        );
        info!(data_dir = %dir.display(), "harmonize engine ready");
        Self::assemble(kb, learner, ScoringConfig::default())
    }

    /// Engine with in-memory stores, for tests and embedded use.
    pub fn in_memory() -> Self {
        let kb = Arc::new(BrandKnowledgeBase::new(Arc::new(
            MemoryStore::<LearnedSnapshot>::new(),
        )));
        let learner = FeedbackLearner::new(
            kb.clone(),
            Arc::new(MemoryStore::new()),
            Arc::new(MemoryStore::new()),
        );
        Self::assemble(kb, learner, ScoringConfig::default())
    }

    /// Assemble from pre-built components, e.g. with a custom dictionary
    /// or non-default scoring configuration.
    pub fn assemble(
        kb: Arc<BrandKnowledgeBase>,
        learner: FeedbackLearner,
        config: ScoringConfig,
    ) -> Self {
        Self {
            normalizer: TextNormalizer::new(kb.clone()),
            scorer: RwLock::new(MatchScorer::new(config)),
            kb,
            learner,
        }
    }

    pub fn knowledge_base(&self) -> &Arc<BrandKnowledgeBase> {
        &self.kb
    }

    // --- Normalization ---

    pub fn normalize(&self, text: &str) -> NormalizationResult {
        self.normalizer.normalize(text)
    }

    pub fn normalize_batch(&self, texts: &[String]) -> Vec<NormalizationResult> {
        self.normalizer.normalize_batch(texts)
    }

    pub fn expand_text(&self, text: &str) -> (String, Vec<Expansion>) {
        self.normalizer.expand_text(text)
    }

    pub fn clean_description(&self, text: &str) -> String {
        self.normalizer.clean_description(text)
    }

    pub fn parse_attributes(&self, text: &str) -> ParsedAttributes {
        self.normalizer.parse_attributes(text)
    }

    // --- Matching ---

    /// Score a proposed match. Attributes missing from the request are
    /// extracted by normalizing the corresponding text.
    pub fn match_products(&self, request: &MatchRequest) -> MatchScore {
        let master_norm = self.normalizer.normalize(&request.master_text);
        let raw_norm = self.normalizer.normalize(&request.raw_text);

        let master = resolve_side(request.master_attrs.as_ref(), &master_norm);
        let raw = resolve_side(request.raw_attrs.as_ref(), &raw_norm);

        let expansion_count = request.normalize.then(|| {
            let mut seen: Vec<String> = raw_norm
                .expansions
                .iter()
                .map(|e| e.original.to_uppercase())
                .collect();
            seen.sort();
            seen.dedup();
            seen.len()
        });

        let scorer = self.scorer.read().unwrap_or_else(PoisonError::into_inner);
        scorer.score(request.semantic_score, &master, &raw, expansion_count)
    }

    /// Rank a pre-embedded corpus against a query embedding.
    pub fn search(&self, query: &[f32], corpus: &[CorpusEntry], top_k: usize) -> Vec<SearchHit> {
        semantic_search(query, corpus, top_k)
    }

    // --- Learning ---

    pub fn record_decision(&self, request: DecisionRequest) -> RecordOutcome {
        self.learner.record_decision(request)
    }

    pub fn patterns(&self, min_occurrences: u32) -> Vec<LearnedPattern> {
        self.learner.patterns(min_occurrences)
    }

    pub fn source_stats(&self, source_id: &str) -> Option<SourceStats> {
        self.learner.source_stats(source_id)
    }

    pub fn all_source_stats(&self) -> BTreeMap<String, SourceStats> {
        self.learner.all_source_stats()
    }

    pub fn recommendations(&self) -> ThresholdRecommendation {
        self.learner.recommendations()
    }

    pub fn learning_summary(&self) -> LearningSummary {
        self.learner.summary()
    }

    /// Replace the scorer's thresholds with the learner's current
    /// recommendation.
    pub fn adopt_recommended_thresholds(&self) -> Thresholds {
        let rec = self.learner.recommendations();
        let thresholds = Thresholds {
            auto: rec.auto_confirm_threshold,
            review: rec.review_threshold,
        };
        let mut scorer = self.scorer.write().unwrap_or_else(PoisonError::into_inner);
        scorer.set_thresholds(thresholds);
        info!(
            auto = thresholds.auto,
            review = thresholds.review,
            "adopted recommended thresholds"
        );
        thresholds
    }
}

/// Per-field fallback: an attribute supplied by the caller wins, anything
/// missing comes from the normalization of the same text.
fn resolve_side(attrs: Option<&MatchSide>, norm: &NormalizationResult) -> MatchSide {
    let supplied = attrs.cloned().unwrap_or_default();
    MatchSide {
        brand: supplied.brand.or_else(|| norm.brand.clone()),
        size_canonical: supplied
            .size_canonical
            .or_else(|| norm.size.as_ref().map(|s| s.canonical)),
        category: supplied.category.or_else(|| norm.category_hint.clone()),
    }
}
