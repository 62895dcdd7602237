//! Top-k semantic search over a pre-embedded corpus.

use crate::similarity::cosine_similarity;

/// One searchable corpus record with its pre-computed embedding.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    pub id: String,
    pub text: String,
    pub embedding: Vec<f32>,
}

/// A scored search result.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    pub id: String,
    pub text: String,
    pub score: f64,
}

/// Rank the corpus by cosine similarity to the query embedding and return
/// the top `k` hits. Equal scores keep corpus order, so results are stable.
pub fn semantic_search(query: &[f32], corpus: &[CorpusEntry], k: usize) -> Vec<SearchHit> {
    let mut hits: Vec<SearchHit> = corpus
        .iter()
        .map(|entry| SearchHit {
            id: entry.id.clone(),
            text: entry.text.clone(),
            score: cosine_similarity(query, &entry.embedding),
        })
        .collect();
    hits.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    hits.truncate(k);
    hits
}
