use crate::errors::HarmonizeResult;

/// Embedding generation provider.
///
/// Consumed boundary only: the engine never runs inference itself. Callers
/// resolve vectors through an implementation of this trait and hand the
/// resulting cosine similarity to the scorer.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> HarmonizeResult<Vec<f32>>;

    /// Embed a batch of texts, one vector per input.
    fn embed_batch(&self, texts: &[String]) -> HarmonizeResult<Vec<Vec<f32>>>;

    /// The dimensionality of embeddings produced by this provider.
    fn dimensions(&self) -> usize;

    /// Human-readable provider name.
    fn name(&self) -> &str;
}
