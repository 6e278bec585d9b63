use std::sync::Arc;

use tracing::debug;

use crate::embedding::SentenceEmbedder;

use super::PairScorer;
use super::cosine::cosine_similarity;
use super::error::ScoringError;

/// Cosine similarity between sentence embeddings.
#[derive(Debug, Clone)]
pub struct EmbeddingScorer {
    embedder: Arc<SentenceEmbedder>,
}

impl EmbeddingScorer {
    pub fn new(embedder: Arc<SentenceEmbedder>) -> Self {
        Self { embedder }
    }

    pub fn embedder(&self) -> &SentenceEmbedder {
        &self.embedder
    }

    /// Embeds both texts and returns their cosine similarity.
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64, ScoringError> {
        let embedding_a = self.embedder.embed(a)?;
        let embedding_b = self.embedder.embed(b)?;

        let score = cosine_similarity(&embedding_a, &embedding_b)?;
        debug!(
            dim = embedding_a.len(),
            score = score,
            "Embedding similarity computed"
        );

        Ok(score)
    }
}

impl PairScorer for EmbeddingScorer {
    fn name(&self) -> &'static str {
        "embedding"
    }

    fn score_pair(&self, a: &str, b: &str) -> Result<f64, ScoringError> {
        self.similarity(a, b)
    }
}
