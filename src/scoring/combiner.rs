use std::sync::Arc;

use tracing::debug;

use crate::constants::{EMBEDDING_WEIGHT, LEXICAL_WEIGHT, round_score};
use crate::embedding::{EmbedderMode, SentenceEmbedder};
use crate::normalize::normalize;

use super::PairScorer;
use super::embedding::EmbeddingScorer;
use super::lexical::LexicalScorer;
use super::types::{SimilarityBreakdown, SubScore};

/// Blends embedding and TF-IDF similarity of two raw texts.
///
/// Stateless apart from the shared, read-only embedder; safe to call from
/// many threads at once.
#[derive(Debug, Clone)]
pub struct SimilarityScorer {
    embedding: EmbeddingScorer,
    lexical: LexicalScorer,
}

impl SimilarityScorer {
    pub fn new(embedder: Arc<SentenceEmbedder>) -> Self {
        Self {
            embedding: EmbeddingScorer::new(embedder),
            lexical: LexicalScorer::new(),
        }
    }

    /// Scorer backed by a stub embedder.
    pub fn stub() -> Self {
        Self::new(Arc::new(SentenceEmbedder::stub()))
    }

    pub fn embedder_mode(&self) -> EmbedderMode {
        self.embedding.embedder().mode()
    }

    /// Embedding cosine of two already-normalized texts.
    pub fn embedding_similarity(&self, a: &str, b: &str) -> SubScore {
        self.embedding.score_or_degrade(a, b)
    }

    /// TF-IDF cosine of two already-normalized texts.
    pub fn lexical_similarity(&self, a: &str, b: &str) -> SubScore {
        self.lexical.score_or_degrade(a, b)
    }

    /// Normalizes both texts and scores them, keeping the sub-scores.
    pub fn score_pair(&self, text1: &str, text2: &str) -> SimilarityBreakdown {
        let norm1 = normalize(text1);
        let norm2 = normalize(text2);

        if norm1.is_empty() || norm2.is_empty() {
            debug!("Text normalized to empty, similarity is zero");
            return SimilarityBreakdown::ShortCircuit;
        }

        let embedding = self.embedding_similarity(&norm1, &norm2);
        let lexical = self.lexical_similarity(&norm1, &norm2);

        let score =
            round_score(EMBEDDING_WEIGHT * embedding.value() + LEXICAL_WEIGHT * lexical.value());

        debug!(
            embedding = %embedding,
            lexical = %lexical,
            score = score,
            "Blended similarity"
        );

        SimilarityBreakdown::Blended {
            embedding,
            lexical,
            score,
        }
    }

    /// Blended similarity of two raw texts, rounded to two decimals.
    /// Returns exactly `0.0` if either text normalizes to empty.
    pub fn compute_similarity(&self, text1: &str, text2: &str) -> f64 {
        self.score_pair(text1, text2).score()
    }
}
