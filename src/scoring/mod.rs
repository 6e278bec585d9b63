//! Similarity scoring.
//!
//! Two sub-scorers implement [`PairScorer`]:
//!
//! - [`EmbeddingScorer`]: cosine between sentence embeddings.
//! - [`LexicalScorer`]: cosine between pairwise TF-IDF vectors.
//!
//! [`SimilarityScorer`] normalizes the inputs, runs both, and blends them as
//! `0.7 * embedding + 0.3 * lexical`, rounded to two decimals.
//!
//! # Degraded sub-scores
//!
//! A sub-scorer failure never escapes. It becomes [`SubScore::Degraded`],
//! which contributes `0.0` to the blend. Numerically that is the same as
//! "no similarity"; [`SimilarityBreakdown`] keeps the two cases apart for
//! callers that care.

pub mod combiner;
pub mod cosine;
pub mod embedding;
pub mod error;
pub mod lexical;
pub mod types;


pub use combiner::SimilarityScorer;
pub use cosine::cosine_similarity;
pub use embedding::EmbeddingScorer;
pub use error::ScoringError;
pub use lexical::LexicalScorer;
pub use types::{SimilarityBreakdown, SubScore};

use tracing::warn;

/// A symmetric similarity measure over a pair of texts.
pub trait PairScorer: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn score_pair(&self, a: &str, b: &str) -> Result<f64, ScoringError>;

    /// Runs [`score_pair`](Self::score_pair), turning failure into
    /// [`SubScore::Degraded`].
    fn score_or_degrade(&self, a: &str, b: &str) -> SubScore {
        match self.score_pair(a, b) {
            Ok(score) => SubScore::Computed { score },
            Err(e) => {
                warn!(scorer = self.name(), error = %e, "Similarity scorer degraded to zero");
                SubScore::Degraded {
                    reason: e.to_string(),
                }
            }
        }
    }
}
