use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("empty vocabulary: documents contain no indexable terms")]
    EmptyVocabulary,

    #[error("vector dimension mismatch: {left} vs {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("cannot take cosine of a zero-magnitude vector")]
    ZeroVector,

    #[error("scoring computation failed: {reason}")]
    ComputationFailed { reason: String },
}
