//! Textsim library crate (used by the server, the batch scorer, and
//! integration tests).
//!
//! # Public API Surface
//!
//! ## Core Types
//! - [`Config`], [`ConfigError`] - Server configuration
//! - [`SimilarityScorer`] - Normalize, score, and blend a text pair
//! - [`SubScore`], [`SimilarityBreakdown`] - Explicit scoring outcomes
//!
//! ## Scoring Pipeline
//! - [`normalize`] - Lowercase, strip punctuation, drop stopwords
//! - [`SentenceEmbedder`], [`EmbedderConfig`] - Sentence embeddings
//! - [`EmbeddingScorer`], [`LexicalScorer`] - The two sub-scorers
//!
//! ## Surfaces
//! - [`gateway`] - Axum router for the HTTP service
//! - [`batch`] - CSV batch scoring
//!
//! ## Test Support
//! [`SimilarityScorer::stub`] and [`EmbedderConfig::stub`] run without model
//! files.

pub mod batch;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod gateway;
pub mod normalize;
pub mod scoring;

pub use batch::{BatchError, score_csv, score_csv_file};
pub use config::{Config, ConfigError};
pub use constants::{EMBEDDING_WEIGHT, LEXICAL_WEIGHT, round_score};
pub use embedding::{EmbedderConfig, EmbedderMode, EmbeddingError, SentenceEmbedder};
pub use normalize::normalize;
pub use scoring::{
    EmbeddingScorer, LexicalScorer, PairScorer, ScoringError, SimilarityBreakdown,
    SimilarityScorer, SubScore, cosine_similarity,
};
