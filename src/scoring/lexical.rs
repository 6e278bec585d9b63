//! Pairwise TF-IDF cosine similarity.
//!
//! The corpus is exactly the two documents being compared, so IDF weights
//! are local to the pair and scores are not comparable across pairs.
//! Weighting follows scikit-learn's `TfidfVectorizer` defaults: raw term
//! counts, smooth IDF `ln((1 + n) / (1 + df)) + 1`, L2-normalized rows.

use std::collections::{BTreeMap, HashMap};
use std::sync::LazyLock;

use regex::Regex;

use super::PairScorer;
use super::error::ScoringError;

/// Word runs of two or more word characters.
static TOKEN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?u)\b\w\w+\b").expect("token pattern is valid"));

/// Lowercases `text` and extracts its index terms.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_PATTERN
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LexicalScorer;

impl LexicalScorer {
    pub fn new() -> Self {
        Self
    }

    /// TF-IDF cosine similarity of `a` and `b`.
    ///
    /// Fails with [`ScoringError::EmptyVocabulary`] when neither document has
    /// an index term. A document with no terms scores `0.0` against a
    /// non-empty one.
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64, ScoringError> {
        let counts_a = term_counts(a);
        let counts_b = term_counts(b);

        // Sorted vocabulary keeps summation order fixed, so the result is
        // bit-for-bit symmetric in its arguments.
        let mut vocabulary: BTreeMap<&str, u32> = BTreeMap::new();
        for term in counts_a.keys().chain(counts_b.keys()) {
            *vocabulary.entry(term.as_str()).or_insert(0) += 1;
        }

        if vocabulary.is_empty() {
            return Err(ScoringError::EmptyVocabulary);
        }

        let n_docs = 2.0f64;
        let mut dot = 0.0f64;
        let mut norm_a_sq = 0.0f64;
        let mut norm_b_sq = 0.0f64;

        for (term, doc_freq) in &vocabulary {
            let idf = ((1.0 + n_docs) / (1.0 + f64::from(*doc_freq))).ln() + 1.0;
            let wa = f64::from(counts_a.get(*term).copied().unwrap_or(0)) * idf;
            let wb = f64::from(counts_b.get(*term).copied().unwrap_or(0)) * idf;

            dot += wa * wb;
            norm_a_sq += wa * wa;
            norm_b_sq += wb * wb;
        }

        let denom = norm_a_sq.sqrt() * norm_b_sq.sqrt();
        if denom == 0.0 {
            return Ok(0.0);
        }

        Ok(dot / denom)
    }
}

impl PairScorer for LexicalScorer {
    fn name(&self) -> &'static str {
        "tfidf"
    }

    fn score_pair(&self, a: &str, b: &str) -> Result<f64, ScoringError> {
        self.similarity(a, b)
    }
}

fn term_counts(text: &str) -> HashMap<String, u32> {
    let mut counts = HashMap::new();
    for term in tokenize(text) {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}
