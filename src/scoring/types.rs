#[derive(Debug, Clone, PartialEq)]
/// Outcome of one sub-scorer.
pub enum SubScore {
    /// The scorer produced a value.
    Computed {
        /// Cosine similarity.
        score: f64,
    },
    /// The scorer failed; the blend treats this as `0.0`.
    Degraded {
        /// Why the computation failed.
        reason: String,
    },
}

impl SubScore {
    /// Contribution to the blend (`0.0` when degraded).
    pub fn value(&self) -> f64 {
        match self {
            SubScore::Computed { score } => *score,
            SubScore::Degraded { .. } => 0.0,
        }
    }

    /// Returns `true` if the scorer failed.
    pub fn is_degraded(&self) -> bool {
        matches!(self, SubScore::Degraded { .. })
    }

    /// Returns the computed score, if any.
    pub fn computed(&self) -> Option<f64> {
        match self {
            SubScore::Computed { score } => Some(*score),
            SubScore::Degraded { .. } => None,
        }
    }
}

impl std::fmt::Display for SubScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubScore::Computed { score } => write!(f, "{:.4}", score),
            SubScore::Degraded { reason } => write!(f, "DEGRADED ({})", reason),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Full result of scoring a text pair.
pub enum SimilarityBreakdown {
    /// At least one text normalized to empty; the score is `0.0` and no
    /// scorer ran.
    ShortCircuit,
    /// Both scorers ran.
    Blended {
        embedding: SubScore,
        lexical: SubScore,
        /// Weighted blend, rounded.
        score: f64,
    },
}

impl SimilarityBreakdown {
    /// The final, rounded similarity score.
    pub fn score(&self) -> f64 {
        match self {
            SimilarityBreakdown::ShortCircuit => 0.0,
            SimilarityBreakdown::Blended { score, .. } => *score,
        }
    }

    /// Returns `true` if either sub-score degraded.
    pub fn is_degraded(&self) -> bool {
        match self {
            SimilarityBreakdown::ShortCircuit => false,
            SimilarityBreakdown::Blended {
                embedding, lexical, ..
            } => embedding.is_degraded() || lexical.is_degraded(),
        }
    }
}
