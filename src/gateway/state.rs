use std::sync::Arc;

use crate::scoring::SimilarityScorer;

#[derive(Clone)]
pub struct HandlerState {
    pub scorer: Arc<SimilarityScorer>,

    /// Expose error details in 500 responses.
    pub debug: bool,
}

impl HandlerState {
    pub fn new(scorer: Arc<SimilarityScorer>, debug: bool) -> Self {
        Self { scorer, debug }
    }
}
