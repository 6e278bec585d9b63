use super::error::ScoringError;

/// Cosine similarity of two dense vectors, accumulated in `f64`.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f64, ScoringError> {
    if a.len() != b.len() {
        return Err(ScoringError::DimensionMismatch {
            left: a.len(),
            right: b.len(),
        });
    }

    let (dot, norm_a_sq, norm_b_sq) =
        a.iter()
            .zip(b.iter())
            .fold((0.0f64, 0.0f64, 0.0f64), |(dot, na, nb), (&av, &bv)| {
                let av = f64::from(av);
                let bv = f64::from(bv);
                (dot + av * bv, na + av * av, nb + bv * bv)
            });

    let denom = norm_a_sq.sqrt() * norm_b_sq.sqrt();
    if denom == 0.0 {
        return Err(ScoringError::ZeroVector);
    }

    let score = dot / denom;
    if !score.is_finite() {
        return Err(ScoringError::ComputationFailed {
            reason: format!("non-finite cosine similarity: {}", score),
        });
    }

    Ok(score)
}
