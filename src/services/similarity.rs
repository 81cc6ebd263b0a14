use crate::models::GenreVector;

/// Cosine similarity between two genre vectors built against the same
/// vocabulary.
///
/// Returns a score in [0.0, 1.0]: dot product over the product of Euclidean
/// norms. If either vector has zero norm (a user with no genre data) the
/// similarity is defined as 0.0 instead of dividing by zero. The score is
/// symmetric in its arguments.
///
/// Panics if the vectors have different lengths. That can only happen when a
/// vector was built against a different vocabulary, which is a programming
/// error, not bad user input.
pub fn cosine_similarity(a: &GenreVector, b: &GenreVector) -> f64 {
    assert_eq!(
        a.len(),
        b.len(),
        "genre vectors built against different vocabularies"
    );

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (&wa, &wb) in a.weights().iter().zip(b.weights()) {
        let (wa, wb) = (wa as f64, wb as f64);
        dot += wa * wb;
        norm_a += wa * wa;
        norm_b += wb * wb;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    // Weights are non-negative so the cosine is already in [0, 1]; the clamp
    // only guards against floating-point overshoot at the top end.
    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vector(weights: Vec<u32>) -> GenreVector {
        GenreVector::from(weights)
    }

    #[test]
    fn test_identical_vectors_score_one() {
        let a = vector(vec![2, 0, 3, 1]);
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_disjoint_vectors_score_zero() {
        let a = vector(vec![1, 1, 0, 0]);
        let b = vector(vec![0, 0, 2, 1]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_partial_overlap() {
        // [0,1,1] vs [1,1,0] -> 1 / (sqrt(2) * sqrt(2)) = 0.5
        let a = vector(vec![0, 1, 1]);
        let b = vector(vec![1, 1, 0]);
        assert!((cosine_similarity(&a, &b) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_symmetry() {
        let a = vector(vec![3, 0, 1, 2]);
        let b = vector(vec![1, 4, 0, 2]);
        assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
    }

    #[test]
    fn test_zero_norm_defined_as_zero() {
        let a = vector(vec![0, 0, 0]);
        let b = vector(vec![1, 2, 3]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &a), 0.0);
        assert_eq!(cosine_similarity(&a, &a), 0.0);
    }

    #[test]
    fn test_empty_vectors_score_zero() {
        let a = vector(vec![]);
        let b = vector(vec![]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_score_stays_in_range() {
        let a = vector(vec![7, 1, 0, 9, 3]);
        let b = vector(vec![2, 8, 5, 0, 6]);
        let score = cosine_similarity(&a, &b);
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    #[should_panic(expected = "different vocabularies")]
    fn test_length_mismatch_panics() {
        let a = vector(vec![1, 2]);
        let b = vector(vec![1, 2, 3]);
        cosine_similarity(&a, &b);
    }
}
