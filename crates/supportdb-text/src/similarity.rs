use crate::vectorize::TermVector;

/// Cosine similarity between two term vectors.
///
/// The dot product runs over the terms of `a` that are non-zero in `b`.
/// Returns 0.0 when either vector has zero magnitude.
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let dot: u64 = a
        .iter()
        .filter_map(|(term, weight)| match b.get(term) {
            0 => None,
            other => Some(u64::from(weight) * u64::from(other)),
        })
        .sum();

    let magnitude_a = a.magnitude();
    let magnitude_b = b.magnitude();
    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    dot as f64 / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::term_frequency;

    #[test]
    fn identical_multisets_score_one() {
        let q = ["reset", "password", "reset"];
        let a = term_frequency(&q, &q);
        let b = term_frequency(&q, &["password", "reset", "reset"]);
        assert!((cosine_similarity(&a, &b) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn partial_overlap() {
        // query {a:1, b:1}, doc {a:1, b:0}: 1 / (sqrt2 * 1)
        let q = ["alpha", "bravo"];
        let a = term_frequency(&q, &q);
        let b = term_frequency(&q, &["alpha", "charlie"]);
        assert!((cosine_similarity(&a, &b) - 1.0 / 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn zero_magnitude_is_zero_not_nan() {
        let empty: [&str; 0] = [];
        let a = term_frequency(&empty, &empty);
        let b = term_frequency(&["alpha"], &["bravo"]);
        assert_eq!(cosine_similarity(&a, &b), 0.0);
        assert_eq!(cosine_similarity(&b, &b), 0.0);
    }

    #[test]
    fn stays_within_unit_interval() {
        let q = ["alpha", "bravo", "charlie"];
        let a = term_frequency(&q, &q);
        let b = term_frequency(&q, &["alpha", "alpha", "alpha", "bravo"]);
        let s = cosine_similarity(&a, &b);
        assert!((0.0..=1.0).contains(&s));
    }
}
