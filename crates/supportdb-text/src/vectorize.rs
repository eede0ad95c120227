//! Sparse term-frequency vectors over a fixed vocabulary.

use std::collections::{BTreeMap, HashMap};

/// Token → occurrence count. Every key comes from the vocabulary the vector
/// was built against, including terms that occur zero times.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TermVector {
    counts: BTreeMap<String, u32>,
}

impl TermVector {
    pub fn get(&self, term: &str) -> u32 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.counts.contains_key(term)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of declared terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Euclidean norm over every declared term.
    pub fn magnitude(&self) -> f64 {
        let sum: u64 = self.counts.values().map(|&v| u64::from(v) * u64::from(v)).sum();
        (sum as f64).sqrt()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for TermVector {
    fn from_iter<T: IntoIterator<Item = (S, u32)>>(iter: T) -> Self {
        Self { counts: iter.into_iter().map(|(k, v)| (k.into(), v)).collect() }
    }
}

/// Count each distinct token of `vocabulary` within `document`.
///
/// The result has exactly one entry per distinct vocabulary token; tokens of
/// `document` outside the vocabulary are ignored.
pub fn term_frequency<V, D>(vocabulary: &[V], document: &[D]) -> TermVector
where
    V: AsRef<str>,
    D: AsRef<str>,
{
    let mut occurrences: HashMap<&str, u32> = HashMap::with_capacity(document.len());
    for token in document {
        *occurrences.entry(token.as_ref()).or_insert(0) += 1;
    }

    vocabulary
        .iter()
        .map(|term| {
            let term = term.as_ref();
            (term, occurrences.get(term).copied().unwrap_or(0))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_query_vocabulary_in_document() {
        let v = term_frequency(&["password", "reset"], &["reset", "reset", "password", "link"]);
        assert_eq!(v.len(), 2);
        assert_eq!(v.get("password"), 1);
        assert_eq!(v.get("reset"), 2);
        assert!(!v.contains("link"));
    }

    #[test]
    fn absent_terms_are_declared_with_zero() {
        let v = term_frequency(&["billing", "invoice"], &["invoice"]);
        assert!(v.contains("billing"));
        assert_eq!(v.get("billing"), 0);
        assert_eq!(v.len(), 2);
    }

    #[test]
    fn self_vector_dedups_vocabulary() {
        let tokens = ["reset", "password", "reset"];
        let v = term_frequency(&tokens, &tokens);
        assert_eq!(v.len(), 2);
        assert_eq!(v.get("reset"), 2);
        assert_eq!(v.get("password"), 1);
    }

    #[test]
    fn magnitude_ignores_zero_terms() {
        let v: TermVector = [("a", 3), ("b", 4), ("c", 0)].into_iter().collect();
        assert!((v.magnitude() - 5.0).abs() < 1e-12);
        assert_eq!(TermVector::default().magnitude(), 0.0);
    }
}
