//! Bag-of-words cosine similarity

use crate::processing::normalizer::NormalizedText;
use std::collections::BTreeMap;

/// Joint vocabulary of two texts, each term mapped to its column index.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    index: BTreeMap<String, usize>,
}

impl Vocabulary {
    pub fn build(a: &NormalizedText, b: &NormalizedText) -> Self {
        let mut index = BTreeMap::new();
        for token in a.tokens().chain(b.tokens()) {
            if !index.contains_key(token) {
                index.insert(token.to_string(), 0);
            }
        }
        // Columns follow sorted term order.
        for (column, slot) in index.values_mut().enumerate() {
            *slot = column;
        }
        Self { index }
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    /// Term-frequency vector of `text` over this vocabulary.
    pub fn vectorize(&self, text: &NormalizedText) -> Vec<u64> {
        let mut counts = vec![0u64; self.index.len()];
        for token in text.tokens() {
            if let Some(&column) = self.index.get(token) {
                counts[column] += 1;
            }
        }
        counts
    }
}

/// Cosine of the angle between two count vectors, in `[0, 1]`.
///
/// A zero vector on either side gives 0.
pub fn cosine_similarity(a: &[u64], b: &[u64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());

    let dot: u64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: u64 = a.iter().map(|x| x * x).sum();
    let norm_b: u64 = b.iter().map(|x| x * x).sum();

    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }

    // One square root over the product keeps a·a / |a|² exact.
    let score = dot as f64 / (norm_a as f64 * norm_b as f64).sqrt();
    score.clamp(0.0, 1.0)
}

/// Count-vector cosine similarity of two texts as a percentage.
pub fn similarity(a: &NormalizedText, b: &NormalizedText) -> f64 {
    let vocabulary = Vocabulary::build(a, b);
    if vocabulary.is_empty() {
        return 0.0;
    }

    let v1 = vocabulary.vectorize(a);
    let v2 = vocabulary.vectorize(b);
    cosine_similarity(&v1, &v2) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalizer::normalize;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_vocabulary_is_joint_and_sorted() {
        let a = normalize("rust go rust");
        let b = normalize("python go");
        let vocabulary = Vocabulary::build(&a, &b);

        let terms: Vec<&str> = vocabulary.terms().collect();
        assert_eq!(terms, vec!["go", "python", "rust"]);
        assert_eq!(vocabulary.vectorize(&a), vec![1, 0, 2]);
        assert_eq!(vocabulary.vectorize(&b), vec![1, 1, 0]);
    }

    #[test]
    fn test_known_value() {
        // [1,0,2]·[1,1,0] = 1, |a| = √5, |b| = √2
        let a = normalize("rust go rust");
        let b = normalize("python go");
        let expected = 100.0 / 10f64.sqrt();
        assert!((similarity(&a, &b) - expected).abs() < EPS);
    }

    #[test]
    fn test_self_similarity_is_100() {
        for text in ["python", "python developer with sql skills", "a a a b c c"] {
            let a = normalize(text);
            assert!((similarity(&a, &a) - 100.0).abs() < EPS, "failed for {:?}", text);
        }
    }

    #[test]
    fn test_symmetric() {
        let a = normalize("Python Developer with SQL skills");
        let b = normalize("Looking for Python and SQL expert, Python preferred");
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn test_empty_side_is_zero() {
        let empty = normalize("");
        let text = normalize("rust developer");
        assert_eq!(similarity(&empty, &text), 0.0);
        assert_eq!(similarity(&text, &empty), 0.0);
        assert_eq!(similarity(&empty, &empty), 0.0);
        assert_eq!(similarity(&normalize("?!"), &text), 0.0);
    }

    #[test]
    fn test_disjoint_texts() {
        let a = normalize("rust cargo");
        let b = normalize("java maven");
        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_word_order_irrelevant() {
        let a = normalize("sql python sql");
        let b = normalize("python sql sql");
        assert!((similarity(&a, &b) - 100.0).abs() < EPS);
    }

    #[test]
    fn test_range() {
        let a = normalize("python developer python");
        let b = normalize("python expert sql");
        let score = similarity(&a, &b);
        assert!(score > 0.0 && score < 100.0);
    }

    #[test]
    fn test_cosine_zero_vectors() {
        assert_eq!(cosine_similarity(&[0, 0], &[1, 2]), 0.0);
        assert_eq!(cosine_similarity(&[], &[]), 0.0);
    }
}
