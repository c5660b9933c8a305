//! Combines similarity and keyword scores into one match result

use crate::processing::keyword_matcher::keyword_match;
use crate::processing::normalizer::NormalizedText;
use crate::processing::similarity::similarity;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Scores for one résumé / job description pair. All percentages are in `[0, 100]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Mean of `semantic_similarity` and `keyword_coverage`
    pub overall_match: f64,
    /// Count-vector cosine similarity (lexical, despite the name)
    pub semantic_similarity: f64,
    pub keyword_coverage: f64,
    pub matched_terms: BTreeSet<String>,
    pub missing_terms: BTreeSet<String>,
}

impl MatchResult {
    /// Remaining share of the proportion chart.
    pub fn gap(&self) -> f64 {
        100.0 - self.overall_match
    }
}

pub fn aggregate(resume: &NormalizedText, jd: &NormalizedText) -> MatchResult {
    let semantic_similarity = similarity(resume, jd);
    let keywords = keyword_match(resume, jd);
    let overall_match = (semantic_similarity + keywords.coverage) / 2.0;

    MatchResult {
        overall_match,
        semantic_similarity,
        keyword_coverage: keywords.coverage,
        matched_terms: keywords.matched,
        missing_terms: keywords.missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::normalizer::normalize;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_identical_texts_score_100() {
        let text = normalize("Senior Rust engineer with Kafka and PostgreSQL experience");
        let result = aggregate(&text, &text);

        assert!((result.semantic_similarity - 100.0).abs() < EPS);
        assert_eq!(result.keyword_coverage, 100.0);
        assert!((result.overall_match - 100.0).abs() < EPS);
        assert!(result.missing_terms.is_empty());
    }

    #[test]
    fn test_overall_is_mean_of_components() {
        let pairs = [
            ("Python Developer with SQL skills", "Looking for Python and SQL expert"),
            ("rust rust go", "go java"),
            ("", "anything at all"),
            ("some resume", ""),
        ];
        for (resume, jd) in pairs {
            let result = aggregate(&normalize(resume), &normalize(jd));
            let mean = (result.semantic_similarity + result.keyword_coverage) / 2.0;
            assert!((result.overall_match - mean).abs() < EPS);
            for score in [result.overall_match, result.semantic_similarity, result.keyword_coverage] {
                assert!((0.0..=100.0).contains(&score));
            }
        }
    }

    #[test]
    fn test_example_pair() {
        let result = aggregate(
            &normalize("Python Developer with SQL skills"),
            &normalize("Looking for Python and SQL expert"),
        );

        // two shared terms, |resume| = 5, |jd| = 6
        let expected_similarity = 2.0 / 30f64.sqrt() * 100.0;
        assert!((result.semantic_similarity - expected_similarity).abs() < EPS);
        assert!((result.keyword_coverage - 100.0 / 3.0).abs() < EPS);
        assert_eq!(result.matched_terms.len(), 2);
        assert_eq!(result.missing_terms.len(), 4);
        assert!((result.gap() + result.overall_match - 100.0).abs() < EPS);
    }

    #[test]
    fn test_empty_jd() {
        let result = aggregate(&normalize("python"), &normalize(""));
        assert_eq!(result.overall_match, 0.0);
    }
}
