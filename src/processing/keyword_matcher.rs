//! Set-based keyword matching between a résumé and a job description

use crate::processing::normalizer::NormalizedText;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMatch {
    /// Job description words the résumé also contains
    pub matched: BTreeSet<String>,
    /// Job description words absent from the résumé
    pub missing: BTreeSet<String>,
    /// `100 * |matched| / |jd words|`, 0 when the job description has no words
    pub coverage: f64,
}

pub fn word_set(text: &NormalizedText) -> BTreeSet<String> {
    text.tokens().map(str::to_string).collect()
}

pub fn keyword_match(resume: &NormalizedText, jd: &NormalizedText) -> KeywordMatch {
    let resume_words = word_set(resume);
    let jd_words = word_set(jd);

    let (matched, missing): (BTreeSet<String>, BTreeSet<String>) = jd_words
        .iter()
        .cloned()
        .partition(|word| resume_words.contains(word));

    let coverage = if jd_words.is_empty() {
        0.0
    } else {
        matched.len() as f64 / jd_words.len() as f64 * 100.0
    };

    KeywordMatch {
        matched,
        missing,
        coverage,
    }
}
