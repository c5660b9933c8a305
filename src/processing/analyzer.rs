//! Analysis of one résumé against up to three job descriptions

use crate::error::{Result, ResumeMatcherError};
use crate::processing::aggregator::{aggregate, MatchResult};
use crate::processing::normalizer::normalize;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

pub const MAX_JOB_DESCRIPTIONS: usize = 3;

/// A job description that survived blank filtering, labelled by its input slot.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDescription<'a> {
    pub label: String,
    pub text: &'a str,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledResult {
    pub label: String,
    pub result: MatchResult,
}

pub fn slot_label(index: usize) -> String {
    format!("JD #{}", index + 1)
}

/// Check the slot rules: at least one and at most three job descriptions, and
/// the first must not be blank.
pub fn validate_job_descriptions<S: AsRef<str>>(job_descriptions: &[S]) -> Result<()> {
    if job_descriptions.len() > MAX_JOB_DESCRIPTIONS {
        return Err(ResumeMatcherError::InvalidInput(format!(
            "At most {} job descriptions are supported, got {}",
            MAX_JOB_DESCRIPTIONS,
            job_descriptions.len()
        )));
    }

    match job_descriptions.first() {
        Some(first) if !first.as_ref().trim().is_empty() => Ok(()),
        _ => Err(ResumeMatcherError::InvalidInput(
            "Job description #1 is required".to_string(),
        )),
    }
}

/// Drop blank job descriptions, keeping each survivor's slot label.
pub fn retained_job_descriptions<S: AsRef<str>>(job_descriptions: &[S]) -> Vec<JobDescription<'_>> {
    job_descriptions
        .iter()
        .enumerate()
        .filter_map(|(index, text)| {
            let text = text.as_ref();
            if text.trim().is_empty() {
                warn!("Skipping blank {}", slot_label(index));
                None
            } else {
                Some(JobDescription {
                    label: slot_label(index),
                    text,
                })
            }
        })
        .collect()
}

/// Score the résumé text against every non-blank job description.
pub fn analyze<S: AsRef<str>>(resume_text: &str, job_descriptions: &[S]) -> Result<Vec<LabeledResult>> {
    validate_job_descriptions(job_descriptions)?;

    let resume = normalize(resume_text);
    debug!("Normalized resume: {} tokens", resume.tokens().count());

    let results = retained_job_descriptions(job_descriptions)
        .into_iter()
        .map(|jd| {
            let normalized = normalize(jd.text);
            let result = aggregate(&resume, &normalized);
            info!(
                "{}: overall {:.2}%, similarity {:.2}%, coverage {:.2}%",
                jd.label, result.overall_match, result.semantic_similarity, result.keyword_coverage
            );
            LabeledResult {
                label: jd.label,
                result,
            }
        })
        .collect();

    Ok(results)
}
