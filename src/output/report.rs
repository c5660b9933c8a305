//! Report structures handed to the output formatters

use crate::input::file_detector::DocumentFormat;
use crate::processing::aggregator::MatchResult;
use crate::processing::analyzer::LabeledResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::Duration;

/// Full output of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub metadata: ReportMetadata,
    pub results: Vec<JobReport>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub matcher_version: String,
    pub resume_file: String,
    pub resume_format: DocumentFormat,
    pub processing_time_ms: u64,
}

/// Result for a single job description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobReport {
    pub label: String,
    #[serde(flatten)]
    pub result: MatchResult,
    pub chart: ProportionChart,
}

/// Two-slice chart data: match vs gap, summing to 100
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProportionChart {
    pub match_pct: f64,
    pub gap_pct: f64,
}

impl ProportionChart {
    pub fn from_result(result: &MatchResult) -> Self {
        Self {
            match_pct: result.overall_match,
            gap_pct: result.gap(),
        }
    }

    /// Angle of the match slice on a full circle.
    pub fn match_degrees(&self) -> f64 {
        self.match_pct * 3.6
    }
}

impl JobReport {
    pub fn new(labeled: LabeledResult) -> Self {
        let chart = ProportionChart::from_result(&labeled.result);
        Self {
            label: labeled.label,
            result: labeled.result,
            chart,
        }
    }

    pub fn top_matched(&self, limit: usize) -> Vec<&str> {
        top_terms(&self.result.matched_terms, limit)
    }

    pub fn top_missing(&self, limit: usize) -> Vec<&str> {
        top_terms(&self.result.missing_terms, limit)
    }
}

impl AnalysisReport {
    pub fn new(
        resume_file: impl Into<String>,
        resume_format: DocumentFormat,
        results: Vec<LabeledResult>,
        processing_time: Duration,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                generated_at: Utc::now(),
                matcher_version: env!("CARGO_PKG_VERSION").to_string(),
                resume_file: resume_file.into(),
                resume_format,
                processing_time_ms: processing_time.as_millis() as u64,
            },
            results: results.into_iter().map(JobReport::new).collect(),
        }
    }
}

/// First `limit` terms of a set, in its sorted order.
pub fn top_terms(terms: &BTreeSet<String>, limit: usize) -> Vec<&str> {
    terms.iter().take(limit).map(String::as_str).collect()
}

/// Comma-separated display list, "None" when empty.
pub fn display_terms(terms: &[&str]) -> String {
    if terms.is_empty() {
        "None".to_string()
    } else {
        terms.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labeled(overall: f64, matched: &[&str], missing: &[&str]) -> LabeledResult {
        LabeledResult {
            label: "JD #1".to_string(),
            result: MatchResult {
                overall_match: overall,
                semantic_similarity: overall,
                keyword_coverage: overall,
                matched_terms: matched.iter().map(|s| s.to_string()).collect(),
                missing_terms: missing.iter().map(|s| s.to_string()).collect(),
            },
        }
    }

    #[test]
    fn test_chart_slices_sum_to_100() {
        let report = JobReport::new(labeled(62.5, &[], &[]));
        assert_eq!(report.chart.match_pct, 62.5);
        assert_eq!(report.chart.gap_pct, 37.5);
        assert_eq!(report.chart.match_degrees(), 225.0);
    }

    #[test]
    fn test_top_terms_truncates_in_sorted_order() {
        let report = JobReport::new(labeled(10.0, &["sql", "python", "aws"], &["go"]));
        assert_eq!(report.top_matched(2), vec!["aws", "python"]);
        assert_eq!(report.top_missing(15), vec!["go"]);
    }

    #[test]
    fn test_display_terms() {
        assert_eq!(display_terms(&[]), "None");
        assert_eq!(display_terms(&["python", "sql"]), "python, sql");
    }

    #[test]
    fn test_report_metadata() {
        let report = AnalysisReport::new(
            "cv.txt",
            DocumentFormat::Plain,
            vec![labeled(50.0, &["rust"], &[])],
            Duration::from_millis(12),
        );
        assert_eq!(report.metadata.processing_time_ms, 12);
        assert_eq!(report.metadata.matcher_version, env!("CARGO_PKG_VERSION"));
        assert_eq!(report.results.len(), 1);
    }
}
