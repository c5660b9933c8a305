//! Output formatters: console, JSON, Markdown and HTML

use crate::config::OutputFormat;
use crate::error::{Result, ResumeMatcherError};
use crate::output::report::*;
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

const BAR_WIDTH: usize = 30;
const MATCH_COLOR: &str = "#4CAF50";
const GAP_COLOR: &str = "#FF5252";

/// Trait for rendering an analysis report
pub trait OutputFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Terminal output with optional colors and a text bar chart
pub struct ConsoleFormatter {
    use_colors: bool,
    max_terms: usize,
}

pub struct JsonFormatter {
    pretty: bool,
}

pub struct MarkdownFormatter {
    max_terms: usize,
}

pub struct HtmlFormatter {
    max_terms: usize,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Resume Match Report</title>
    <style>
        body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; color: #333; max-width: 900px; margin: 0 auto; padding: 20px; background: #f8f9fa; }
        .result { background: white; padding: 24px; margin: 20px 0; border-radius: 8px; box-shadow: 0 2px 10px rgba(0,0,0,0.1); }
        .metrics { display: grid; grid-template-columns: repeat(3, 1fr); gap: 15px; }
        .metric { background: #f8f9fa; padding: 12px; border-radius: 6px; border-left: 4px solid #007acc; }
        .metric strong { font-size: 1.4em; display: block; }
        .pie { width: 160px; height: 160px; border-radius: 50%; margin: 16px 0; }
        .legend span { display: inline-block; width: 12px; height: 12px; margin-right: 4px; }
        .metadata { font-size: 0.9em; color: #6c757d; }
    </style>
</head>
<body>
    <h1>Resume ↔ Job Description Match</h1>
    <p class="metadata">Resume: {{ resume_file }} ({{ resume_format }}) | Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
    {% for result in results %}
    <div class="result">
        <h2>Results for {{ result.label }}</h2>
        <div class="metrics">
            <div class="metric">Overall Match<strong>{{ result.overall }}</strong></div>
            <div class="metric">Semantic Similarity<strong>{{ result.similarity }}</strong></div>
            <div class="metric">Keyword Coverage<strong>{{ result.coverage }}</strong></div>
        </div>
        <h3>Matched Skills/Keywords</h3>
        <p>{% if result.matched.is_empty() %}None{% else %}{{ result.matched.join(", ") }}{% endif %}</p>
        <h3>Missing Skills/Keywords</h3>
        <p>{% if result.missing.is_empty() %}None{% else %}{{ result.missing.join(", ") }}{% endif %}</p>
        <div class="pie" style="background: conic-gradient({{ match_color }} 0deg {{ result.match_degrees }}deg, {{ gap_color }} {{ result.match_degrees }}deg 360deg);"></div>
        <p class="legend"><span style="background: {{ match_color }}"></span>Match {{ result.chart_match }} &nbsp; <span style="background: {{ gap_color }}"></span>Gap {{ result.chart_gap }}</p>
    </div>
    {% endfor %}
    <p class="metadata">Generated by resume-matcher v{{ version }}</p>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    resume_file: String,
    resume_format: String,
    generated_at: String,
    processing_time: u64,
    version: String,
    match_color: &'static str,
    gap_color: &'static str,
    results: Vec<HtmlResult>,
}

struct HtmlResult {
    label: String,
    overall: String,
    similarity: String,
    coverage: String,
    matched: Vec<String>,
    missing: Vec<String>,
    match_degrees: String,
    chart_match: String,
    chart_gap: String,
}

fn percent(value: f64) -> String {
    format!("{:.2}%", value)
}

fn format_timestamp(report: &AnalysisReport) -> String {
    report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, max_terms: usize) -> Self {
        Self { use_colors, max_terms }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let (prefix, color) = match level {
            1 => ("█", Color::Blue),
            2 => ("▓", Color::Green),
            _ => ("▒", Color::Yellow),
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_bar(&self, chart: &ProportionChart) -> String {
        let filled = ((chart.match_pct / 100.0) * BAR_WIDTH as f64).round() as usize;
        let filled = filled.min(BAR_WIDTH);
        let matched = "█".repeat(filled);
        let gap = "░".repeat(BAR_WIDTH - filled);

        format!(
            "[{}{}] Match {:.1}% / Gap {:.1}%",
            self.colorize(&matched, Color::Green),
            self.colorize(&gap, Color::Red),
            chart.match_pct,
            chart.gap_pct
        )
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("RESUME ↔ JOB DESCRIPTION MATCH", 1));
        output.push_str(&format!(
            "Resume: {} ({}) | Generated: {} | Processing time: {}ms\n",
            report.metadata.resume_file,
            report.metadata.resume_format,
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        for job in &report.results {
            output.push_str(&self.format_header(&format!("Results for {}", job.label), 2));
            output.push_str(&format!(
                "📊 Overall Match:       {}\n",
                percent(job.result.overall_match)
            ));
            output.push_str(&format!(
                "🔎 Semantic Similarity: {}\n",
                percent(job.result.semantic_similarity)
            ));
            output.push_str(&format!(
                "📝 Keyword Coverage:    {}\n\n",
                percent(job.result.keyword_coverage)
            ));

            let matched = display_terms(&job.top_matched(self.max_terms));
            let missing = display_terms(&job.top_missing(self.max_terms));
            output.push_str(&format!("✅ Matched Skills/Keywords: {}\n", self.colorize(&matched, Color::Green)));
            output.push_str(&format!("❌ Missing Skills/Keywords: {}\n\n", self.colorize(&missing, Color::Yellow)));

            output.push_str(&self.format_bar(&job.chart));
            output.push('\n');
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(max_terms: usize) -> Self {
        Self { max_terms }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Resume ↔ Job Description Match\n\n");
        output.push_str(&format!(
            "**Resume:** `{}` ({}) | **Generated:** {} | **Processing Time:** {}ms\n\n",
            report.metadata.resume_file,
            report.metadata.resume_format,
            format_timestamp(report),
            report.metadata.processing_time_ms
        ));

        for job in &report.results {
            output.push_str(&format!("## Results for {}\n\n", job.label));
            output.push_str("| Metric | Score |\n|---|---|\n");
            output.push_str(&format!("| Overall Match | {} |\n", percent(job.result.overall_match)));
            output.push_str(&format!("| Semantic Similarity | {} |\n", percent(job.result.semantic_similarity)));
            output.push_str(&format!("| Keyword Coverage | {} |\n\n", percent(job.result.keyword_coverage)));

            output.push_str(&format!(
                "**Matched Skills/Keywords:** {}\n\n",
                display_terms(&job.top_matched(self.max_terms))
            ));
            output.push_str(&format!(
                "**Missing Skills/Keywords:** {}\n\n",
                display_terms(&job.top_missing(self.max_terms))
            ));

            output.push_str("```mermaid\npie showData\n");
            output.push_str(&format!("    title {}\n", job.label));
            output.push_str(&format!("    \"Match\" : {:.2}\n", job.chart.match_pct));
            output.push_str(&format!("    \"Gap\" : {:.2}\n", job.chart.gap_pct));
            output.push_str("```\n\n");
        }

        output.push_str("---\n");
        output.push_str(&format!("*Generated by resume-matcher v{}*\n", report.metadata.matcher_version));
        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(max_terms: usize) -> Self {
        Self { max_terms }
    }

    fn create_template_data(&self, report: &AnalysisReport) -> HtmlTemplate {
        let results = report
            .results
            .iter()
            .map(|job| HtmlResult {
                label: job.label.clone(),
                overall: percent(job.result.overall_match),
                similarity: percent(job.result.semantic_similarity),
                coverage: percent(job.result.keyword_coverage),
                matched: job.top_matched(self.max_terms).into_iter().map(str::to_string).collect(),
                missing: job.top_missing(self.max_terms).into_iter().map(str::to_string).collect(),
                match_degrees: format!("{:.1}", job.chart.match_degrees()),
                chart_match: format!("{:.1}%", job.chart.match_pct),
                chart_gap: format!("{:.1}%", job.chart.gap_pct),
            })
            .collect();

        HtmlTemplate {
            resume_file: report.metadata.resume_file.clone(),
            resume_format: report.metadata.resume_format.to_string(),
            generated_at: format_timestamp(report),
            processing_time: report.metadata.processing_time_ms,
            version: report.metadata.matcher_version.clone(),
            match_color: MATCH_COLOR,
            gap_color: GAP_COLOR,
            results,
        }
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AnalysisReport) -> Result<String> {
        self.create_template_data(report)
            .render()
            .map_err(|e| ResumeMatcherError::OutputFormatting(e.to_string()))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self::with_options(true, 15, true)
    }

    pub fn with_options(use_colors: bool, max_terms: usize, pretty_json: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, max_terms),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(max_terms),
            html_formatter: HtmlFormatter::new(max_terms),
        }
    }

    pub fn generate_report(&self, report: &AnalysisReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}
