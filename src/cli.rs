//! CLI interface for the resume matcher

use crate::config::OutputFormat;
use crate::input::file_detector::DocumentFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "resume-matcher")]
#[command(about = "Score a resume against job descriptions")]
#[command(long_about = "Compare a resume (PDF, DOCX or plain text) with up to three job descriptions and report bag-of-words similarity, keyword coverage, and matched/missing terms")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match a resume against one to three job descriptions
    Analyze {
        /// Path to resume file (PDF, DOCX, TXT)
        #[arg(short, long)]
        resume: PathBuf,

        /// Job description file; repeat for JD #2 and JD #3
        #[arg(short, long, conflicts_with = "job_text")]
        job: Vec<PathBuf>,

        /// Job description text; repeat for JD #2 and JD #3
        #[arg(long)]
        job_text: Vec<String>,

        /// Declared MIME type of the resume
        #[arg(long, conflicts_with = "format")]
        mime: Option<String>,

        /// Resume format tag: pdf, docx or plain
        #[arg(short, long)]
        format: Option<String>,

        /// Output format: console, json, markdown, html
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Number of matched / missing terms to display
        #[arg(long)]
        max_terms: Option<usize>,

        /// Disable colored console output
        #[arg(long)]
        no_color: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Print the configuration file location
    Path,
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        "html" => Ok(OutputFormat::Html),
        _ => Err(format!("Invalid output format: {}. Supported: console, json, markdown, html", format)),
    }
}

/// Decide the resume format: explicit tag, then declared MIME type, then the
/// file extension.
pub fn resolve_document_format(
    path: &Path,
    format: Option<&str>,
    mime: Option<&str>,
) -> crate::Result<DocumentFormat> {
    if let Some(tag) = format {
        return tag.parse();
    }
    if let Some(mime) = mime {
        return Ok(DocumentFormat::from_mime(mime));
    }
    DocumentFormat::from_path(path)
}
