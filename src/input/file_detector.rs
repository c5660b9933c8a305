//! Document format detection

use crate::error::{Result, ResumeMatcherError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Plain,
}

impl DocumentFormat {
    /// Map a declared MIME type onto a format. Anything that is not PDF or DOCX
    /// is read as plain UTF-8 text.
    pub fn from_mime(mime: &str) -> Self {
        let essence = mime.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
        match essence.as_str() {
            MIME_PDF => DocumentFormat::Pdf,
            MIME_DOCX => DocumentFormat::Docx,
            _ => DocumentFormat::Plain,
        }
    }

    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "txt" | "text" | "md" => Ok(DocumentFormat::Plain),
            other => Err(ResumeMatcherError::UnsupportedFormat(format!(
                "unsupported file extension .{} (expected pdf, docx or txt)",
                other
            ))),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                ResumeMatcherError::UnsupportedFormat(format!(
                    "cannot infer format, file has no extension: {}",
                    path.display()
                ))
            })?;

        Self::from_extension(extension)
    }
}

impl FromStr for DocumentFormat {
    type Err = ResumeMatcherError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag.trim().to_lowercase().as_str() {
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            "plain" => Ok(DocumentFormat::Plain),
            other => Err(ResumeMatcherError::UnsupportedFormat(format!(
                "unknown format tag '{}' (expected pdf, docx or plain)",
                other
            ))),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            DocumentFormat::Pdf => "pdf",
            DocumentFormat::Docx => "docx",
            DocumentFormat::Plain => "plain",
        };
        f.write_str(tag)
    }
}
