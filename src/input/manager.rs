//! Input manager: loads résumé files and turns them into text

use crate::config::Config;
use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::DocumentFormat;
use crate::input::text_extractor::{self, Document};
use log::{debug, info};
use std::path::Path;
use std::time::Duration;
use tokio::fs;

pub struct InputManager {
    timeout: Duration,
    max_document_bytes: u64,
    max_xml_entry_bytes: u64,
}

impl Default for InputManager {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl InputManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            timeout: config.extraction_timeout(),
            max_document_bytes: config.extraction.max_document_bytes,
            max_xml_entry_bytes: config.extraction.max_xml_entry_bytes,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Read a file into a [`Document`]. Without a declared format the file
    /// extension decides.
    pub async fn load_document(&self, path: &Path, declared: Option<DocumentFormat>) -> Result<Document> {
        if !path.exists() {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let format = match declared {
            Some(format) => format,
            None => DocumentFormat::from_path(path)?,
        };

        let size = fs::metadata(path).await?.len();
        if size > self.max_document_bytes {
            return Err(ResumeMatcherError::InvalidInput(format!(
                "{} is {} bytes, limit is {}",
                path.display(),
                size,
                self.max_document_bytes
            )));
        }

        let bytes = fs::read(path).await?;
        debug!("Loaded {} bytes from {} as {}", bytes.len(), path.display(), format);
        Ok(Document::new(bytes, format))
    }

    /// Extract text off the async runtime, bounded by the configured timeout.
    pub async fn extract(&self, document: Document) -> Result<String> {
        let format = document.format;
        let max_entry = self.max_xml_entry_bytes;
        info!("Extracting text from {} document ({} bytes)", format, document.bytes.len());

        let text = self
            .run_blocking(format, move || text_extractor::extract_text(&document, max_entry))
            .await?;

        debug!("Extracted {} characters", text.chars().count());
        Ok(text)
    }

    async fn run_blocking<F>(&self, format: DocumentFormat, parse: F) -> Result<String>
    where
        F: FnOnce() -> Result<String> + Send + 'static,
    {
        let task = tokio::task::spawn_blocking(parse);
        let joined = tokio::time::timeout(self.timeout, task)
            .await
            .map_err(|_| ResumeMatcherError::ExtractionTimeout(self.timeout.as_secs()))?;

        // A parser panic on a malformed container surfaces as a join error.
        joined.map_err(|e| {
            ResumeMatcherError::CorruptDocument(format!("{} parser failed: {}", format, e))
        })?
    }

    pub async fn extract_text(&self, path: &Path, declared: Option<DocumentFormat>) -> Result<String> {
        let document = self.load_document(path, declared).await?;
        self.extract(document).await
    }
}

/// Read a job description file as UTF-8 text.
pub async fn read_job_description(path: &Path) -> Result<String> {
    let bytes = fs::read(path).await.map_err(|e| {
        ResumeMatcherError::InvalidInput(format!("Cannot read job description {}: {}", path.display(), e))
    })?;
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_slow_parser_times_out() {
        let manager = InputManager::new().with_timeout(Duration::from_millis(10));
        let result = manager
            .run_blocking(DocumentFormat::Pdf, || {
                std::thread::sleep(Duration::from_millis(500));
                Ok(String::from("too late"))
            })
            .await;
        assert!(matches!(result, Err(ResumeMatcherError::ExtractionTimeout(_))));
    }

    #[tokio::test]
    async fn test_parser_panic_is_corrupt() {
        let manager = InputManager::new();
        let result = manager
            .run_blocking(DocumentFormat::Docx, || panic!("malformed container"))
            .await;
        assert!(matches!(result, Err(ResumeMatcherError::CorruptDocument(_))));
    }

    #[tokio::test]
    async fn test_oversized_document_rejected() {
        let mut config = Config::default();
        config.extraction.max_document_bytes = 4;
        let manager = InputManager::from_config(&config);

        let result = manager
            .load_document(Path::new("tests/fixtures/example_resume.txt"), None)
            .await;
        assert!(matches!(result, Err(ResumeMatcherError::InvalidInput(_))));
    }
}
