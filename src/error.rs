//! Error handling for the resume matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ResumeMatcherError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Corrupt document: {0}")]
    CorruptDocument(String),

    #[error("Text is not valid UTF-8: {0}")]
    DecodeError(String),

    #[error("Extraction timed out after {0}s")]
    ExtractionTimeout(u64),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

impl ResumeMatcherError {
    /// True for the errors raised while turning a résumé into text.
    pub fn is_extraction_error(&self) -> bool {
        matches!(
            self,
            ResumeMatcherError::UnsupportedFormat(_)
                | ResumeMatcherError::CorruptDocument(_)
                | ResumeMatcherError::DecodeError(_)
                | ResumeMatcherError::ExtractionTimeout(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ResumeMatcherError>;

impl From<std::string::FromUtf8Error> for ResumeMatcherError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        ResumeMatcherError::DecodeError(err.utf8_error().to_string())
    }
}

impl From<zip::result::ZipError> for ResumeMatcherError {
    fn from(err: zip::result::ZipError) -> Self {
        ResumeMatcherError::CorruptDocument(err.to_string())
    }
}

impl From<quick_xml::Error> for ResumeMatcherError {
    fn from(err: quick_xml::Error) -> Self {
        ResumeMatcherError::CorruptDocument(err.to_string())
    }
}
