//! Input processing module
//! Handles format detection, text extraction, and file loading

pub mod file_detector;
pub mod text_extractor;
pub mod manager;

pub use file_detector::DocumentFormat;
pub use text_extractor::Document;
