//! Text extraction from résumé documents

use crate::error::{Result, ResumeMatcherError};
use crate::input::file_detector::DocumentFormat;
use quick_xml::events::Event;
use quick_xml::Reader;
use std::io::{Cursor, Read};

const DOCX_BODY_ENTRY: &str = "word/document.xml";

/// Raw bytes of an uploaded document plus its declared format.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub bytes: Vec<u8>,
    pub format: DocumentFormat,
}

impl Document {
    pub fn new(bytes: Vec<u8>, format: DocumentFormat) -> Self {
        Self { bytes, format }
    }
}

pub trait TextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String>;
}

/// Extract the text of a document, dispatching on its format.
pub fn extract_text(document: &Document, max_xml_entry_bytes: u64) -> Result<String> {
    match document.format {
        DocumentFormat::Pdf => PdfExtractor.extract(&document.bytes),
        DocumentFormat::Docx => DocxExtractor::new(max_xml_entry_bytes).extract(&document.bytes),
        DocumentFormat::Plain => PlainTextExtractor.extract(&document.bytes),
    }
}

pub struct PdfExtractor;

impl TextExtractor for PdfExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ResumeMatcherError::CorruptDocument(format!("Failed to extract text from PDF: {}", e))
        })
    }
}

/// Reads the body paragraphs of an OOXML word document.
pub struct DocxExtractor {
    max_entry_bytes: u64,
}

impl DocxExtractor {
    pub fn new(max_entry_bytes: u64) -> Self {
        Self { max_entry_bytes }
    }

    fn read_body_xml(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
        let entry = archive.by_name(DOCX_BODY_ENTRY).map_err(|e| {
            ResumeMatcherError::CorruptDocument(format!("{} not found: {}", DOCX_BODY_ENTRY, e))
        })?;

        // One byte past the limit tells an entry of exactly the limit apart
        // from an oversized one.
        let mut xml = Vec::new();
        entry
            .take(self.max_entry_bytes.saturating_add(1))
            .read_to_end(&mut xml)
            .map_err(|e| ResumeMatcherError::CorruptDocument(e.to_string()))?;
        if xml.len() as u64 > self.max_entry_bytes {
            return Err(ResumeMatcherError::CorruptDocument(format!(
                "{} exceeds size limit ({} bytes)",
                DOCX_BODY_ENTRY, self.max_entry_bytes
            )));
        }
        Ok(xml)
    }
}

impl TextExtractor for DocxExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        let xml = self.read_body_xml(bytes)?;
        let paragraphs = body_paragraphs(&xml)?;
        Ok(paragraphs.join("\n"))
    }
}

/// Collect the text of each top-level body paragraph. Table cells and text
/// boxes hold their own paragraphs and runs and are left out; only run and
/// text elements outside them change the run state.
fn body_paragraphs(xml: &[u8]) -> Result<Vec<String>> {
    let mut reader = Reader::from_reader(xml);
    let mut buf = Vec::new();

    let mut paragraphs = Vec::new();
    let mut current = String::new();
    let mut nested_depth = 0usize;
    let mut in_paragraph = false;
    let mut in_run = false;
    let mut in_text = false;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"tbl" | b"txbxContent" => nested_depth += 1,
                b"p" if nested_depth == 0 => {
                    in_paragraph = true;
                    current.clear();
                }
                b"r" if nested_depth == 0 => in_run = true,
                b"t" if in_paragraph && in_run && nested_depth == 0 => in_text = true,
                _ => {}
            },
            Event::Empty(e) => {
                if in_paragraph && in_run && nested_depth == 0 {
                    match e.local_name().as_ref() {
                        b"tab" => current.push('\t'),
                        b"br" | b"cr" => current.push('\n'),
                        _ => {}
                    }
                } else if e.local_name().as_ref() == b"p" && nested_depth == 0 {
                    paragraphs.push(String::new());
                }
            }
            Event::Text(te) if in_text => {
                let text = te
                    .unescape()
                    .map_err(|e| ResumeMatcherError::CorruptDocument(e.to_string()))?;
                current.push_str(&text);
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"tbl" | b"txbxContent" => nested_depth = nested_depth.saturating_sub(1),
                b"p" if nested_depth == 0 && in_paragraph => {
                    in_paragraph = false;
                    paragraphs.push(std::mem::take(&mut current));
                }
                b"r" if nested_depth == 0 => in_run = false,
                b"t" if nested_depth == 0 => in_text = false,
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(paragraphs)
}

pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, bytes: &[u8]) -> Result<String> {
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}
