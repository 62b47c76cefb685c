// src/documents/reader.rs
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use crate::documents::docx::extract_docx_text;
use crate::documents::models::{Document, DocumentFormat, DocumentSource, ExtractedText};
use crate::documents::pdf::extract_pdf_text;
use crate::utils::config::DEFAULT_MAX_FILE_SIZE;
use crate::utils::error::ExtractError;

/// Turns a [`Document`] into plain text.
///
/// Never fails outward: any read, decode or format error is logged and
/// becomes empty text, which callers treat as "extraction failed".
#[derive(Debug, Clone, Copy)]
pub struct TextExtractor {
    max_file_size: u64,
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FILE_SIZE)
    }
}

impl TextExtractor {
    pub fn new(max_file_size: u64) -> Self {
        Self { max_file_size }
    }

    pub fn extract(&self, document: &Document) -> ExtractedText {
        match self.try_extract(document) {
            Ok(text) => {
                tracing::debug!("Extracted {} bytes of text from {}", text.len(), document.describe());
                ExtractedText::new(text)
            }
            Err(e) => {
                tracing::warn!("Failed to extract {} text from {}: {}", document.format(), document.describe(), e);
                ExtractedText::default()
            }
        }
    }

    fn try_extract(&self, document: &Document) -> Result<String, ExtractError> {
        let bytes = match document.source() {
            DocumentSource::Path(path) => self.read_source(path)?,
            DocumentSource::Bytes(bytes) => {
                self.check_size(bytes.len() as u64)?;
                bytes.clone()
            }
        };

        match document.format() {
            DocumentFormat::Pdf => extract_pdf_text(&bytes),
            DocumentFormat::Docx => extract_docx_text(&bytes),
            DocumentFormat::Plain => Ok(String::from_utf8(bytes)?),
        }
    }

    /// Reads at most one byte past the limit; the handle is closed before parsing starts.
    ///
    /// The metadata check rejects large regular files early. The bounded read
    /// covers devices, pipes and files that grow after the check.
    fn read_source(&self, path: &Path) -> Result<Vec<u8>, ExtractError> {
        self.check_size(fs::metadata(path)?.len())?;

        let mut bytes = Vec::new();
        File::open(path)?
            .take(self.max_file_size.saturating_add(1))
            .read_to_end(&mut bytes)?;
        self.check_size(bytes.len() as u64)?;
        Ok(bytes)
    }

    fn check_size(&self, size: u64) -> Result<(), ExtractError> {
        if size > self.max_file_size {
            return Err(ExtractError::TooLarge { size, limit: self.max_file_size });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::docx::tests::build_docx;
    use crate::documents::pdf::tests::build_pdf;
    use std::io::Write;

    #[test]
    fn test_plain_text_read_as_is() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Jane Roe\nEmail: jane@example.com\n").unwrap();

        let doc = Document::from_path(file.path(), DocumentFormat::Plain);
        let text = TextExtractor::default().extract(&doc);
        assert_eq!(text.into_string(), "Jane Roe\nEmail: jane@example.com\n");
    }

    #[test]
    fn test_missing_file_becomes_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let doc = Document::from_path(dir.path().join("nope.pdf"), DocumentFormat::Pdf);
        assert!(TextExtractor::default().extract(&doc).is_empty());
    }

    #[test]
    fn test_invalid_utf8_becomes_empty_text() {
        let doc = Document::from_bytes(vec![0x4a, 0xff, 0xfe, 0x6f], DocumentFormat::Plain);
        assert!(TextExtractor::default().extract(&doc).is_empty());
    }

    #[test]
    fn test_oversized_source_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[b'a'; 64]).unwrap();

        let extractor = TextExtractor::new(16);
        let from_disk = Document::from_path(file.path(), DocumentFormat::Plain);
        assert!(extractor.extract(&from_disk).is_empty());
        assert!(matches!(
            extractor.try_extract(&from_disk),
            Err(ExtractError::TooLarge { size: 64, limit: 16 })
        ));

        let in_memory = Document::from_bytes(vec![b'a'; 64], DocumentFormat::Plain);
        assert!(extractor.extract(&in_memory).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unbounded_device_stops_at_limit() {
        // Character devices report a zero length, so only the bounded read catches them.
        let doc = Document::from_path("/dev/zero", DocumentFormat::Plain);
        let extractor = TextExtractor::new(16);
        assert!(matches!(
            extractor.try_extract(&doc),
            Err(ExtractError::TooLarge { size: 17, limit: 16 })
        ));
        assert!(extractor.extract(&doc).is_empty());
    }

    #[test]
    fn test_declared_format_is_trusted() {
        // A DOCX declared as PDF is not rescued by sniffing.
        let bytes = build_docx("<w:p><w:r><w:t>Jane Roe</w:t></w:r></w:p>");
        let doc = Document::from_bytes(bytes, DocumentFormat::Pdf);
        assert!(TextExtractor::default().extract(&doc).is_empty());
    }

    #[test]
    fn test_docx_and_pdf_dispatch() {
        let docx = Document::from_bytes(
            build_docx("<w:p><w:r><w:t>Jane Roe</w:t></w:r></w:p>"),
            DocumentFormat::Docx,
        );
        assert_eq!(TextExtractor::default().extract(&docx).into_string(), "Jane Roe");

        let pdf = Document::from_bytes(build_pdf(&["Jane Roe"]), DocumentFormat::Pdf);
        assert!(TextExtractor::default().extract(&pdf).into_string().contains("Jane Roe"));
    }
}
