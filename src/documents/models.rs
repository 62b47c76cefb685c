// src/documents/models.rs
use std::fmt;
use std::path::{Path, PathBuf};

use crate::utils::error::ParseError;

/// Format tag declared by the caller. Content is never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Plain,
}

impl DocumentFormat {
    /// Resolves a caller-supplied tag such as `"pdf"` or `"doc"`.
    pub fn from_tag(tag: &str) -> Result<Self, ParseError> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" | "doc" => Ok(Self::Docx),
            "txt" | "text" | "plain" => Ok(Self::Plain),
            _ => Err(ParseError::UnsupportedFormat(tag.to_string())),
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Plain => "plain",
        };
        f.write_str(tag)
    }
}

/// Where the document bytes come from.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

/// A source document plus its declared format. Read once, then dropped.
#[derive(Debug, Clone)]
pub struct Document {
    source: DocumentSource,
    format: DocumentFormat,
}

impl Document {
    pub fn from_path<P: AsRef<Path>>(path: P, format: DocumentFormat) -> Self {
        Self {
            source: DocumentSource::Path(path.as_ref().to_path_buf()),
            format,
        }
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>, format: DocumentFormat) -> Self {
        Self {
            source: DocumentSource::Bytes(bytes.into()),
            format,
        }
    }

    pub fn source(&self) -> &DocumentSource {
        &self.source
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Human-readable origin for log lines.
    pub fn describe(&self) -> String {
        match &self.source {
            DocumentSource::Path(path) => path.display().to_string(),
            DocumentSource::Bytes(bytes) => format!("<{} in-memory bytes>", bytes.len()),
        }
    }
}

/// Plain text pulled out of a [`Document`]. Empty means extraction failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText(String);

impl ExtractedText {
    pub fn new(text: String) -> Self {
        Self(text)
    }

    /// Whitespace-only text counts as a failed extraction too.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tags() {
        assert_eq!(DocumentFormat::from_tag("pdf"), Ok(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_tag(" PDF "), Ok(DocumentFormat::Pdf));
        assert_eq!(DocumentFormat::from_tag("doc"), Ok(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_tag("docx"), Ok(DocumentFormat::Docx));
        assert_eq!(DocumentFormat::from_tag("txt"), Ok(DocumentFormat::Plain));
        assert_eq!(DocumentFormat::from_tag("plain"), Ok(DocumentFormat::Plain));
    }

    #[test]
    fn test_unknown_tag_is_unsupported() {
        assert_eq!(
            DocumentFormat::from_tag("xyz"),
            Err(ParseError::UnsupportedFormat("xyz".to_string()))
        );
        assert_eq!(
            ParseError::UnsupportedFormat("xyz".into()).to_string(),
            "Unsupported file type"
        );
    }

    #[test]
    fn test_whitespace_text_counts_as_empty() {
        assert!(ExtractedText::new(" \n\t".to_string()).is_empty());
        assert!(!ExtractedText::new("John".to_string()).is_empty());
    }
}
