// src/parser/aggregator.rs
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::documents::{Document, DocumentFormat, TextExtractor};
use crate::extractors::entities::{EntityModel, EntityRecognizer, RuleBasedModel};
use crate::extractors::patterns::{extract_contact_info, extract_skills};
use crate::extractors::section::{extract_section, EDUCATION, EXPERIENCE};
use crate::parser::models::ParsedResume;
use crate::utils::config::ParserConfig;
use crate::utils::error::ParseError;

/// Runs text extraction and every field extractor over one document.
///
/// Holds no per-call state, so one instance can serve many documents
/// concurrently behind an `Arc`.
#[derive(Clone)]
pub struct ResumeParser {
    extractor: TextExtractor,
    recognizer: EntityRecognizer,
    config: ParserConfig,
}

impl ResumeParser {
    pub fn new(model: Arc<dyn EntityModel>, config: ParserConfig) -> Self {
        Self {
            extractor: TextExtractor::new(config.max_file_size),
            recognizer: EntityRecognizer::new(model, config.name_window),
            config,
        }
    }

    /// Parser backed by the bundled [`RuleBasedModel`].
    pub fn with_default_model(config: ParserConfig) -> Self {
        Self::new(Arc::new(RuleBasedModel::load()), config)
    }

    /// Resolves `file_type` first; an unsupported tag fails without touching the file.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P, file_type: &str) -> Result<ParsedResume, ParseError> {
        let format = resolve_format(file_type, &path.as_ref().display().to_string())?;
        self.parse(&Document::from_path(path, format))
    }

    /// Like [`ResumeParser::parse_file`] for a stream such as stdin. The tag is
    /// checked before anything is read.
    pub fn parse_reader<R: Read>(&self, reader: R, file_type: &str) -> Result<ParsedResume, ParseError> {
        let format = resolve_format(file_type, "input stream")?;

        // One byte past the limit is enough for the extractor to reject it.
        let mut bytes = Vec::new();
        if let Err(e) = reader
            .take(self.config.max_file_size.saturating_add(1))
            .read_to_end(&mut bytes)
        {
            tracing::warn!("Failed to read input stream: {}", e);
            return Err(ParseError::EmptyExtraction);
        }
        self.parse(&Document::from_bytes(bytes, format))
    }

    pub fn parse(&self, document: &Document) -> Result<ParsedResume, ParseError> {
        let text = self.extractor.extract(document);
        if text.is_empty() {
            tracing::warn!("No text extracted from {}", document.describe());
            return Err(ParseError::EmptyExtraction);
        }
        Ok(self.parse_text(text.into_string()))
    }

    /// Field extraction over already-acquired text. Total: absent fields
    /// come back as their placeholders.
    pub fn parse_text(&self, text: String) -> ParsedResume {
        let lines: Vec<&str> = text.lines().collect();

        let name = self.recognizer.find_person_name(&text);
        let contact = extract_contact_info(&text);
        let skills = extract_skills(&text);
        let experience = extract_section(lines.iter().copied(), &EXPERIENCE);
        let education = extract_section(lines.iter().copied(), &EDUCATION);
        let summary = summarize(&text, self.config.summary_chars);

        tracing::info!(
            "Parsed résumé for '{}': {} skills, {} education lines, {} experience lines",
            name,
            skills.len(),
            education.len(),
            experience.len()
        );

        ParsedResume {
            name,
            contact,
            skills,
            education,
            experience,
            summary,
            raw_text: text,
        }
    }
}

fn resolve_format(file_type: &str, origin: &str) -> Result<DocumentFormat, ParseError> {
    DocumentFormat::from_tag(file_type).map_err(|e| {
        tracing::warn!("Rejecting {}: unsupported file type '{}'", origin, file_type);
        e
    })
}

/// Leading `max_chars` characters, whitespace-trimmed.
fn summarize(text: &str, max_chars: usize) -> String {
    let end = text
        .char_indices()
        .nth(max_chars)
        .map_or(text.len(), |(idx, _)| idx);
    text[..end].trim().to_string()
}
