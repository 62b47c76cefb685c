// src/documents/docx.rs
use std::io::{Cursor, Read};

use roxmltree::Node;

use crate::utils::error::ExtractError;

const DOCUMENT_PART: &str = "word/document.xml";
const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

/// Extracts body paragraphs of a DOCX file, joined by newlines.
///
/// Only paragraphs that are direct children of `w:body` are read, so text
/// inside tables, headers and footers is not part of the result.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    let mut xml = String::new();
    archive.by_name(DOCUMENT_PART)?.read_to_string(&mut xml)?;

    let doc = roxmltree::Document::parse(&xml)?;
    let body = doc
        .root_element()
        .children()
        .find(|n| n.has_tag_name((WORD_NS, "body")))
        .ok_or_else(|| ExtractError::Malformed(format!("{} has no w:body element", DOCUMENT_PART)))?;

    let paragraphs: Vec<String> = body
        .children()
        .filter(|n| n.has_tag_name((WORD_NS, "p")))
        .map(paragraph_text)
        .collect();

    tracing::debug!("DOCX body has {} paragraphs", paragraphs.len());
    Ok(paragraphs.join("\n"))
}

fn paragraph_text(paragraph: Node) -> String {
    let mut text = String::new();
    for node in paragraph.descendants().filter(|n| n.is_element()) {
        if node.tag_name().namespace() != Some(WORD_NS) {
            continue;
        }
        match node.tag_name().name() {
            "t" => text.push_str(node.text().unwrap_or_default()),
            "tab" => text.push('\t'),
            "br" | "cr" => text.push('\n'),
            _ => {}
        }
    }
    text
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::io::Write;
    use zip::write::FileOptions;

    /// Wraps body XML in a minimal DOCX package.
    pub(crate) fn build_docx(body_xml: &str) -> Vec<u8> {
        let document = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="{}"><w:body>{}</w:body></w:document>"#,
            WORD_NS, body_xml
        );

        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file(DOCUMENT_PART, FileOptions::default()).unwrap();
        writer.write_all(document.as_bytes()).unwrap();
        writer.finish().unwrap().into_inner()
    }

    #[test]
    fn test_paragraphs_joined_by_newline() {
        let bytes = build_docx(
            "<w:p><w:r><w:t>Jane </w:t></w:r><w:r><w:t>Roe</w:t></w:r></w:p>\
             <w:p><w:r><w:t>Experience</w:t></w:r></w:p>\
             <w:p/>\
             <w:p><w:r><w:t>Built</w:t><w:tab/><w:t>X</w:t><w:br/><w:t>Y</w:t></w:r></w:p>",
        );
        let text = extract_docx_text(&bytes).unwrap();
        assert_eq!(text, "Jane Roe\nExperience\n\nBuilt\tX\nY");
    }

    #[test]
    fn test_table_paragraphs_are_not_body_paragraphs() {
        let bytes = build_docx(
            "<w:p><w:r><w:t>Top</w:t></w:r></w:p>\
             <w:tbl><w:tr><w:tc><w:p><w:r><w:t>Cell</w:t></w:r></w:p></w:tc></w:tr></w:tbl>",
        );
        assert_eq!(extract_docx_text(&bytes).unwrap(), "Top");
    }

    #[test]
    fn test_missing_document_part_is_error() {
        let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
        writer.start_file("word/styles.xml", FileOptions::default()).unwrap();
        writer.write_all(b"<styles/>").unwrap();
        let bytes = writer.finish().unwrap().into_inner();

        assert!(matches!(extract_docx_text(&bytes), Err(ExtractError::Archive(_))));
    }

    #[test]
    fn test_not_a_zip_is_error() {
        assert!(extract_docx_text(b"plain words").is_err());
    }
}
