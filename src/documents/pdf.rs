// src/documents/pdf.rs
use lopdf::Document as PdfDocument;

use crate::utils::error::ExtractError;

/// Extracts text page by page and concatenates it with no separator.
///
/// Only a document that cannot be loaded at all is an error. A page whose
/// text cannot be decoded contributes nothing.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractError> {
    let pdf = PdfDocument::load_mem(bytes)?;
    let pages = pdf.get_pages();
    tracing::debug!("PDF loaded with {} pages", pages.len());

    let mut text = String::new();
    for (page_number, _page_id) in pages {
        match pdf.extract_text(&[page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                tracing::debug!("Skipping text of page {}: {}", page_number, e);
            }
        }
    }

    Ok(text)
}
