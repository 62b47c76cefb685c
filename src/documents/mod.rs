// src/documents/mod.rs
pub mod docx;
pub mod models;
pub mod pdf;
pub mod reader;

// Re-export key document types for convenience
#[allow(unused_imports)]
pub use models::{Document, DocumentFormat, ExtractedText};
#[allow(unused_imports)]
pub use reader::TextExtractor;
