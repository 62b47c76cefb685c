// src/utils/error.rs
use thiserror::Error;

// Define specific error types for different parts of the application
#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Missing or unreadable file

    #[error("Document is {size} bytes, larger than the {limit} byte limit")]
    TooLarge { size: u64, limit: u64 },

    #[error("PDF parsing error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("DOCX archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    #[error("DOCX XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("Text is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Malformed document: {0}")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum NerError {
    #[error("Entity model failed: {0}")]
    Model(String),
}

/// Terminal failures of a single parse call. The display strings are part of
/// the `{"error": ...}` output shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unsupported file type")]
    UnsupportedFormat(String), // The rejected tag, kept for logging

    #[error("Could not extract text from file")]
    EmptyExtraction,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error), // Automatically convert IO errors

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Data processing failed: {0}")]
    Processing(String),
}
