// src/parser/mod.rs
pub mod aggregator;
pub mod models;

// Re-export key parsing types for convenience
pub use aggregator::ResumeParser;
#[allow(unused_imports)]
pub use models::{ContactInfo, FieldMatch, ParseResponse, ParsedResume};
