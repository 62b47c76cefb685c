// src/extractors/mod.rs
pub mod entities;
pub mod patterns;
pub mod section;

// Re-export key extraction types for convenience
#[allow(unused_imports)]
pub use entities::{Entity, EntityLabel, EntityModel, EntityRecognizer, RuleBasedModel};
#[allow(unused_imports)]
pub use section::{extract_section, SectionSpec, SectionState, Sectioner, EDUCATION, EXPERIENCE};
