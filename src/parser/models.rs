// src/parser/models.rs
use serde::{Serialize, Serializer};
use std::fmt;

use crate::utils::error::ParseError;

/// Placeholder written for a contact field that was not located.
pub const NOT_FOUND: &str = "Not found";

/// Outcome of a single-value pattern lookup. Serialises as the matched text
/// or as [`NOT_FOUND`], never as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldMatch {
    Found(String),
    #[default]
    NotFound,
}

impl FieldMatch {
    pub fn as_deref(&self) -> Option<&str> {
        match self {
            Self::Found(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl fmt::Display for FieldMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_deref().unwrap_or(NOT_FOUND))
    }
}

impl Serialize for FieldMatch {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_deref().unwrap_or(NOT_FOUND))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ContactInfo {
    pub email: FieldMatch,
    pub phone: FieldMatch,
    pub linkedin: FieldMatch,
    pub github: FieldMatch,
}

/// Structured fields of one résumé. Every field is always present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedResume {
    pub name: String,
    pub contact: ContactInfo,
    pub skills: Vec<String>,
    pub education: Vec<String>,
    pub experience: Vec<String>,
    pub summary: String,
    pub raw_text: String,
}

/// What a parse call reports: the record, or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ParseResponse {
    Parsed(ParsedResume),
    Failed { error: String },
}

impl From<Result<ParsedResume, ParseError>> for ParseResponse {
    fn from(result: Result<ParsedResume, ParseError>) -> Self {
        match result {
            Ok(resume) => Self::Parsed(resume),
            Err(e) => Self::Failed { error: e.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> ParsedResume {
        ParsedResume {
            name: "Jane Roe".to_string(),
            contact: ContactInfo {
                email: FieldMatch::Found("jane@example.com".to_string()),
                ..ContactInfo::default()
            },
            skills: vec!["Rust".to_string()],
            education: vec![],
            experience: vec!["Acme".to_string()],
            summary: "Jane Roe".to_string(),
            raw_text: "Jane Roe".to_string(),
        }
    }

    #[test]
    fn test_record_shape() {
        let value = serde_json::to_value(ParseResponse::Parsed(sample())).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "Jane Roe",
                "contact": {
                    "email": "jane@example.com",
                    "phone": "Not found",
                    "linkedin": "Not found",
                    "github": "Not found"
                },
                "skills": ["Rust"],
                "education": [],
                "experience": ["Acme"],
                "summary": "Jane Roe",
                "raw_text": "Jane Roe"
            })
        );
    }

    #[test]
    fn test_error_shape() {
        let response = ParseResponse::from(Err::<ParsedResume, _>(ParseError::EmptyExtraction));
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({ "error": "Could not extract text from file" })
        );
    }

    #[test]
    fn test_field_match_display() {
        assert_eq!(FieldMatch::NotFound.to_string(), "Not found");
        assert_eq!(FieldMatch::Found("x".into()).to_string(), "x");
    }
}
