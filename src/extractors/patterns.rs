// src/extractors/patterns.rs

// --- Imports ---
use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parser::models::{ContactInfo, FieldMatch};

// --- Regex Patterns (Lazy Static) ---
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
        .expect("Failed to compile EMAIL_RE")
});

// Optional +country prefix, then 3-3-4 digit groups with `-`, `.`, space or parentheses between.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+\d{1,3}[-.\s]?)?\(?\d{3}\)?[-.\s]?\d{3}[-.\s]?\d{4}")
        .expect("Failed to compile PHONE_RE")
});

// Domain literals are case-sensitive.
static LINKEDIN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"linkedin\.com/(?:in|company)/[\w-]+").expect("Failed to compile LINKEDIN_RE")
});

static GITHUB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"github\.com/[\w-]+").expect("Failed to compile GITHUB_RE")
});

// --- Skill Allow-List ---
pub const SKILLS: &[&str] = &[
    "Python",
    "JavaScript",
    "TypeScript",
    "Java",
    "C++",
    "C#",
    "PHP",
    "Ruby",
    "Rust",
    "React",
    "Angular",
    "Vue.js",
    "Node.js",
    "Django",
    "Flask",
    "FastAPI",
    "HTML",
    "CSS",
    "SCSS",
    "Tailwind",
    "Bootstrap",
    "SQL",
    "NoSQL",
    "PostgreSQL",
    "MySQL",
    "MongoDB",
    "Redis",
    "Elasticsearch",
    "GraphQL",
    "SOAP",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Git",
    "Jenkins",
    "Machine Learning",
    "Data Analysis",
    "TensorFlow",
    "PyTorch",
    "Pandas",
    "NumPy",
    "Agile",
    "Scrum",
    "CI/CD",
];

// Characters that may sit on either side of a single-word skill.
const TOKEN_BOUNDARY: &str = r"[\s,;:|/()\[\]!?]";

enum SkillMatcher {
    /// Multi-word entry: case-insensitive substring of the whole text.
    Phrase(String),
    /// Single-word entry: case-insensitive whole token.
    Token(Regex),
}

impl SkillMatcher {
    fn for_skill(skill: &str) -> Self {
        if skill.contains(char::is_whitespace) {
            return Self::Phrase(skill.to_lowercase());
        }
        // A trailing period only counts as a boundary when it ends a sentence,
        // so "Vue" does not match inside "Vue.js".
        let pattern = format!(
            r"(?i)(?:^|{b}){skill}(?:$|{b}|\.(?:\s|$))",
            b = TOKEN_BOUNDARY,
            skill = regex::escape(skill)
        );
        Self::Token(Regex::new(&pattern).expect("skill pattern is built from an escaped literal"))
    }

    fn is_match(&self, text: &str, text_lower: &str) -> bool {
        match self {
            Self::Phrase(phrase) => text_lower.contains(phrase.as_str()),
            Self::Token(re) => re.is_match(text),
        }
    }
}

static SKILL_MATCHERS: Lazy<Vec<(&'static str, SkillMatcher)>> = Lazy::new(|| {
    SKILLS
        .iter()
        .map(|skill| (*skill, SkillMatcher::for_skill(skill)))
        .collect()
});

// --- Extraction Functions ---
fn first_match(re: &Regex, text: &str) -> FieldMatch {
    re.find(text)
        .map(|m| FieldMatch::Found(m.as_str().to_string()))
        .unwrap_or(FieldMatch::NotFound)
}

pub fn extract_email(text: &str) -> FieldMatch {
    first_match(&EMAIL_RE, text)
}

/// First phone-shaped run in scan order. Overlapping digit runs are not deduplicated.
pub fn extract_phone(text: &str) -> FieldMatch {
    first_match(&PHONE_RE, text)
}

pub fn extract_linkedin(text: &str) -> FieldMatch {
    first_match(&LINKEDIN_RE, text)
}

pub fn extract_github(text: &str) -> FieldMatch {
    first_match(&GITHUB_RE, text)
}

pub fn extract_contact_info(text: &str) -> ContactInfo {
    ContactInfo {
        email: extract_email(text),
        phone: extract_phone(text),
        linkedin: extract_linkedin(text),
        github: extract_github(text),
    }
}

/// Skills from [`SKILLS`] present in `text`, in allow-list order and spelling.
pub fn extract_skills(text: &str) -> Vec<String> {
    let text_lower = text.to_lowercase();
    let mut seen = HashSet::new();

    SKILL_MATCHERS
        .iter()
        .filter(|(_, matcher)| matcher.is_match(text, &text_lower))
        .filter(|(skill, _)| seen.insert(skill.to_lowercase()))
        .map(|(skill, _)| skill.to_string())
        .collect()
}

/// Contact patterns with the labels used when annotating debug dumps.
pub fn contact_patterns() -> [(&'static Regex, &'static str); 4] {
    [
        (&*EMAIL_RE, "email"),
        (&*PHONE_RE, "phone"),
        (&*LINKEDIN_RE, "linkedin"),
        (&*GITHUB_RE, "github"),
    ]
}
