// src/extractors/entities.rs

// --- Imports ---
use std::collections::HashSet;
use std::sync::Arc;

use crate::extractors::patterns::SKILLS;
use crate::utils::error::NerError;

/// Name reported when neither the model nor the first-line fallback yields one.
pub const UNKNOWN_NAME: &str = "Unknown";

// --- Data Structures ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityLabel {
    Person,
    Organization,
}

/// A labelled span. `start`/`end` are byte offsets into the text given to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

/// A named-entity model shared read-only across parse calls.
pub trait EntityModel: Send + Sync {
    fn name(&self) -> &str;

    fn recognize(&self, text: &str) -> Result<Vec<Entity>, NerError>;
}

// --- Rule-Based Model ---

// Vocabulary that shows up capitalised in résumés without being part of a name.
const RESUME_VOCABULARY: &[&str] = &[
    "resume", "résumé", "curriculum", "vitae", "cv", "email", "e-mail", "mail", "phone", "mobile",
    "tel", "telephone", "address", "linkedin", "github", "website", "portfolio", "summary",
    "profile", "objective", "skills", "education", "experience", "employment", "work", "history",
    "projects", "certifications", "references", "contact", "about", "languages", "interests",
    "awards", "publications", "achievements", "qualification", "qualifications", "academic",
    "software", "developer", "engineer", "manager", "senior", "junior", "lead", "intern",
    "analyst", "consultant", "designer", "architect", "scientist", "director", "officer",
    "specialist", "bachelor", "master", "doctor", "phd", "degree", "diploma", "science", "arts",
    "computer", "engineering", "technology", "years", "present", "january", "february", "march",
    "april", "may", "june", "july", "august", "september", "october", "november", "december",
    "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec",
];

const ORGANIZATION_KEYWORDS: &[&str] = &[
    "university", "college", "institute", "school", "academy", "inc", "ltd", "llc", "corp",
    "corporation", "company", "technologies", "solutions", "labs", "group", "bank", "systems",
];

// Longer capitalised runs are headings or titles rather than names.
const MAX_NAME_TOKENS: usize = 4;

/// Bundled model: tags short runs of capitalised words on a single line.
///
/// Runs containing an organisation keyword are tagged [`EntityLabel::Organization`],
/// the rest [`EntityLabel::Person`].
#[derive(Debug, Clone)]
pub struct RuleBasedModel {
    stopwords: HashSet<String>,
    organization_keywords: HashSet<String>,
}

impl RuleBasedModel {
    pub fn load() -> Self {
        let stopwords = RESUME_VOCABULARY
            .iter()
            .map(|w| w.to_string())
            .chain(SKILLS.iter().map(|s| s.to_lowercase()))
            .collect();
        let organization_keywords = ORGANIZATION_KEYWORDS.iter().map(|w| w.to_string()).collect();
        tracing::debug!("Rule-based entity model loaded");
        Self { stopwords, organization_keywords }
    }

    fn close_run(&self, text: &str, run: &mut Vec<Token>, entities: &mut Vec<Entity>) {
        let tokens = std::mem::take(run);
        let words = tokens.iter().filter(|t| !t.is_initial).count();
        let ends_on_word = tokens.last().map_or(false, |t| !t.is_initial);
        if tokens.len() < 2 || tokens.len() > MAX_NAME_TOKENS || words == 0 || !ends_on_word {
            return;
        }

        let start = tokens[0].start;
        let end = tokens[tokens.len() - 1].end;
        let label = if tokens
            .iter()
            .any(|t| self.organization_keywords.contains(&t.lower))
        {
            EntityLabel::Organization
        } else {
            EntityLabel::Person
        };
        entities.push(Entity {
            label,
            text: text[start..end].to_string(),
            start,
            end,
        });
    }
}

impl Default for RuleBasedModel {
    fn default() -> Self {
        Self::load()
    }
}

impl EntityModel for RuleBasedModel {
    fn name(&self) -> &str {
        "rule-based"
    }

    fn recognize(&self, text: &str) -> Result<Vec<Entity>, NerError> {
        if text.contains('\0') {
            return Err(NerError::Model("input contains NUL characters".to_string()));
        }

        let mut entities = Vec::new();
        let mut line_start = 0;

        for line in text.split_inclusive('\n') {
            let mut run: Vec<Token> = Vec::new();
            for raw in tokenize(line, line_start) {
                let token = match raw.classify(&self.stopwords) {
                    Some(token) => token,
                    None => {
                        self.close_run(text, &mut run, &mut entities);
                        continue;
                    }
                };
                if token.breaks_before {
                    self.close_run(text, &mut run, &mut entities);
                }
                let breaks_after = token.breaks_after;
                run.push(token);
                if breaks_after {
                    self.close_run(text, &mut run, &mut entities);
                }
            }
            self.close_run(text, &mut run, &mut entities);
            line_start += line.len();
        }

        Ok(entities)
    }
}

/// Whitespace-delimited slice of a line, with its absolute byte offset.
struct RawToken<'a> {
    text: &'a str,
    start: usize,
}

/// A name-like token, trimmed of surrounding punctuation.
struct Token {
    lower: String,
    start: usize,
    end: usize,
    is_initial: bool,
    breaks_before: bool,
    breaks_after: bool,
}

fn tokenize(line: &str, offset: usize) -> Vec<RawToken<'_>> {
    let mut tokens = Vec::new();
    let mut current: Option<usize> = None;
    for (i, c) in line.char_indices() {
        match (c.is_whitespace(), current) {
            (true, Some(s)) => {
                tokens.push(RawToken { text: &line[s..i], start: offset + s });
                current = None;
            }
            (false, None) => current = Some(i),
            _ => {}
        }
    }
    if let Some(s) = current {
        tokens.push(RawToken { text: &line[s..], start: offset + s });
    }
    tokens
}

impl RawToken<'_> {
    fn classify(&self, stopwords: &HashSet<String>) -> Option<Token> {
        let is_word_char = |c: char| c.is_alphabetic() || c == '-' || c == '\'';
        let trimmed_start = self.text.trim_start_matches(|c: char| !c.is_alphabetic());
        let core = trimmed_start.trim_end_matches(|c: char| !c.is_alphabetic());
        if core.is_empty() || !core.chars().all(is_word_char) {
            return None;
        }

        let lead = self.text.len() - trimmed_start.len();
        let trailing = &trimmed_start[core.len()..];
        let mut chars = core.chars();
        let first = chars.next()?;
        let rest: String = chars.collect();

        let is_initial = rest.is_empty() && first.is_uppercase() && trailing.starts_with('.');
        // Each hyphen/apostrophe segment capitalised once: "Mary-Jane", "O'Brien".
        let title_case = core
            .split(|c: char| c == '-' || c == '\'')
            .filter(|seg| !seg.is_empty())
            .all(|seg| {
                let mut seg_chars = seg.chars();
                seg_chars.next().map_or(false, char::is_uppercase) && !seg_chars.any(char::is_uppercase)
            });
        let all_caps = core.chars().count() > 1 && !core.chars().any(char::is_lowercase);
        if !(is_initial || (!rest.is_empty() && (title_case || all_caps))) {
            return None;
        }

        let lower = core.to_lowercase();
        if stopwords.contains(&lower) {
            return None;
        }

        let end_trim = if is_initial { 1 } else { 0 };
        Some(Token {
            lower,
            start: self.start + lead,
            end: self.start + lead + core.len() + end_trim,
            is_initial,
            breaks_before: lead > 0,
            breaks_after: !is_initial && !trailing.is_empty(),
        })
    }
}

// --- Recognizer ---

/// Finds the candidate's name with an injected [`EntityModel`].
#[derive(Clone)]
pub struct EntityRecognizer {
    model: Arc<dyn EntityModel>,
    window: usize,
}

impl EntityRecognizer {
    /// `window` bounds how many leading characters the model sees.
    pub fn new(model: Arc<dyn EntityModel>, window: usize) -> Self {
        tracing::debug!("Entity recognizer using model '{}' over {} chars", model.name(), window);
        Self { model, window }
    }

    /// First PERSON entity in the leading window; otherwise the first
    /// non-empty line; otherwise [`UNKNOWN_NAME`]. A model failure degrades
    /// straight to [`UNKNOWN_NAME`].
    pub fn find_person_name(&self, text: &str) -> String {
        let prefix = leading_chars(text, self.window);

        match self.model.recognize(prefix) {
            Ok(entities) => {
                let person = entities
                    .into_iter()
                    .filter(|e| e.label == EntityLabel::Person)
                    .min_by_key(|e| e.start);
                if let Some(person) = person {
                    tracing::debug!("Entity model found person '{}' at {}..{}", person.text, person.start, person.end);
                    return person.text;
                }
            }
            Err(e) => {
                tracing::warn!("Entity model '{}' failed, name left unknown: {}", self.model.name(), e);
                return UNKNOWN_NAME.to_string();
            }
        }

        match text.lines().map(str::trim).find(|line| !line.is_empty()) {
            Some(line) => {
                tracing::debug!("No person entity found, falling back to first line");
                line.to_string()
            }
            None => UNKNOWN_NAME.to_string(),
        }
    }
}

fn leading_chars(text: &str, count: usize) -> &str {
    match text.char_indices().nth(count) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
