// src/extractors/section.rs

// --- Section Definitions ---

/// Keywords that open a section and the headings of other sections that close it.
/// Matching is a case-insensitive substring test on the whole line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionSpec {
    pub name: &'static str,
    pub headings: &'static [&'static str],
    pub stops: &'static [&'static str],
}

pub const EXPERIENCE: SectionSpec = SectionSpec {
    name: "experience",
    headings: &["experience", "employment", "work history"],
    stops: &["education", "skills", "projects"],
};

pub const EDUCATION: SectionSpec = SectionSpec {
    name: "education",
    headings: &["education", "academic", "qualification"],
    stops: &["experience", "skills", "projects"],
};

// --- State Machine ---
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// No heading seen yet.
    Searching,
    /// Inside the section; non-blank lines are kept.
    Collecting,
    /// Another section's heading was reached. Terminal.
    Done,
}

/// Line-at-a-time section collector.
#[derive(Debug)]
pub struct Sectioner<'s> {
    spec: &'s SectionSpec,
    state: SectionState,
    lines: Vec<String>,
}

impl<'s> Sectioner<'s> {
    pub fn new(spec: &'s SectionSpec) -> Self {
        Self {
            spec,
            state: SectionState::Searching,
            lines: Vec::new(),
        }
    }

    pub fn state(&self) -> SectionState {
        self.state
    }

    pub fn feed(&mut self, line: &str) {
        // ASCII lowering keeps byte offsets aligned with `line`.
        let lower = line.to_ascii_lowercase();

        match self.state {
            SectionState::Searching => {
                if contains_keyword(&lower, self.spec.headings) {
                    tracing::trace!("'{}' section opened by line: {}", self.spec.name, line.trim());
                    self.state = SectionState::Collecting;
                    // The heading itself is not kept, but "Education: BSc ..." keeps "BSc ...".
                    if let Some(inline) = inline_content(line, &lower, self.spec.headings) {
                        self.lines.push(inline.to_string());
                    }
                }
            }
            SectionState::Collecting => {
                if contains_keyword(&lower, self.spec.stops) {
                    tracing::trace!("'{}' section closed by line: {}", self.spec.name, line.trim());
                    self.state = SectionState::Done;
                    return;
                }
                let trimmed = line.trim();
                if !trimmed.is_empty() {
                    self.lines.push(trimmed.to_string());
                }
            }
            SectionState::Done => {}
        }
    }

    pub fn finish(self) -> Vec<String> {
        self.lines
    }
}

fn contains_keyword(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lower.contains(keyword))
}

/// Text after the first `:` of a heading line.
///
/// The heading keyword ending closest before the colon must be separated
/// from it by whitespace only, so "Employment / Work History: Acme" keeps
/// "Acme" while "Experience at Acme: lead" keeps nothing.
fn inline_content<'a>(line: &'a str, lower: &str, headings: &[&str]) -> Option<&'a str> {
    let colon = line.find(':')?;
    let heading_end = headings
        .iter()
        .flat_map(|keyword| {
            lower[..colon]
                .match_indices(keyword)
                .map(move |(pos, _)| pos + keyword.len())
        })
        .max()?;
    if !line[heading_end..colon].trim().is_empty() {
        return None;
    }
    let content = line[colon + 1..].trim();
    (!content.is_empty()).then_some(content)
}

/// Collects the lines of one section. An absent section yields an empty list.
pub fn extract_section<'l, I>(lines: I, spec: &SectionSpec) -> Vec<String>
where
    I: IntoIterator<Item = &'l str>,
{
    let mut sectioner = Sectioner::new(spec);
    for line in lines {
        if sectioner.state() == SectionState::Done {
            break;
        }
        sectioner.feed(line);
    }
    let collected = sectioner.finish();
    tracing::debug!("Collected {} '{}' lines", collected.len(), spec.name);
    collected
}
