// src/utils/match_debug.rs
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::utils::error::AppError;

/// Wraps every pattern hit in `[[label:...]]` markers.
///
/// Hits are applied in text order; a hit overlapping an earlier one is skipped.
pub fn annotate_matches(text: &str, patterns: &[(&Regex, &str)]) -> String {
    let mut highlights: Vec<(usize, usize, &str)> = Vec::new();
    for (re, label) in patterns {
        for mat in re.find_iter(text) {
            highlights.push((mat.start(), mat.end(), *label));
        }
    }
    highlights.sort_by_key(|h| (h.0, h.1));

    let mut annotated = String::with_capacity(text.len() + highlights.len() * 16);
    let mut last_pos = 0;
    for (start, end, label) in highlights {
        if start < last_pos {
            continue;
        }
        annotated.push_str(&text[last_pos..start]);
        annotated.push_str(&format!("[[{}:{}]]", label, &text[start..end]));
        last_pos = end;
    }
    annotated.push_str(&text[last_pos..]);
    annotated
}

/// Writes the annotated text to `path`, creating parent directories.
pub fn save_debug_dump(text: &str, path: &Path, patterns: &[(&Regex, &str)]) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, annotate_matches(text, patterns))?;
    tracing::info!("Saved debug dump to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::patterns::contact_patterns;

    #[test]
    fn test_annotates_contact_hits() {
        let text = "Jane\njane@example.com, 555-123-4567\ngithub.com/jane";
        let annotated = annotate_matches(text, &contact_patterns());
        assert_eq!(
            annotated,
            "Jane\n[[email:jane@example.com]], [[phone:555-123-4567]]\n[[github:github.com/jane]]"
        );
    }

    #[test]
    fn test_overlapping_hits_are_skipped() {
        let digits = Regex::new(r"\d+").unwrap();
        let pair = Regex::new(r"\d \d").unwrap();
        let annotated = annotate_matches("1 2", &[(&pair, "pair"), (&digits, "num")]);
        assert_eq!(annotated, "[[num:1]] [[num:2]]");
    }

    #[test]
    fn test_dump_written_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug").join("resume.txt");
        save_debug_dump("call 555-123-4567", &path, &contact_patterns()).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "call [[phone:555-123-4567]]");
    }
}
