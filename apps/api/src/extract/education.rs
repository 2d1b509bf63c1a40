//! Education scanner: cue-word lines plus a small window of supporting lines.

use std::sync::LazyLock;

use regex::Regex;

use super::document::Document;
use super::lexicon::{DEGREE_CUES, INSTITUTION_WORDS};
use crate::models::resume::EducationEntry;

const MAX_ENTRIES: usize = 3;

static YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b(19|20)\d{2}\b").unwrap());

/// Scans every line for a degree cue word and builds one entry per cue-hit
/// line: the line itself is the degree, the first 4-digit year within two
/// lines either side is the year, and the first institution-flavored line
/// within one line either side is the institution. Entries beyond the third
/// cue hit are discarded in document order.
pub fn scan(doc: &Document) -> Vec<EducationEntry> {
    let mut entries = Vec::new();

    for (i, line) in doc.lines().iter().enumerate() {
        let lower = line.to_lowercase();
        if !DEGREE_CUES.iter().any(|cue| lower.contains(cue)) {
            continue;
        }

        let year = doc
            .window(i, 2, 2)
            .find_map(|j| YEAR_RE.find(doc.line(j)))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let institution = doc
            .window(i, 1, 1)
            .map(|j| doc.line(j))
            .find(|l| {
                let lower = l.to_lowercase();
                INSTITUTION_WORDS.iter().any(|w| lower.contains(w))
            })
            .map(|l| l.trim().to_string())
            .unwrap_or_default();

        entries.push(EducationEntry {
            degree: line.trim().to_string(),
            institution,
            year,
        });
        if entries.len() == MAX_ENTRIES {
            break;
        }
    }

    entries
}
