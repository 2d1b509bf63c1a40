//! Experience scanner: job-title lines, a probed company line, and a
//! year-range period.

use std::sync::LazyLock;

use regex::Regex;

use super::document::Document;
use super::lexicon::{COMPANY_PROBE_OFFSETS, TITLE_PATTERNS};
use crate::models::resume::ExperienceEntry;

const MAX_ENTRIES: usize = 3;

static TITLE_RES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| TITLE_PATTERNS.iter().map(|p| Regex::new(p).unwrap()).collect());

/// `YYYY - YYYY` or `YYYY - Present/Current`, with any dash flavor.
static PERIOD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(19|20)\d{2}\s*[-\u{2013}\u{2014}]\s*((19|20)\d{2}|Present|Current)\b")
        .unwrap()
});

/// Scans every line against the title patterns (first pattern to match
/// claims the line). For each title line: the company is the first probed
/// neighbor (below, above, two below, in that exact order) whose trimmed
/// text is longer than 2 characters, and the period is the first year-range
/// match in the window two lines above to three below. Stops after the
/// third title line.
pub fn scan(doc: &Document) -> Vec<ExperienceEntry> {
    let mut entries = Vec::new();

    for (i, line) in doc.lines().iter().enumerate() {
        if !TITLE_RES.iter().any(|re| re.is_match(line)) {
            continue;
        }

        let company = COMPANY_PROBE_OFFSETS
            .iter()
            .find_map(|&offset| {
                let j = i.checked_add_signed(offset)?;
                let candidate = doc.lines().get(j)?.trim();
                (candidate.len() > 2).then(|| candidate.to_string())
            })
            .unwrap_or_default();

        let period = doc
            .window(i, 2, 3)
            .find_map(|j| PERIOD_RE.find(doc.line(j)))
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        entries.push(ExperienceEntry {
            title: line.trim().to_string(),
            company,
            period,
        });
        if entries.len() == MAX_ENTRIES {
            break;
        }
    }

    entries
}
