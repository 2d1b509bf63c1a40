//! Contact extraction: email, phone, and full name.

use std::sync::LazyLock;

use regex::Regex;

use super::document::Document;
use super::lexicon::PHONE_PATTERNS;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_RES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| PHONE_PATTERNS.iter().map(|p| Regex::new(p).unwrap()).collect());

/// A leading courtesy title, optionally followed by a period.
static NAME_TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^(Mr|Mrs|Ms|Dr|Prof)\b\.?\s*").unwrap());

/// Returns the leftmost email-shaped token in the document, or `""`.
pub fn extract_email(doc: &Document) -> String {
    EMAIL_RE
        .find(doc.text())
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// Returns the leftmost match of the first phone pattern that matches
/// anywhere in the document, or `""`. Patterns are tried in the fixed
/// priority order of [`PHONE_PATTERNS`]; matches are never compared across
/// patterns.
pub fn extract_phone(doc: &Document) -> String {
    for re in PHONE_RES.iter() {
        if let Some(m) = re.find(doc.text()) {
            return m.as_str().to_string();
        }
    }
    String::new()
}

/// Scans lines top to bottom for the candidate's name.
///
/// Skips blank lines, lines of trimmed length <= 2, and lines containing
/// `@` (contact lines often precede the name). The first surviving line is
/// stripped of a leading courtesy title and accepted only if it splits into
/// 2 to 4 whitespace-separated words; otherwise the scan moves on. Single
/// pass, first fit, no backtracking.
pub fn extract_name(doc: &Document) -> String {
    for line in doc.lines() {
        let line = line.trim();
        if line.len() <= 2 || line.contains('@') {
            continue;
        }
        let name = NAME_TITLE_RE.replace(line, "");
        let words = name.split_whitespace().count();
        if (2..=4).contains(&words) {
            return name.trim().to_string();
        }
    }
    String::new()
}
