//! Skills matcher: lowercase substring containment against the reference
//! list, canonical casing out.

use super::document::Document;
use super::lexicon::SKILLS;

const MAX_SKILLS: usize = 15;

/// Returns every reference skill contained in the document, in reference
/// list order, capped at [`MAX_SKILLS`]. The reference list has no
/// duplicates, so neither does the output.
pub fn scan(doc: &Document) -> Vec<String> {
    let haystack = doc.text().to_lowercase();
    let mut skills = Vec::new();

    for &skill in SKILLS {
        if haystack.contains(&skill.to_lowercase()) {
            skills.push(skill.to_string());
            if skills.len() == MAX_SKILLS {
                break;
            }
        }
    }

    skills
}
