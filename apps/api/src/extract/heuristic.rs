//! The deterministic fallback extractor.
//!
//! Runs entirely locally: no network access, no credential. Each scanner is
//! a pure function over the same document snapshot, so the whole suite is
//! idempotent by construction.

use async_trait::async_trait;

use super::document::Document;
use super::orchestrator::ResumeExtractor;
use super::{contact, education, experience, skills};
use crate::models::resume::{ParsedResume, PersonalInfo};

/// Runs the full heuristic suite over `text`.
///
/// The education and experience lists are returned exactly as scanned
/// (possibly empty); placeholder substitution is the orchestrator's job.
pub fn extract_resume(text: &str) -> ParsedResume {
    let doc = Document::new(text);

    ParsedResume {
        personal_info: PersonalInfo {
            full_name: contact::extract_name(&doc),
            email: contact::extract_email(&doc),
            phone: contact::extract_phone(&doc),
        },
        education: education::scan(&doc),
        experience: experience::scan(&doc),
        skills: skills::scan(&doc),
    }
}

/// Trait adapter for [`extract_resume`]. Unlike the remote extractor this
/// one cannot fail: any input, including an empty document, yields a
/// well-typed result.
pub struct HeuristicExtractor;

#[async_trait]
impl ResumeExtractor for HeuristicExtractor {
    async fn extract(&self, text: &str) -> Option<ParsedResume> {
        Some(extract_resume(text))
    }
}
