//! Orchestration: remote-first extraction with deterministic fallback.
//!
//! The remote/heuristic duality is a capability seam: both paths implement
//! [`ResumeExtractor`], and `ResumeParser` depends only on the trait. A
//! remote extractor may fail (returns `None`); the heuristic one never does.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::contact;
use super::document::Document;
use super::heuristic::HeuristicExtractor;
use crate::models::resume::{EducationEntry, ExperienceEntry, ParsedResume, Provenance};

/// A single-operation extraction capability: raw text in, structured record
/// out, or `None` when this backend cannot produce one.
#[async_trait]
pub trait ResumeExtractor: Send + Sync {
    async fn extract(&self, text: &str) -> Option<ParsedResume>;
}

/// A parse result plus the provenance tag callers use to audit trust level.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub resume: ParsedResume,
    pub provenance: Provenance,
}

/// Decides which extraction path runs and how gaps in remote output are
/// patched. Remote failure is always recovered locally and never surfaced.
pub struct ResumeParser {
    remote: Option<Arc<dyn ResumeExtractor>>,
    fallback: Arc<dyn ResumeExtractor>,
}

impl ResumeParser {
    pub fn new(remote: Option<Arc<dyn ResumeExtractor>>) -> Self {
        Self {
            remote,
            fallback: Arc::new(HeuristicExtractor),
        }
    }

    pub fn llm_configured(&self) -> bool {
        self.remote.is_some()
    }

    pub async fn parse(&self, text: &str) -> ParseOutcome {
        if let Some(remote) = &self.remote {
            match remote.extract(text).await {
                Some(resume) => {
                    return ParseOutcome {
                        resume: backfill_remote_gaps(resume, text),
                        provenance: Provenance::Llm,
                    };
                }
                None => warn!("Remote extraction failed; falling back to heuristic suite"),
            }
        }

        let resume = self.fallback.extract(text).await.unwrap_or_default();
        ParseOutcome {
            resume: substitute_placeholders(resume),
            provenance: Provenance::Regex,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Merge policy
// ────────────────────────────────────────────────────────────────────────────

/// Patches holes in a remote result.
///
/// The policy is asymmetric: empty personal fields are filled individually
/// from the heuristic contact extractors, while empty education/experience
/// lists get the all-empty placeholder, never heuristic scanner output.
/// Skills are never backfilled.
fn backfill_remote_gaps(mut resume: ParsedResume, text: &str) -> ParsedResume {
    let doc = Document::new(text);

    if resume.personal_info.email.is_empty() {
        resume.personal_info.email = contact::extract_email(&doc);
    }
    if resume.personal_info.phone.is_empty() {
        resume.personal_info.phone = contact::extract_phone(&doc);
    }
    if resume.personal_info.full_name.is_empty() {
        resume.personal_info.full_name = contact::extract_name(&doc);
    }

    substitute_placeholders(resume)
}

/// Guarantees 1 to 3 entries in each list: an all-empty entry stands in
/// when nothing was found.
fn substitute_placeholders(mut resume: ParsedResume) -> ParsedResume {
    if resume.education.is_empty() {
        resume.education.push(EducationEntry::default());
    }
    if resume.experience.is_empty() {
        resume.experience.push(ExperienceEntry::default());
    }
    resume
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::PersonalInfo;

    const SAMPLE: &str = "Jane Doe\njane.doe@mail.com\n555-111-2222\nBachelor of Science in Computer Science\nState University\n2018\nSoftware Engineer\nAcme Corp\n2019 - 2022";

    /// A remote backend that is configured but always fails.
    struct FailingRemote;

    #[async_trait]
    impl ResumeExtractor for FailingRemote {
        async fn extract(&self, _text: &str) -> Option<ParsedResume> {
            None
        }
    }

    /// A remote backend that returns a fixed record.
    struct FixedRemote(ParsedResume);

    #[async_trait]
    impl ResumeExtractor for FixedRemote {
        async fn extract(&self, _text: &str) -> Option<ParsedResume> {
            Some(self.0.clone())
        }
    }

    fn remote(resume: ParsedResume) -> Option<Arc<dyn ResumeExtractor>> {
        Some(Arc::new(FixedRemote(resume)))
    }

    #[tokio::test]
    async fn test_no_remote_runs_heuristics_end_to_end() {
        let outcome = ResumeParser::new(None).parse(SAMPLE).await;

        assert_eq!(outcome.provenance, Provenance::Regex);
        let resume = &outcome.resume;
        assert_eq!(resume.personal_info.full_name, "Jane Doe");
        assert_eq!(resume.personal_info.email, "jane.doe@mail.com");
        assert_eq!(resume.personal_info.phone, "555-111-2222");
        assert_eq!(resume.education[0].degree, "Bachelor of Science in Computer Science");
        assert_eq!(resume.education[0].institution, "State University");
        assert_eq!(resume.education[0].year, "2018");
        assert_eq!(resume.experience[0].title, "Software Engineer");
        assert_eq!(resume.experience[0].company, "Acme Corp");
        assert_eq!(resume.experience[0].period, "2019 - 2022");
        assert!(resume.skills.is_empty());
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back() {
        let parser = ResumeParser::new(Some(Arc::new(FailingRemote)));
        let outcome = parser.parse(SAMPLE).await;

        assert_eq!(outcome.provenance, Provenance::Regex);
        assert_eq!(outcome.resume.personal_info.full_name, "Jane Doe");
    }

    #[tokio::test]
    async fn test_heuristic_path_substitutes_placeholders() {
        let outcome = ResumeParser::new(None).parse("").await;

        assert_eq!(outcome.resume.education, vec![EducationEntry::default()]);
        assert_eq!(outcome.resume.experience, vec![ExperienceEntry::default()]);
        assert!(outcome.resume.skills.is_empty());
    }

    #[tokio::test]
    async fn test_remote_success_is_authoritative() {
        let parser = ResumeParser::new(remote(ParsedResume {
            personal_info: PersonalInfo {
                full_name: "Janet Doer".to_string(),
                email: "janet@other.com".to_string(),
                phone: "111-222-3333".to_string(),
            },
            education: vec![EducationEntry {
                degree: "MSc".to_string(),
                institution: "Tech Institute".to_string(),
                year: "2020".to_string(),
            }],
            experience: vec![ExperienceEntry {
                title: "CTO".to_string(),
                company: "Startup".to_string(),
                period: "2021 - Present".to_string(),
            }],
            skills: vec!["Rust".to_string()],
        }));
        let outcome = parser.parse(SAMPLE).await;

        assert_eq!(outcome.provenance, Provenance::Llm);
        // Nothing from the heuristics leaks into a populated remote result.
        assert_eq!(outcome.resume.personal_info.full_name, "Janet Doer");
        assert_eq!(outcome.resume.education[0].degree, "MSc");
        assert_eq!(outcome.resume.skills, vec!["Rust"]);
    }

    #[tokio::test]
    async fn test_remote_empty_contact_fields_are_backfilled() {
        let parser = ResumeParser::new(remote(ParsedResume {
            personal_info: PersonalInfo {
                full_name: String::new(),
                email: String::new(),
                phone: "999-888-7777".to_string(),
            },
            education: vec![EducationEntry::default()],
            experience: vec![ExperienceEntry::default()],
            skills: vec![],
        }));
        let outcome = parser.parse(SAMPLE).await;

        assert_eq!(outcome.provenance, Provenance::Llm);
        assert_eq!(outcome.resume.personal_info.full_name, "Jane Doe");
        assert_eq!(outcome.resume.personal_info.email, "jane.doe@mail.com");
        // A populated remote field is left alone.
        assert_eq!(outcome.resume.personal_info.phone, "999-888-7777");
    }

    #[tokio::test]
    async fn test_remote_empty_lists_get_placeholders_not_heuristics() {
        // The document would give the heuristics real education and
        // experience entries; the remote path must not use them.
        let parser = ResumeParser::new(remote(ParsedResume {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "jane.doe@mail.com".to_string(),
                phone: "555-111-2222".to_string(),
            },
            education: vec![],
            experience: vec![],
            skills: vec![],
        }));
        let outcome = parser.parse(SAMPLE).await;

        assert_eq!(outcome.resume.education, vec![EducationEntry::default()]);
        assert_eq!(outcome.resume.experience, vec![ExperienceEntry::default()]);
    }

    #[tokio::test]
    async fn test_remote_empty_skills_never_backfilled() {
        // The document mentions reference skills, but skills are never
        // patched from the heuristics.
        let text = format!("{SAMPLE}\nSkills: Python, Rust, Docker");
        let parser = ResumeParser::new(remote(ParsedResume {
            personal_info: PersonalInfo {
                full_name: "Jane Doe".to_string(),
                email: "j@d.com".to_string(),
                phone: "1".to_string(),
            },
            education: vec![EducationEntry::default()],
            experience: vec![ExperienceEntry::default()],
            skills: vec![],
        }));
        let outcome = parser.parse(&text).await;

        assert!(outcome.resume.skills.is_empty());
    }
}
