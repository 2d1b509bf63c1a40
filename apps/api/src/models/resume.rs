use serde::{Deserialize, Serialize};

/// Contact block of a parsed resume.
/// Empty string means "not found", never a missing key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    #[serde(rename = "fullName", default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
}

/// One education entry: a detected degree line plus nearby supporting lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub year: String,
}

/// One work experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub period: String,
}

/// Structured extraction result for a single document.
///
/// Constructed once per parse request and never mutated afterwards. Every
/// field is always present: after orchestration the education and experience
/// lists carry 1 to 3 entries (an all-empty placeholder entry stands in when
/// nothing was found) and skills carry 0 to 15 names.
///
/// Deserialization is lenient on purpose: LLM responses may omit fields, and
/// every omission collapses to the same empty-string/empty-list shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    #[serde(rename = "personalInfo", default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub education: Vec<EducationEntry>,
    #[serde(default)]
    pub experience: Vec<ExperienceEntry>,
    #[serde(default)]
    pub skills: Vec<String>,
}

/// Which extraction path produced a result, so callers can audit trust level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Llm,
    Regex,
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Provenance::Llm => write!(f, "llm"),
            Provenance::Regex => write!(f, "regex"),
        }
    }
}
