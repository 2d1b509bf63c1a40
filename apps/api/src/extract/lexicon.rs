//! Ordered reference data consumed by the scanners.
//!
//! Order is load-bearing everywhere in this module: pattern lists are tried
//! front to back and the first success wins, cue lists fix the tie-break
//! order, and the skills output follows this list rather than the document.

/// Lowercase cue words that mark a line as a candidate education entry.
pub const DEGREE_CUES: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "b.s",
    "m.s",
    "b.a",
    "m.a",
    "degree",
    "diploma",
    "university",
    "college",
    "institute",
];

/// Lowercase words that mark a nearby line as the institution name.
pub const INSTITUTION_WORDS: &[&str] = &["university", "college", "institute"];

/// Phone patterns in priority order: generic international, North-American
/// parenthesized, plain dashed triplet. The first pattern that matches
/// anywhere in the text wins; later patterns are not consulted.
pub const PHONE_PATTERNS: &[&str] = &[
    r"\+?\d{1,3}[-.\s]?\(?\d{1,4}\)?[-.\s]?\d{1,4}[-.\s]?\d{1,9}",
    r"\(\d{3}\)\s*\d{3}-\d{4}",
    r"\d{3}-\d{3}-\d{4}",
];

/// Job-title patterns in priority order; the first to match a line claims it.
pub const TITLE_PATTERNS: &[&str] = &[
    r"(?i)\b(Senior|Junior|Lead|Chief)?\s*(Software|Data|Web|Mobile|Full[- ]?Stack)?\s*(Engineer|Developer|Architect|Analyst|Manager|Director|Designer)\b",
    r"(?i)\b(Project Manager|Product Manager|Team Lead|CEO|CTO|CFO|VP)\b",
];

/// Line offsets probed for a company name relative to a title line,
/// in probe order: the line below, then above, then two below.
pub const COMPANY_PROBE_OFFSETS: &[isize] = &[1, -1, 2];

/// Reference skill list, canonical casing. Matching is by lowercase
/// substring containment over the whole document; output order follows
/// this list, not order of appearance.
pub const SKILLS: &[&str] = &[
    "Python",
    "Java",
    "JavaScript",
    "TypeScript",
    "C++",
    "C#",
    "Ruby",
    "PHP",
    "Go",
    "Rust",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "Spring",
    "Express",
    "SQL",
    "MongoDB",
    "PostgreSQL",
    "MySQL",
    "Redis",
    "Docker",
    "Kubernetes",
    "AWS",
    "Azure",
    "GCP",
    "Git",
    "CI/CD",
    "Agile",
    "Scrum",
    "REST",
    "GraphQL",
    "TensorFlow",
    "PyTorch",
    "Machine Learning",
    "Data Science",
    "DevOps",
];
