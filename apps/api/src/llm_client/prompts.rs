//! Prompt constants for resume extraction.

/// System prompt for resume extraction. Enforces JSON-only output.
pub const RESUME_PARSE_SYSTEM: &str =
    "You are an expert CV/resume parser extracting structured fields from raw resume text. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Resume extraction prompt template. Replace `{resume_text}` before sending.
pub const RESUME_PARSE_PROMPT_TEMPLATE: &str = r#"Extract the following information from the resume text below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "personalInfo": {
    "fullName": "extracted full name",
    "email": "extracted email",
    "phone": "extracted phone number"
  },
  "education": [
    {
      "degree": "degree name",
      "institution": "university/college name",
      "year": "graduation year"
    }
  ],
  "experience": [
    {
      "title": "job title",
      "company": "company name",
      "period": "start year - end year or Present"
    }
  ],
  "skills": ["skill1", "skill2", "skill3"]
}

Rules:
- Extract up to 3 education entries
- Extract up to 3 work experiences
- Extract up to 15 relevant technical skills
- If information is not found, use empty string ""
- Return ONLY valid JSON, no markdown formatting, no explanations

RESUME TEXT:
{resume_text}"#;
