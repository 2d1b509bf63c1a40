//! LLM-backed extractor.
//!
//! Any failure (transport, non-JSON output, missing required sections)
//! collapses to `None` so the orchestrator can fall back; nothing here is
//! ever surfaced to the caller as an error.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, warn};

use super::orchestrator::ResumeExtractor;
use crate::llm_client::prompts::{RESUME_PARSE_PROMPT_TEMPLATE, RESUME_PARSE_SYSTEM};
use crate::llm_client::LlmClient;
use crate::models::resume::ParsedResume;

pub struct RemoteExtractor {
    llm: LlmClient,
}

impl RemoteExtractor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ResumeExtractor for RemoteExtractor {
    async fn extract(&self, text: &str) -> Option<ParsedResume> {
        let prompt = RESUME_PARSE_PROMPT_TEMPLATE.replace("{resume_text}", text);

        let value: Value = match self.llm.call_json(&prompt, RESUME_PARSE_SYSTEM).await {
            Ok(value) => value,
            Err(e) => {
                warn!("LLM extraction failed: {e}");
                return None;
            }
        };

        if let Some(resume) = validate_remote_record(&value) {
            debug!("LLM extraction succeeded");
            Some(resume)
        } else {
            warn!("LLM response did not match the expected resume shape");
            None
        }
    }
}

/// Accepts a remote record only if it carries the `personalInfo` and
/// `education` sections; partial fields inside them are fine and collapse
/// to empty strings on deserialization.
fn validate_remote_record(value: &Value) -> Option<ParsedResume> {
    if value.get("personalInfo").is_none() || value.get("education").is_none() {
        return None;
    }
    serde_json::from_value(value.clone()).ok()
}
