use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use tracing::info;

use crate::decode::{self, DocumentFormat};
use crate::errors::AppError;
use crate::models::resume::{ParsedResume, Provenance};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub data: ParsedResume,
    pub provenance: Provenance,
}

/// POST /api/v1/parse
///
/// Accepts a multipart upload with a `file` field, decodes it by filename
/// extension, and returns the parsed resume with its provenance tag.
pub async fn handle_parse(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let mut upload: Option<(String, bytes::Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
            upload = Some((filename, data));
            break;
        }
    }

    let (filename, data) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;
    if filename.is_empty() {
        return Err(AppError::Validation("No file selected".to_string()));
    }

    let format = DocumentFormat::from_filename(&filename)?;
    let text = decode::decode(format, &data)?;

    let outcome = state.parser.parse(&text).await;
    info!(
        "Parsed '{}' ({} bytes) via {}",
        filename,
        data.len(),
        outcome.provenance
    );

    Ok(Json(ParseResponse {
        data: outcome.resume,
        provenance: outcome.provenance,
    }))
}

/// GET /api/v1/config
///
/// Reports whether a remote extractor credential is configured, so clients
/// can surface the expected extraction quality.
pub async fn handle_config(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "llm_configured": state.config.anthropic_api_key.is_some(),
        "llm_available": state.parser.llm_configured(),
    }))
}
