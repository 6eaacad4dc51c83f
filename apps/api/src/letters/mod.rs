//! Cover-letter generation: a thin LLM proxy with no local fallback.

pub mod prompts;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::letters::prompts::{build_cover_letter_prompt, CoverLetterContext, COVER_LETTER_SYSTEM};
use crate::llm_client::LlmError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CoverLetterRequest {
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /api/v1/cover-letter
///
/// Generates a tailored cover letter. Unlike analysis there is no local
/// fallback: without a configured API key this returns an LLM error.
pub async fn handle_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let llm = state
        .llm
        .as_ref()
        .ok_or_else(|| AppError::Llm("ANTHROPIC_API_KEY is not configured".to_string()))?;

    let prompt = build_cover_letter_prompt(&CoverLetterContext {
        job_title: &request.job_title,
        company: &request.company,
        location: &request.location,
        job_description: &request.job_description,
        resume_text: &request.resume_text,
    });

    let response = llm
        .call(&prompt, COVER_LETTER_SYSTEM)
        .await
        .map_err(|e| AppError::Llm(format!("Cover letter generation failed: {e}")))?;

    let cover_letter = response
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Llm(LlmError::EmptyContent.to_string()))?
        .to_string();

    Ok(Json(CoverLetterResponse { cover_letter }))
}
