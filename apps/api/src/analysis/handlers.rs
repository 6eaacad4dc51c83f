//! Axum route handlers for the Analysis API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::analyzer::{AnalysisSource, AnalyzeInput};
use crate::analysis::local::MatchReport;
use crate::errors::AppError;
use crate::models::analysis::AnalysisRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub job_description: String,
    #[serde(default)]
    pub resume_text: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub company: String,
    /// When both ids are present the result is cached per (job, user).
    pub job_id: Option<Uuid>,
    pub user_id: Option<Uuid>,
    /// Skip the cache and re-run the analysis.
    #[serde(default)]
    pub force: bool,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    pub analysis: MatchReport,
    pub source: AnalysisSource,
    pub cached: bool,
}

/// POST /api/v1/analyze
///
/// Scores a resume against a job description. Tries the LLM backend first
/// and silently degrades to the local keyword scorer, so this endpoint
/// succeeds even with no API key and no network.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }

    let cache_key = match (request.job_id, request.user_id) {
        (Some(job_id), Some(user_id)) => Some((job_id, user_id)),
        _ => None,
    };

    if let Some((job_id, user_id)) = cache_key {
        if !request.force {
            if let Some(row) = fetch_cached(&state, job_id, user_id).await? {
                let report: MatchReport = serde_json::from_value(row.report)
                    .map_err(|e| AppError::Internal(anyhow::anyhow!("Corrupt cached analysis: {e}")))?;
                let source = match row.source.as_str() {
                    "llm" => AnalysisSource::Llm,
                    _ => AnalysisSource::Local,
                };
                return Ok(Json(AnalyzeResponse {
                    analysis: report,
                    source,
                    cached: true,
                }));
            }
        }
    }

    let input = AnalyzeInput {
        job_title: request.job_title,
        company: request.company,
        job_description: request.job_description,
        resume_text: request.resume_text,
    };

    let outcome = state.analyzer.analyze(&input).await?;

    if let Some((job_id, user_id)) = cache_key {
        store_cached(&state, job_id, user_id, &outcome.report, outcome.source).await?;
    }

    Ok(Json(AnalyzeResponse {
        analysis: outcome.report,
        source: outcome.source,
        cached: false,
    }))
}

async fn fetch_cached(
    state: &AppState,
    job_id: Uuid,
    user_id: Uuid,
) -> Result<Option<AnalysisRow>, AppError> {
    let row = sqlx::query_as::<_, AnalysisRow>(
        "SELECT * FROM analyses WHERE job_id = $1 AND user_id = $2",
    )
    .bind(job_id)
    .bind(user_id)
    .fetch_optional(&state.db)
    .await?;
    Ok(row)
}

async fn store_cached(
    state: &AppState,
    job_id: Uuid,
    user_id: Uuid,
    report: &MatchReport,
    source: AnalysisSource,
) -> Result<(), AppError> {
    let report_json = serde_json::to_value(report)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize report: {e}")))?;

    sqlx::query(
        r#"
        INSERT INTO analyses (id, job_id, user_id, report, source)
        VALUES (gen_random_uuid(), $1, $2, $3, $4)
        ON CONFLICT (job_id, user_id)
        DO UPDATE SET report = EXCLUDED.report,
                      source = EXCLUDED.source,
                      created_at = now()
        "#,
    )
    .bind(job_id)
    .bind(user_id)
    .bind(report_json)
    .bind(source.as_str())
    .execute(&state.db)
    .await?;

    Ok(())
}
