//! Axum route handlers for the Jobs API (board CRUD, stats, export).

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::export::{jobs_to_csv, jobs_to_json};
use crate::jobs::stats::{compute_pipeline_stats, weekly_activity, DayActivity, PipelineStats};
use crate::models::job::{JobRow, JobStatus};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreateJobRequest {
    pub user_id: Uuid,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub url: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateJobRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub url: Option<String>,
    pub salary: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    /// Status moves are how the board's drag-and-drop lands in the API.
    pub status: Option<JobStatus>,
}

#[derive(Debug, Serialize)]
pub struct JobStatsResponse {
    pub pipeline: PipelineStats,
    pub weekly: Vec<DayActivity>,
}

/// GET /api/v1/jobs?user_id=
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<Vec<JobRow>>, AppError> {
    let jobs = fetch_user_jobs(&state, params.user_id).await?;
    Ok(Json(jobs))
}

/// POST /api/v1/jobs
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<(StatusCode, Json<JobRow>), AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }
    if request.company.trim().is_empty() {
        return Err(AppError::Validation("company cannot be empty".to_string()));
    }

    let status = request.status.unwrap_or(JobStatus::Wishlist);

    let job = sqlx::query_as::<_, JobRow>(
        r#"
        INSERT INTO jobs (id, user_id, title, company, location, url, salary, description, notes, status)
        VALUES (gen_random_uuid(), $1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING *
        "#,
    )
    .bind(request.user_id)
    .bind(request.title.trim())
    .bind(request.company.trim())
    .bind(&request.location)
    .bind(&request.url)
    .bind(&request.salary)
    .bind(&request.description)
    .bind(&request.notes)
    .bind(status.as_str())
    .fetch_one(&state.db)
    .await?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<Json<JobRow>, AppError> {
    let job = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;
    Ok(Json(job))
}

/// PATCH /api/v1/jobs/:id
///
/// Partial update: absent fields keep their current values.
pub async fn handle_update_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Json(request): Json<UpdateJobRequest>,
) -> Result<Json<JobRow>, AppError> {
    let job = sqlx::query_as::<_, JobRow>(
        r#"
        UPDATE jobs
        SET title       = COALESCE($2, title),
            company     = COALESCE($3, company),
            location    = COALESCE($4, location),
            url         = COALESCE($5, url),
            salary      = COALESCE($6, salary),
            description = COALESCE($7, description),
            notes       = COALESCE($8, notes),
            status      = COALESCE($9, status),
            updated_at  = now()
        WHERE id = $1
        RETURNING *
        "#,
    )
    .bind(job_id)
    .bind(&request.title)
    .bind(&request.company)
    .bind(&request.location)
    .bind(&request.url)
    .bind(&request.salary)
    .bind(&request.description)
    .bind(&request.notes)
    .bind(request.status.map(|s| s.as_str()))
    .fetch_optional(&state.db)
    .await?
    .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?;

    Ok(Json(job))
}

/// DELETE /api/v1/jobs/:id
pub async fn handle_delete_job(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    let result = sqlx::query("DELETE FROM jobs WHERE id = $1")
        .bind(job_id)
        .execute(&state.db)
        .await?;

    if result.rows_affected() == 0 {
        return Err(AppError::NotFound(format!("Job {job_id} not found")));
    }

    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/jobs/stats?user_id=
pub async fn handle_job_stats(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<JobStatsResponse>, AppError> {
    let jobs = fetch_user_jobs(&state, params.user_id).await?;
    let pipeline = compute_pipeline_stats(&jobs);
    let weekly = weekly_activity(&jobs, chrono::Utc::now());
    Ok(Json(JobStatsResponse { pipeline, weekly }))
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
}

#[derive(Deserialize)]
pub struct ExportQuery {
    pub user_id: Uuid,
    #[serde(default)]
    pub format: ExportFormat,
}

/// GET /api/v1/jobs/export?user_id=&format=csv|json
pub async fn handle_export_jobs(
    State(state): State<AppState>,
    Query(params): Query<ExportQuery>,
) -> Result<(HeaderMap, String), AppError> {
    let jobs = fetch_user_jobs(&state, params.user_id).await?;

    let (body, content_type, filename) = match params.format {
        ExportFormat::Csv => (
            jobs_to_csv(&jobs).map_err(AppError::Internal)?,
            "text/csv; charset=utf-8",
            "jobflow-jobs.csv",
        ),
        ExportFormat::Json => (
            jobs_to_json(&jobs).map_err(AppError::Internal)?,
            "application/json",
            "jobflow-jobs.json",
        ),
    };

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, content_type.parse().expect("static"));
    headers.insert(
        header::CONTENT_DISPOSITION,
        format!("attachment; filename=\"{filename}\"")
            .parse()
            .expect("static"),
    );

    Ok((headers, body))
}

async fn fetch_user_jobs(state: &AppState, user_id: Uuid) -> Result<Vec<JobRow>, AppError> {
    let jobs = sqlx::query_as::<_, JobRow>(
        "SELECT * FROM jobs WHERE user_id = $1 ORDER BY created_at DESC",
    )
    .bind(user_id)
    .fetch_all(&state.db)
    .await?;
    Ok(jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_defaults_to_csv() {
        assert_eq!(ExportFormat::default(), ExportFormat::Csv);
    }

    #[test]
    fn test_export_format_parses_lowercase() {
        let f: ExportFormat = serde_json::from_str("\"json\"").unwrap();
        assert_eq!(f, ExportFormat::Json);
        assert!(serde_json::from_str::<ExportFormat>("\"xml\"").is_err());
    }
}
