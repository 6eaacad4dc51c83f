//! Axum route handlers for the Resume API.
//!
//! One current resume per user: uploads and saves upsert the same row, reads
//! return it or 404.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use bytes::Bytes;
use serde::Deserialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resumes::extract::{extract_text, validate_resume_text};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct UserIdQuery {
    pub user_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SaveResumeRequest {
    pub user_id: Uuid,
    /// Display name; defaults to "resume.txt" like a pasted-in resume.
    pub name: Option<String>,
    pub content: String,
}

/// GET /api/v1/resume?user_id=
pub async fn handle_get_resume(
    State(state): State<AppState>,
    Query(params): Query<UserIdQuery>,
) -> Result<Json<ResumeRow>, AppError> {
    let resume = sqlx::query_as::<_, ResumeRow>("SELECT * FROM resumes WHERE user_id = $1")
        .bind(params.user_id)
        .fetch_optional(&state.db)
        .await?
        .ok_or_else(|| AppError::NotFound("No resume on file".to_string()))?;
    Ok(Json(resume))
}

/// POST /api/v1/resume
///
/// Multipart upload: a `user_id` text field and a `file` field. The file's
/// text is extracted server-side and only the text is stored.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRow>, AppError> {
    let mut user_id: Option<Uuid> = None;
    let mut file: Option<(String, Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("user_id") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Invalid user_id field: {e}")))?;
                user_id = Some(
                    value
                        .trim()
                        .parse()
                        .map_err(|_| AppError::Validation("user_id must be a UUID".to_string()))?,
                );
            }
            Some("file") => {
                let filename = field
                    .file_name()
                    .unwrap_or("resume.txt")
                    .to_string();
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read file: {e}")))?;
                file = Some((filename, data));
            }
            _ => {} // ignore unknown fields
        }
    }

    let user_id =
        user_id.ok_or_else(|| AppError::Validation("Missing user_id field".to_string()))?;
    let (filename, data) =
        file.ok_or_else(|| AppError::Validation("Missing file field".to_string()))?;

    let text = extract_text(&filename, &data)?;
    info!(
        "Extracted {} chars of resume text from '{}'",
        text.chars().count(),
        filename
    );

    let resume = upsert_resume(&state, user_id, &filename, &text).await?;
    Ok(Json(resume))
}

/// PUT /api/v1/resume
///
/// Saves raw resume text directly (the paste-in path).
pub async fn handle_save_resume(
    State(state): State<AppState>,
    Json(request): Json<SaveResumeRequest>,
) -> Result<Json<ResumeRow>, AppError> {
    let text = validate_resume_text(&request.content)?;
    let name = request.name.as_deref().unwrap_or("resume.txt");
    let resume = upsert_resume(&state, request.user_id, name, &text).await?;
    Ok(Json(resume))
}

async fn upsert_resume(
    state: &AppState,
    user_id: Uuid,
    name: &str,
    content: &str,
) -> Result<ResumeRow, AppError> {
    let resume = sqlx::query_as::<_, ResumeRow>(
        r#"
        INSERT INTO resumes (id, user_id, name, content)
        VALUES (gen_random_uuid(), $1, $2, $3)
        ON CONFLICT (user_id)
        DO UPDATE SET name = EXCLUDED.name,
                      content = EXCLUDED.content,
                      updated_at = now()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(content)
    .fetch_one(&state.db)
    .await?;

    Ok(resume)
}
