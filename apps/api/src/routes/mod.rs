pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis;
use crate::jobs;
use crate::letters;
use crate::resumes;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Jobs API (board CRUD + analytics + export)
        .route(
            "/api/v1/jobs",
            get(jobs::handlers::handle_list_jobs).post(jobs::handlers::handle_create_job),
        )
        .route("/api/v1/jobs/stats", get(jobs::handlers::handle_job_stats))
        .route(
            "/api/v1/jobs/export",
            get(jobs::handlers::handle_export_jobs),
        )
        .route(
            "/api/v1/jobs/:id",
            get(jobs::handlers::handle_get_job)
                .patch(jobs::handlers::handle_update_job)
                .delete(jobs::handlers::handle_delete_job),
        )
        // Resume API
        .route(
            "/api/v1/resume",
            get(resumes::handlers::handle_get_resume)
                .post(resumes::handlers::handle_upload_resume)
                .put(resumes::handlers::handle_save_resume),
        )
        // Analysis API (LLM with local fallback)
        .route("/api/v1/analyze", post(analysis::handlers::handle_analyze))
        .route(
            "/api/v1/cover-letter",
            post(letters::handle_cover_letter),
        )
        .with_state(state)
}
