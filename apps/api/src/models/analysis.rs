use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// Cached match analysis, keyed by (job_id, user_id) so an already-analyzed
/// job does not cost another LLM call when reopened.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub job_id: Uuid,
    pub user_id: Uuid,
    /// Serialized `MatchReport`.
    pub report: Value,
    /// "llm" or "local".
    pub source: String,
    pub created_at: DateTime<Utc>,
}
