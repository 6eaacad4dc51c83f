use std::sync::Arc;

use sqlx::PgPool;

use crate::analysis::analyzer::JobAnalyzer;
use crate::config::Config;
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Present only when ANTHROPIC_API_KEY is configured. Cover letters need it;
    /// analysis degrades to the local scorer without it.
    pub llm: Option<LlmClient>,
    /// Pluggable analyzer. Default: FallbackAnalyzer (LLM first, local scorer on failure).
    pub analyzer: Arc<dyn JobAnalyzer>,
    pub config: Config,
}
