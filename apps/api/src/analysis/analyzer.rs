//! Job Analyzer — pluggable, trait-based backend for match analysis.
//!
//! Default: `FallbackAnalyzer`, which tries the LLM and degrades to the
//! local keyword scorer on any LLM failure. Without an API key it is built
//! local-only. `AppState` holds an `Arc<dyn JobAnalyzer>`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::analysis::local::{local_analyze, MatchReport};
use crate::analysis::prompts::{build_analyze_prompt, ANALYZE_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::LlmClient;

/// Inputs to a match analysis. Title and company only feed the LLM prompt;
/// the local scorer works from the two free-text fields.
#[derive(Debug, Clone)]
pub struct AnalyzeInput {
    pub job_title: String,
    pub company: String,
    pub job_description: String,
    pub resume_text: String,
}

/// Which backend produced a report. Surfaced to clients so the UI can label
/// a local result as an estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisSource {
    Llm,
    Local,
}

impl AnalysisSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisSource::Llm => "llm",
            AnalysisSource::Local => "local",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: MatchReport,
    pub source: AnalysisSource,
}

/// The analyzer trait. Implement this to swap backends without touching
/// the endpoint, handler, or caller code.
#[async_trait]
pub trait JobAnalyzer: Send + Sync {
    async fn analyze(&self, input: &AnalyzeInput) -> Result<AnalysisOutcome, AppError>;
}

/// Semantic analyzer via Claude. Fails when the API is unreachable or the
/// model returns something that does not parse as a `MatchReport`.
pub struct LlmAnalyzer(pub LlmClient);

#[async_trait]
impl JobAnalyzer for LlmAnalyzer {
    async fn analyze(&self, input: &AnalyzeInput) -> Result<AnalysisOutcome, AppError> {
        let prompt = build_analyze_prompt(input);
        let report = self
            .0
            .call_json::<MatchReport>(&prompt, ANALYZE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("Match analysis failed: {e}")))?;
        Ok(AnalysisOutcome {
            report,
            source: AnalysisSource::Llm,
        })
    }
}

/// Pure-Rust keyword analyzer. Fast, deterministic, never fails.
pub struct LocalAnalyzer;

#[async_trait]
impl JobAnalyzer for LocalAnalyzer {
    async fn analyze(&self, input: &AnalyzeInput) -> Result<AnalysisOutcome, AppError> {
        Ok(AnalysisOutcome {
            report: local_analyze(&input.job_description, &input.resume_text),
            source: AnalysisSource::Local,
        })
    }
}

/// LLM-first analyzer with local degradation. This is what the service
/// actually runs: the keyword scorer guarantees every analyze request gets
/// an answer even when the hosted model is down.
pub struct FallbackAnalyzer {
    llm: Option<LlmAnalyzer>,
    local: LocalAnalyzer,
}

impl FallbackAnalyzer {
    pub fn new(llm: Option<LlmClient>) -> Self {
        Self {
            llm: llm.map(LlmAnalyzer),
            local: LocalAnalyzer,
        }
    }
}

#[async_trait]
impl JobAnalyzer for FallbackAnalyzer {
    async fn analyze(&self, input: &AnalyzeInput) -> Result<AnalysisOutcome, AppError> {
        if let Some(llm) = &self.llm {
            match llm.analyze(input).await {
                Ok(outcome) => return Ok(outcome),
                Err(e) => {
                    warn!("LLM analysis failed, falling back to local scorer: {e}");
                }
            }
        }
        self.local.analyze(input).await
    }
}
