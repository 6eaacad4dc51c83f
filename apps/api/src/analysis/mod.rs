//! Match analysis: LLM-backed scoring with a deterministic local fallback.

pub mod analyzer;
pub mod handlers;
pub mod local;
pub mod prompts;
