//! Application state: prompts, synthetic delays, and the optional completion client.
//!
//! Nothing here is mutated after startup; every request builds its own curriculum.

use tracing::{info, instrument};

use crate::config::{load_app_config_from_env, Prompts, Timing};
use crate::llm::CompletionClient;

#[derive(Clone)]
pub struct AppState {
    pub llm: Option<CompletionClient>,
    pub prompts: Prompts,
    pub timing: Timing,
}

impl AppState {
    /// Build state from env: load config, init the completion client.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        let cfg = load_app_config_from_env().unwrap_or_default();

        let llm = CompletionClient::from_env();
        if let Some(c) = &llm {
            info!(target: "curricula_backend", base_url = %c.base_url, model = %c.model, "Remote generation enabled.");
        } else {
            info!(target: "curricula_backend", "Remote generation disabled (no LLM_API_KEY). Mock generation only.");
        }
        info!(
            target: "curricula_backend",
            mock_delay_ms = cfg.timing.mock_delay_ms,
            audit_delay_ms = cfg.timing.audit_delay_ms,
            "Synthetic delays configured"
        );

        Self::from_parts(llm, cfg.prompts, cfg.timing)
    }

    pub fn from_parts(llm: Option<CompletionClient>, prompts: Prompts, timing: Timing) -> Self {
        Self { llm, prompts, timing }
    }
}
