use std::sync::Arc;

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::app_state::AppState;

/// Health snapshot: which provider is configured and which keys are present.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub ai_provider: String,
    pub anthropic_available: bool,
    pub openai_available: bool,
}

/// Health check endpoint. Echoes the configured provider string as-is.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        ai_provider: state.ai_provider.clone(),
        anthropic_available: state.llm_config.anthropic.is_some(),
        openai_available: state.llm_config.openai.is_some(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pr_reviewer::{ReviewerLlmConfig, ReviewerLlmKind};

    #[tokio::test]
    async fn health_echoes_configured_provider_verbatim() {
        let state = Arc::new(AppState {
            llm_config: ReviewerLlmConfig {
                kind: ReviewerLlmKind::OpenAi,
                openai: None,
                anthropic: None,
            },
            ai_provider: "gemini".to_string(),
            github_token: None,
        });

        let Json(body) = health(State(state)).await;

        assert_eq!(body.status, "healthy");
        assert_eq!(body.ai_provider, "gemini");
        assert!(!body.openai_available);
        assert!(!body.anthropic_available);
    }
}
