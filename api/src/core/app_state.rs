use pr_reviewer::review::llm::LlmConfig;

/// Shared state for all HTTP handlers.
///
/// All configuration is read here once at startup and handed to the pipeline
/// as explicit values; there is no process-wide client or provider flag.
#[derive(Clone)]
pub struct AppState {
    /// LLM provider selection + per-provider model configs.
    pub llm_config: LlmConfig,
    /// The `AI_PROVIDER` value as configured, echoed by `/health` verbatim.
    /// Backend selection normalizes it separately.
    pub ai_provider: String,
    /// Process-level GitHub token. Reserved: publishing uses the token that
    /// arrives with each request instead.
    pub github_token: Option<String>,
}

impl AppState {
    /// Load shared state from environment variables.
    pub fn from_env() -> Self {
        Self {
            llm_config: LlmConfig::from_env(),
            ai_provider: std::env::var("AI_PROVIDER").unwrap_or_else(|_| "openai".into()),
            github_token: std::env::var("GITHUB_TOKEN").ok(),
        }
    }
}
