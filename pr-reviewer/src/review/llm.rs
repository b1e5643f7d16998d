//! Backend selection for review generation.
//!
//! A single enum-dispatch client per run: the provider is chosen once at
//! construction from [`LlmConfig`] and never re-branched per call. When the
//! configured provider cannot be constructed (missing key, bad endpoint) the
//! backend degrades to [`ReviewBackend::Fallback`] instead of failing the
//! request.

use llm_service::{AnthropicService, LlmError, LlmModelConfig, LlmProvider, OpenAiService};
use tracing::warn;

/// Model used when no `OPENAI_MODEL` override is present.
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-5";

/// Model used when no `ANTHROPIC_MODEL` override is present.
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";

/// Which provider the orchestrator should prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmKind {
    OpenAi,
    Anthropic,
}

impl LlmKind {
    /// Parses the `AI_PROVIDER` configuration value; unknown values map to
    /// the default provider (OpenAI).
    pub fn from_flag(flag: &str) -> Self {
        match flag.trim().to_lowercase().as_str() {
            "anthropic" => LlmKind::Anthropic,
            _ => LlmKind::OpenAi,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LlmKind::OpenAi => "openai",
            LlmKind::Anthropic => "anthropic",
        }
    }
}

/// Explicit review-LLM configuration handed to the orchestrator.
///
/// Carries per-provider model configs so availability can be decided without
/// ambient global state.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Preferred provider.
    pub kind: LlmKind,
    /// OpenAI model config, when an API key is configured.
    pub openai: Option<LlmModelConfig>,
    /// Anthropic model config, when an API key is configured.
    pub anthropic: Option<LlmModelConfig>,
}

impl LlmConfig {
    /// Builds the config from environment variables.
    ///
    /// `AI_PROVIDER` selects the preferred backend ("openai" by default);
    /// `OPENAI_API_KEY` / `ANTHROPIC_API_KEY` gate availability.
    pub fn from_env() -> Self {
        let kind = LlmKind::from_flag(&std::env::var("AI_PROVIDER").unwrap_or_default());

        let openai = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|key| LlmModelConfig {
                provider: LlmProvider::OpenAi,
                model: std::env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| DEFAULT_OPENAI_MODEL.into()),
                endpoint: std::env::var("OPENAI_URL")
                    .unwrap_or_else(|_| "https://api.openai.com".into()),
                api_key: Some(key),
                max_tokens: None,
                temperature: None,
                timeout_secs: None,
            });

        let anthropic = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .map(|key| LlmModelConfig {
                provider: LlmProvider::Anthropic,
                model: std::env::var("ANTHROPIC_MODEL")
                    .unwrap_or_else(|_| DEFAULT_ANTHROPIC_MODEL.into()),
                endpoint: std::env::var("ANTHROPIC_URL")
                    .unwrap_or_else(|_| "https://api.anthropic.com".into()),
                api_key: Some(key),
                max_tokens: Some(4000),
                temperature: Some(0.1),
                timeout_secs: None,
            });

        LlmConfig {
            kind,
            openai,
            anthropic,
        }
    }
}

/// Remote provider client behind [`ReviewBackend::Provider`].
#[derive(Debug, Clone)]
pub enum ProviderClient {
    OpenAi(OpenAiService),
    Anthropic(AnthropicService),
}

impl ProviderClient {
    /// Generates review text for `prompt` with the selected provider.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        match self {
            ProviderClient::OpenAi(svc) => svc.generate(prompt).await,
            ProviderClient::Anthropic(svc) => svc.generate(prompt).await,
        }
    }
}

/// Review text generator, selected once per run.
///
/// Only [`ReviewBackend::Provider`] can generate text; the `Fallback` variant
/// carries no client, so the orchestrator must substitute static review text
/// rather than call into it.
#[derive(Debug, Clone)]
pub enum ReviewBackend {
    Provider(ProviderClient),
    /// No usable provider configured.
    Fallback,
}

impl ReviewBackend {
    /// Selects and constructs the backend for `cfg`.
    ///
    /// The preferred provider wins when its config is present and its service
    /// constructs cleanly; anything else degrades to `Fallback` with a log.
    pub fn from_config(cfg: &LlmConfig) -> Self {
        let attempt = match cfg.kind {
            LlmKind::OpenAi => cfg
                .openai
                .clone()
                .map(|c| OpenAiService::new(c).map(ProviderClient::OpenAi)),
            LlmKind::Anthropic => cfg
                .anthropic
                .clone()
                .map(|c| AnthropicService::new(c).map(ProviderClient::Anthropic)),
        };

        match attempt {
            Some(Ok(client)) => ReviewBackend::Provider(client),
            Some(Err(err)) => {
                warn!(provider = cfg.kind.as_str(), %err, "provider unavailable, using fallback");
                ReviewBackend::Fallback
            }
            None => {
                warn!(
                    provider = cfg.kind.as_str(),
                    "provider not configured, using fallback"
                );
                ReviewBackend::Fallback
            }
        }
    }

    /// True when no remote provider backs this client.
    pub fn is_fallback(&self) -> bool {
        matches!(self, ReviewBackend::Fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_flag_defaults_to_openai() {
        assert_eq!(LlmKind::from_flag(""), LlmKind::OpenAi);
        assert_eq!(LlmKind::from_flag("gemini"), LlmKind::OpenAi);
        assert_eq!(LlmKind::from_flag("Anthropic"), LlmKind::Anthropic);
    }

    #[test]
    fn missing_provider_config_degrades_to_fallback() {
        let cfg = LlmConfig {
            kind: LlmKind::Anthropic,
            openai: None,
            anthropic: None,
        };
        assert!(ReviewBackend::from_config(&cfg).is_fallback());
    }

    #[test]
    fn configured_provider_constructs_a_client() {
        let cfg = LlmConfig {
            kind: LlmKind::OpenAi,
            openai: Some(LlmModelConfig {
                provider: LlmProvider::OpenAi,
                model: DEFAULT_OPENAI_MODEL.into(),
                endpoint: "https://api.openai.com".into(),
                api_key: Some("test-key".into()),
                max_tokens: None,
                temperature: None,
                timeout_secs: None,
            }),
            anthropic: None,
        };
        assert!(matches!(
            ReviewBackend::from_config(&cfg),
            ReviewBackend::Provider(ProviderClient::OpenAi(_))
        ));
    }
}
