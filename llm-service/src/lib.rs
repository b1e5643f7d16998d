//! Shared LLM provider clients for the review pipeline.
//!
//! Exposes thin, non-streaming text-generation services per provider:
//! - [`services::open_ai_service::OpenAiService`] — OpenAI chat completions
//! - [`services::anthropic_service::AnthropicService`] — Anthropic messages
//!
//! Both take a complete [`config::llm_model_config::LlmModelConfig`], validate
//! it at construction, and expose a single `generate(prompt) -> String`
//! operation. Errors are normalized through [`error_handler::LlmError`].

pub mod config;
pub mod error_handler;
pub mod services;

pub use config::llm_model_config::LlmModelConfig;
pub use config::llm_provider::LlmProvider;
pub use error_handler::{LlmError, ProviderError, ProviderErrorKind};
pub use services::anthropic_service::AnthropicService;
pub use services::open_ai_service::OpenAiService;
