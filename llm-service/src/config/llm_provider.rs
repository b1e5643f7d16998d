/// Represents the provider (backend) used for large language model inference.
///
/// This enum distinguishes between the supported remote backends. Adding more
/// providers later (e.g., Mistral API, a local runtime) is done by extending
/// this enum and adding a matching service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LlmProvider {
    /// OpenAI's chat completions API.
    OpenAi,
    /// Anthropic's messages API.
    Anthropic,
}

impl LlmProvider {
    /// Stable lowercase name used in configuration and health reporting.
    pub fn as_str(self) -> &'static str {
        match self {
            LlmProvider::OpenAi => "openai",
            LlmProvider::Anthropic => "anthropic",
        }
    }
}
