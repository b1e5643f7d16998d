//! Anthropic service for review-text generation.
//!
//! Minimal, non-streaming client around the Anthropic messages API:
//! - POST {endpoint}/v1/messages
//!
//! Authentication uses the `x-api-key` header plus a pinned
//! `anthropic-version`. Constructor validation mirrors the OpenAI service
//! (provider kind, key presence, http(s) endpoint).

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{LlmError, ProviderError, ProviderErrorKind, make_snippet},
};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Thin client for the Anthropic messages API.
#[derive(Debug, Clone)]
pub struct AnthropicService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_messages: String,
}

impl AnthropicService {
    /// Creates a new [`AnthropicService`] from the given config.
    ///
    /// # Errors
    /// - [`LlmError::Provider`] with `InvalidProvider` if `cfg.provider` is not Anthropic
    /// - [`LlmError::Provider`] with `MissingApiKey` if `cfg.api_key` is `None`
    /// - [`LlmError::Provider`] with `InvalidEndpoint` if `cfg.endpoint` is invalid
    /// - [`LlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, LlmError> {
        if cfg.provider != LlmProvider::Anthropic {
            return Err(ProviderError::new(
                LlmProvider::Anthropic,
                ProviderErrorKind::InvalidProvider,
            )
            .into());
        }

        let api_key = cfg.api_key.clone().ok_or_else(|| {
            ProviderError::new(LlmProvider::Anthropic, ProviderErrorKind::MissingApiKey)
        })?;

        let endpoint = cfg.endpoint.trim();
        if endpoint.is_empty()
            || !(endpoint.starts_with("http://") || endpoint.starts_with("https://"))
        {
            return Err(ProviderError::new(
                LlmProvider::Anthropic,
                ProviderErrorKind::InvalidEndpoint(cfg.endpoint.clone()),
            )
            .into());
        }

        let timeout = cfg
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or_else(|| Duration::from_secs(60));

        let mut headers = header::HeaderMap::new();
        headers.insert(
            "x-api-key",
            header::HeaderValue::from_str(&api_key).map_err(|e| {
                ProviderError::new(
                    LlmProvider::Anthropic,
                    ProviderErrorKind::Decode(format!("invalid API key header: {e}")),
                )
            })?,
        );
        headers.insert(
            "anthropic-version",
            header::HeaderValue::from_static(ANTHROPIC_VERSION),
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        let url_messages = format!("{}/v1/messages", endpoint.trim_end_matches('/'));

        info!(
            provider = ?cfg.provider,
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            "AnthropicService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_messages,
        })
    }

    /// Runs a single non-streaming message completion and returns plain text.
    ///
    /// Multiple text blocks in the response are concatenated; non-text blocks
    /// are ignored.
    ///
    /// # Errors
    /// - [`LlmError::HttpTransport`] on network failure
    /// - `ProviderErrorKind::HttpStatus` on a non-2xx response
    /// - `ProviderErrorKind::Decode` when the payload carries no text blocks
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        #[derive(Serialize)]
        struct Message<'a> {
            role: &'a str,
            content: &'a str,
        }
        #[derive(Serialize)]
        struct MessagesRequest<'a> {
            model: &'a str,
            max_tokens: u32,
            #[serde(skip_serializing_if = "Option::is_none")]
            temperature: Option<f32>,
            messages: Vec<Message<'a>>,
        }
        #[derive(Deserialize)]
        struct ContentBlock {
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            text: Option<String>,
        }
        #[derive(Deserialize)]
        struct MessagesResponse {
            content: Vec<ContentBlock>,
        }

        let t0 = Instant::now();
        debug!(model = %self.cfg.model, url = %self.url_messages, "anthropic.generate");

        let resp = self
            .client
            .post(&self.url_messages)
            .json(&MessagesRequest {
                model: &self.cfg.model,
                max_tokens: self.cfg.max_tokens.unwrap_or(4000),
                temperature: self.cfg.temperature,
                messages: vec![Message {
                    role: "user",
                    content: prompt,
                }],
            })
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::new(
                LlmProvider::Anthropic,
                ProviderErrorKind::HttpStatus {
                    status,
                    snippet: make_snippet(&body),
                },
            )
            .into());
        }

        let body: MessagesResponse = resp.json().await?;
        let mut text = String::new();
        for block in body.content {
            if block.kind == "text" {
                if let Some(t) = block.text {
                    text.push_str(&t);
                }
            }
        }
        if text.is_empty() {
            return Err(ProviderError::new(
                LlmProvider::Anthropic,
                ProviderErrorKind::Decode("response carried no text blocks".into()),
            )
            .into());
        }

        debug!(
            latency_ms = t0.elapsed().as_millis() as u64,
            "anthropic.generate done"
        );
        Ok(text)
    }
}
