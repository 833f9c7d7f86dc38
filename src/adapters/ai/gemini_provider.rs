//! Gemini Provider - Implementation of AIProvider for Google's Gemini API.
//!
//! Uses the non-streaming `generateContent` endpoint. The key is sent in the
//! `x-goog-api-key` header so it never appears in URLs or logs.
//!
//! # Configuration
//!
//! ```ignore
//! let config = GeminiConfig::new(Some(api_key))
//!     .with_model("gemini-1.5-flash")
//!     .with_timeout(Duration::from_secs(20));
//!
//! let provider = GeminiProvider::new(config)?;
//! ```

use async_trait::async_trait;
use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::ports::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Environment variable name reported when no key is configured.
pub const GEMINI_KEY_NAME: &str = "GEMINI_API_KEY";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key; `None` makes every call fail with `MissingCredential`.
    api_key: Option<Secret<String>>,
    /// Model to use (e.g., "gemini-1.5-flash").
    pub model: String,
    /// Base URL for the API.
    pub base_url: String,
    /// Per-attempt HTTP timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl GeminiConfig {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key
                .filter(|key| !key.trim().is_empty())
                .map(Secret::new),
            model: "gemini-1.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            timeout: Duration::from_secs(20),
            max_retries: 1,
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn api_key(&self) -> Result<&str, AIError> {
        self.api_key
            .as_ref()
            .map(|key| key.expose_secret().as_str())
            .ok_or_else(|| AIError::missing_credential(GEMINI_KEY_NAME))
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    pub fn new(config: GeminiConfig) -> Result<Self, AIError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| AIError::InvalidRequest(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn generate_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        )
    }

    fn to_gemini_request(request: &CompletionRequest) -> GeminiRequest {
        let generation_config = if request.temperature.is_some()
            || request.seed.is_some()
            || request.max_tokens.is_some()
        {
            Some(GeminiGenerationConfig {
                temperature: request.temperature,
                seed: request.seed,
                max_output_tokens: request.max_tokens,
            })
        } else {
            None
        };

        GeminiRequest {
            contents: vec![GeminiContent {
                role: "user".to_string(),
                parts: vec![GeminiPart {
                    text: request.prompt.clone(),
                }],
            }],
            generation_config,
        }
    }

    async fn send_request(&self, request: &CompletionRequest) -> Result<Response, AIError> {
        let api_key = self.config.api_key()?;

        self.client
            .post(self.generate_url())
            .header("x-goog-api-key", api_key)
            .header("Content-Type", "application/json")
            .json(&Self::to_gemini_request(request))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AIError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    AIError::network(format!("Connection failed: {}", e))
                } else {
                    AIError::network(e.to_string())
                }
            })
    }

    async fn handle_response_status(response: Response) -> Result<Response, AIError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let error_body = response.text().await.unwrap_or_default();
        Err(Self::status_error(status.as_u16(), &error_body))
    }

    fn status_error(status: u16, error_body: &str) -> AIError {
        let message = serde_json::from_str::<GeminiErrorEnvelope>(error_body)
            .ok()
            .and_then(|envelope| envelope.error.message)
            .unwrap_or_else(|| error_body.to_string());

        match status {
            401 | 403 => AIError::AuthenticationFailed,
            400 if message.contains("API key not valid") => AIError::AuthenticationFailed,
            400 => AIError::InvalidRequest(message),
            429 => AIError::rate_limited(30),
            500..=599 => AIError::unavailable(format!("Server error {}: {}", status, message)),
            _ => AIError::network(format!("Unexpected status {}: {}", status, message)),
        }
    }

    async fn parse_response(&self, response: Response) -> Result<CompletionResponse, AIError> {
        let response = Self::handle_response_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| AIError::network(format!("Failed to read response: {}", e)))?;

        parse_generate_response(&body, &self.config.model)
    }
}

/// Turns a `generateContent` body into a completion.
fn parse_generate_response(body: &str, model: &str) -> Result<CompletionResponse, AIError> {
    let parsed: GeminiResponse = serde_json::from_str(body)
        .map_err(|e| AIError::parse(format!("Failed to parse response: {}", e)))?;

    if let Some(error) = parsed.error {
        return Err(AIError::unavailable(
            error.message.unwrap_or_else(|| "unknown error".to_string()),
        ));
    }

    let candidate = match parsed.candidates.and_then(|c| c.into_iter().next()) {
        Some(candidate) => candidate,
        None => {
            return Err(match parsed.prompt_feedback.and_then(|f| f.block_reason) {
                Some(reason) => AIError::content_filtered(reason),
                None => AIError::parse("response has no candidates"),
            })
        }
    };

    let content = candidate
        .content
        .map(|c| {
            c.parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("STOP") | None => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") => FinishReason::ContentFilter,
        Some(_) => FinishReason::Other,
    };

    if content.is_empty() && finish_reason == FinishReason::ContentFilter {
        return Err(AIError::content_filtered(
            candidate.finish_reason.unwrap_or_default(),
        ));
    }

    let usage = parsed
        .usage_metadata
        .map(|u| {
            TokenUsage::new(
                u.prompt_token_count.unwrap_or(0),
                u.candidates_token_count.unwrap_or(0),
            )
        })
        .unwrap_or_default();

    Ok(CompletionResponse {
        content,
        usage,
        model: parsed.model_version.unwrap_or_else(|| model.to_string()),
        finish_reason,
    })
}

#[async_trait]
impl AIProvider for GeminiProvider {
    async fn complete(&self, request: CompletionRequest) -> Result<CompletionResponse, AIError> {
        let mut last_error = AIError::network("No attempts made");
        let mut retry_count = 0;

        while retry_count <= self.config.max_retries {
            let attempt = match self.send_request(&request).await {
                Ok(response) => self.parse_response(response).await,
                Err(err) => Err(err),
            };

            match attempt {
                Ok(completion) => {
                    debug!(
                        trace_id = %request.trace_id,
                        model = %completion.model,
                        total_tokens = completion.usage.total_tokens,
                        "Gemini completion received"
                    );
                    return Ok(completion);
                }
                Err(err) => {
                    if !err.is_retryable() || retry_count >= self.config.max_retries {
                        return Err(err);
                    }
                    warn!(
                        trace_id = %request.trace_id,
                        attempt = retry_count + 1,
                        error = %err,
                        "Gemini request failed, retrying"
                    );
                    last_error = err;
                }
            }

            // Exponential backoff: 1s, 2s, 4s, ...
            sleep(Duration::from_secs(1 << retry_count)).await;
            retry_count += 1;
        }

        Err(last_error)
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("gemini", &self.config.model)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Gemini API Types
// ════════════════════════════════════════════════════════════════════════════

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig", skip_serializing_if = "Option::is_none")]
    generation_config: Option<GeminiGenerationConfig>,
}

#[derive(Debug, Serialize)]
struct GeminiContent {
    role: String,
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
    prompt_feedback: Option<GeminiPromptFeedback>,
    usage_metadata: Option<GeminiUsage>,
    model_version: Option<String>,
    error: Option<GeminiErrorBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiCandidate {
    content: Option<GeminiContentResponse>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GeminiContentResponse {
    #[serde(default)]
    parts: Vec<GeminiPartResponse>,
}

#[derive(Debug, Deserialize)]
struct GeminiPartResponse {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiPromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GeminiUsage {
    prompt_token_count: Option<u32>,
    candidates_token_count: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorEnvelope {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder_works() {
        let config = GeminiConfig::new(Some("test-key".into()))
            .with_model("gemini-1.5-pro")
            .with_base_url("http://localhost:9999")
            .with_timeout(Duration::from_secs(5))
            .with_max_retries(0);

        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.base_url, "http://localhost:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_retries, 0);
        assert_eq!(config.api_key().unwrap(), "test-key");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let config = GeminiConfig::new(Some("  ".into()));
        assert!(!config.has_api_key());
        assert!(matches!(config.api_key(), Err(AIError::MissingCredential(_))));
    }

    #[tokio::test]
    async fn missing_key_fails_without_network() {
        let provider = GeminiProvider::new(GeminiConfig::new(None)).unwrap();
        let result = provider
            .complete(CompletionRequest::new("hi", "trace"))
            .await;
        assert!(matches!(result, Err(AIError::MissingCredential(name)) if name == GEMINI_KEY_NAME));
    }

    #[test]
    fn url_includes_model() {
        let provider = GeminiProvider::new(
            GeminiConfig::new(Some("k".into())).with_base_url("https://example.test/"),
        )
        .unwrap();
        assert_eq!(
            provider.generate_url(),
            "https://example.test/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[test]
    fn request_forwards_seed_and_temperature() {
        let request = CompletionRequest::new("prompt text", "t")
            .with_temperature(0.9)
            .with_seed(Some(123));
        let json = serde_json::to_value(GeminiProvider::to_gemini_request(&request)).unwrap();

        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "prompt text");
        assert_eq!(json["generationConfig"]["seed"], 123);
        assert!(json["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn request_without_sampling_omits_generation_config() {
        let json = serde_json::to_value(GeminiProvider::to_gemini_request(
            &CompletionRequest::new("p", "t"),
        ))
        .unwrap();
        assert!(json.get("generationConfig").is_none());
    }

    #[test]
    fn parses_candidate_text_and_usage() {
        let body = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "{\"physical\":"}, {"text": "\"a\"}"}]},
                "finishReason": "STOP"
            }],
            "usageMetadata": {"promptTokenCount": 100, "candidatesTokenCount": 20},
            "modelVersion": "gemini-1.5-flash-002"
        }"#;
        let response = parse_generate_response(body, "gemini-1.5-flash").unwrap();

        assert_eq!(response.content, "{\"physical\":\"a\"}");
        assert_eq!(response.usage.total_tokens, 120);
        assert_eq!(response.model, "gemini-1.5-flash-002");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn blocked_prompt_is_content_filtered() {
        let body = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        assert!(matches!(
            parse_generate_response(body, "m"),
            Err(AIError::ContentFiltered { reason }) if reason == "SAFETY"
        ));
    }

    #[test]
    fn garbage_body_is_parse_error() {
        assert!(matches!(
            parse_generate_response("<html>", "m"),
            Err(AIError::Parse(_))
        ));
    }

    #[test]
    fn status_mapping() {
        assert!(matches!(
            GeminiProvider::status_error(403, ""),
            AIError::AuthenticationFailed
        ));
        assert!(matches!(
            GeminiProvider::status_error(
                400,
                r#"{"error":{"message":"API key not valid. Please pass a valid API key."}}"#
            ),
            AIError::AuthenticationFailed
        ));
        assert!(matches!(
            GeminiProvider::status_error(429, ""),
            AIError::RateLimited { .. }
        ));
        assert!(matches!(
            GeminiProvider::status_error(503, "overloaded"),
            AIError::Unavailable { .. }
        ));
        assert!(matches!(
            GeminiProvider::status_error(400, r#"{"error":{"message":"bad field"}}"#),
            AIError::InvalidRequest(msg) if msg == "bad field"
        ));
    }
}
