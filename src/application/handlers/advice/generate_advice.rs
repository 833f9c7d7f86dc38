//! GenerateAdvice - Turns items, an interaction and the time of day into advice.
//!
//! Never fails from the caller's point of view: any provider, timeout or
//! parsing problem is logged and answered with fallback advice.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::domain::advice::{
    build_prompt, extract_advice, pick_fallback, Advice, AdviceError, AdviceSource,
};
use crate::domain::checkin::InteractionPayload;
use crate::domain::foundation::TimeOfDay;
use crate::ports::{AIError, AIProvider, ChoiceSource, CompletionRequest};

impl From<AIError> for AdviceError {
    fn from(err: AIError) -> Self {
        match err {
            AIError::MissingCredential(_) | AIError::AuthenticationFailed => {
                AdviceError::Configuration(err.to_string())
            }
            AIError::Timeout { timeout_secs } => AdviceError::Timeout {
                timeout_secs: timeout_secs as u64,
            },
            other => AdviceError::Network(other.to_string()),
        }
    }
}

/// Command to generate advice.
#[derive(Debug, Clone)]
pub struct GenerateAdviceCommand {
    pub items: Vec<String>,
    pub interaction: InteractionPayload,
    pub time_of_day: TimeOfDay,
    pub seed: Option<u32>,
}

/// Advice plus where it came from.
#[derive(Debug, Clone)]
pub struct GenerateAdviceResult {
    pub advice: Advice,
    pub source: AdviceSource,
    /// Why the model path was abandoned, when it was.
    pub failure: Option<AdviceError>,
}

/// Tuning for the provider call.
#[derive(Debug, Clone)]
pub struct AdviceGeneratorConfig {
    /// Upper bound on the whole provider call, retries included.
    pub timeout: Duration,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl Default for AdviceGeneratorConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(20),
            temperature: Some(0.9),
            max_tokens: Some(512),
        }
    }
}

/// Handler for advice generation.
pub struct GenerateAdviceHandler {
    provider: Arc<dyn AIProvider>,
    choices: Arc<dyn ChoiceSource>,
    config: AdviceGeneratorConfig,
}

impl GenerateAdviceHandler {
    pub fn new(
        provider: Arc<dyn AIProvider>,
        choices: Arc<dyn ChoiceSource>,
        config: AdviceGeneratorConfig,
    ) -> Self {
        Self {
            provider,
            choices,
            config,
        }
    }

    /// Generates advice, substituting fallback advice on any failure.
    pub async fn handle(&self, cmd: GenerateAdviceCommand) -> GenerateAdviceResult {
        match self.try_generate(&cmd).await {
            Ok(advice) => GenerateAdviceResult {
                advice,
                source: AdviceSource::Model,
                failure: None,
            },
            Err(err) => {
                warn!(kind = err.kind(), error = %err, "Advice generation failed, using fallback");
                GenerateAdviceResult {
                    advice: self.fallback(),
                    source: AdviceSource::Fallback,
                    failure: Some(err),
                }
            }
        }
    }

    /// The model path on its own, without fallback.
    pub async fn try_generate(&self, cmd: &GenerateAdviceCommand) -> Result<Advice, AdviceError> {
        let prompt = build_prompt(&cmd.items, &cmd.interaction, cmd.time_of_day);
        let trace_id = Uuid::new_v4().to_string();

        let mut request = CompletionRequest::new(prompt, trace_id.clone()).with_seed(cmd.seed);
        if let Some(temperature) = self.config.temperature {
            request = request.with_temperature(temperature);
        }
        if let Some(max_tokens) = self.config.max_tokens {
            request = request.with_max_tokens(max_tokens);
        }

        let provider = self.provider.provider_info();
        debug!(
            trace_id = %trace_id,
            provider = %provider.name,
            model = %provider.model,
            seed = ?cmd.seed,
            "Requesting advice"
        );

        let response = tokio::time::timeout(self.config.timeout, self.provider.complete(request))
            .await
            .map_err(|_| AdviceError::Timeout {
                timeout_secs: self.config.timeout.as_secs(),
            })??;

        let advice = extract_advice(&response.content)?;
        info!(
            trace_id = %trace_id,
            total_tokens = response.usage.total_tokens,
            "Advice generated"
        );
        Ok(advice)
    }

    /// One entry of the canned pool.
    pub fn fallback(&self) -> Advice {
        pick_fallback(|len| self.choices.pick(len))
    }
}
