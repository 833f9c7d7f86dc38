//! Failures while turning a prompt into advice.

use thiserror::Error;

/// Every variant is recoverable: the generator answers with fallback advice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdviceError {
    #[error("Provider is not configured: {0}")]
    Configuration(String),

    #[error("No JSON object found in model output")]
    Extraction,

    #[error("Model output is not valid advice JSON: {0}")]
    Parse(String),

    #[error("Provider request failed: {0}")]
    Network(String),

    #[error("Provider did not answer within {timeout_secs}s")]
    Timeout { timeout_secs: u64 },
}

impl AdviceError {
    /// Short machine-friendly label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AdviceError::Configuration(_) => "configuration",
            AdviceError::Extraction => "extraction",
            AdviceError::Parse(_) => "parse",
            AdviceError::Network(_) => "network",
            AdviceError::Timeout { .. } => "timeout",
        }
    }
}
