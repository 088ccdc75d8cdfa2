//! Error types for claim assessment

use thiserror::Error;

use crate::service::llm::ENV_OPENAI_API_KEY;

/// Error type for claim assessment
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AssessmentError {
    /// The provider could not be reached, rejected the call, or timed out
    #[error("assessment service unavailable: {0}")]
    ServiceUnavailable(String),

    /// The provider answered, but the payload does not satisfy the verdict
    /// schema or its documented numeric ranges
    #[error("malformed assessment response: {0}")]
    MalformedResponse(String),

    #[error("OpenAI client not configured (missing {ENV_OPENAI_API_KEY})")]
    NotConfigured,
}

impl AssessmentError {
    /// Whether retrying the call can plausibly succeed
    ///
    /// Credential failures stay broken until the key changes; malformed
    /// payloads and missing configuration are never retried.
    pub fn is_transient(&self) -> bool {
        match self {
            AssessmentError::ServiceUnavailable(message) => {
                let message = message.to_lowercase();
                !(message.contains("401")
                    || message.contains("403")
                    || message.contains("unauthorized")
                    || message.contains("invalid api key"))
            }
            _ => false,
        }
    }
}
