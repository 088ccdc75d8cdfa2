//! Claim fraud assessment service using LLM
//!
//! Builds the analysis prompt, requests a schema-constrained verdict from
//! the provider, and validates it before anything reaches the simulator.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::providers::openai;

use crate::model::ClaimInput;
use crate::model::assessment::AssessmentResult;
use crate::model::config::AssessmentConfig;
use crate::model::verdicts::ExtractedVerdict;
use crate::service::assessment::converters::convert_verdict;
use crate::service::assessment::prompts::{ANALYSIS_SYSTEM_PROMPT, build_claim_prompt};
use crate::service::assessment::validation::validate_extracted_verdict;
use crate::service::llm::{ENV_OPENAI_API_KEY, LlmClient};

/// Environment variable for the assessment model (defaults to GPT-4O-mini if not set)
const ENV_ASSESSMENT_MODEL: &str = "ASSESSMENT_MODEL";

/// Default model for claim assessment
const DEFAULT_MODEL: &str = openai::GPT_4O_MINI;

pub mod converters;
pub mod error;
pub mod prompts;
pub mod validation;

pub use error::AssessmentError;

/// Capability interface for claim assessment
///
/// The simulator depends on this seam, so a deterministic stub can stand
/// in for the live provider in tests.
#[async_trait]
pub trait ClaimAssessor: Send + Sync {
    /// Assess a claim snapshot, returning a typed verdict or a typed failure
    async fn assess(&self, input: &ClaimInput) -> Result<AssessmentResult, AssessmentError>;
}

/// Service assessing claims through the OpenAI API
pub struct ClaimAssessmentService {
    llm_client: Option<LlmClient>,
    model: String,
    config: AssessmentConfig,
}

impl ClaimAssessmentService {
    /// Create a new claim assessment service
    ///
    /// The API key is read once at construction; a missing key leaves the
    /// service running and every assessment failing with `NotConfigured`.
    pub fn new(config: AssessmentConfig) -> Self {
        let llm_client = LlmClient::from_env();
        if llm_client.is_none() {
            tracing::warn!(
                "OpenAI API key not found ({ENV_OPENAI_API_KEY}), claim assessment disabled"
            );
        }

        let model =
            std::env::var(ENV_ASSESSMENT_MODEL).unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        tracing::info!(
            model = %model,
            timeout_secs = config.timeout_secs,
            max_retries = config.max_retries,
            "Claim assessment service initialized"
        );

        Self {
            llm_client,
            model,
            config,
        }
    }

    /// Check if the service has provider credentials
    pub fn is_available(&self) -> bool {
        self.llm_client.is_some()
    }

    /// One provider round trip under the configured timeout
    async fn request_verdict(
        &self,
        client: &LlmClient,
        prompt: &str,
    ) -> Result<ExtractedVerdict, AssessmentError> {
        let start_time = std::time::Instant::now();

        let extractor = client
            .openai_client()
            .extractor::<ExtractedVerdict>(&self.model)
            .preamble(ANALYSIS_SYSTEM_PROMPT)
            .build();

        let timeout = std::time::Duration::from_secs(self.config.timeout_secs);

        match tokio::time::timeout(timeout, extractor.extract(prompt)).await {
            Err(_) => {
                tracing::error!(
                    model = %self.model,
                    timeout_secs = self.config.timeout_secs,
                    "OpenAI API call for claim assessment timed out"
                );
                Err(AssessmentError::ServiceUnavailable(format!(
                    "timed out after {}s",
                    self.config.timeout_secs
                )))
            }
            Ok(Err(e)) => {
                let elapsed = start_time.elapsed();
                tracing::error!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    error = %e,
                    "OpenAI API call for claim assessment failed"
                );
                Err(classify_extraction_error(e))
            }
            Ok(Ok(verdict)) => {
                let elapsed = start_time.elapsed();
                tracing::info!(
                    model = %self.model,
                    elapsed_ms = elapsed.as_millis(),
                    "OpenAI API call for claim assessment completed successfully"
                );
                Ok(verdict)
            }
        }
    }
}

/// Split provider failures from payloads that did not yield a verdict
fn classify_extraction_error(e: rig::extractor::ExtractionError) -> AssessmentError {
    use rig::extractor::ExtractionError;

    match e {
        ExtractionError::CompletionError(inner) => {
            AssessmentError::ServiceUnavailable(inner.to_string())
        }
        other => AssessmentError::MalformedResponse(other.to_string()),
    }
}

#[async_trait]
impl ClaimAssessor for ClaimAssessmentService {
    async fn assess(&self, input: &ClaimInput) -> Result<AssessmentResult, AssessmentError> {
        let client = self
            .llm_client
            .as_ref()
            .ok_or(AssessmentError::NotConfigured)?;

        let prompt = build_claim_prompt(input);

        tracing::debug!(
            farmer = %input.farmer_name,
            crop = %input.crop_type,
            model = %self.model,
            prompt_length = prompt.len(),
            "Initiating OpenAI API call for claim assessment"
        );

        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match self.request_verdict(client, &prompt).await {
                Ok(extracted) => {
                    if attempt > 0 {
                        tracing::info!(attempt = attempt, "Claim assessment succeeded after retry");
                    }

                    let validation = validate_extracted_verdict(&extracted);
                    if !validation.is_valid {
                        tracing::error!(
                            errors = ?validation.errors,
                            "Verdict failed range validation"
                        );
                        return Err(AssessmentError::MalformedResponse(format!(
                            "validation failed: {}",
                            validation.errors.join("; ")
                        )));
                    }

                    if !validation.warnings.is_empty() {
                        tracing::warn!(
                            warnings = ?validation.warnings,
                            "Verdict produced quality warnings"
                        );
                    }

                    return Ok(convert_verdict(extracted));
                }
                Err(e) if e.is_transient() && attempt < self.config.max_retries => {
                    let delay_ms = self.config.initial_retry_delay_ms * (1 << attempt);
                    tracing::warn!(
                        attempt = attempt + 1,
                        max_retries = self.config.max_retries,
                        delay_ms = delay_ms,
                        error = %e,
                        "Claim assessment failed, retrying"
                    );
                    tokio::time::sleep(std::time::Duration::from_millis(delay_ms)).await;
                    last_error = Some(e);
                }
                Err(e) => return Err(e),
            }
        }

        Err(last_error.unwrap_or_else(|| {
            AssessmentError::ServiceUnavailable("failed after all retries".to_string())
        }))
    }
}
