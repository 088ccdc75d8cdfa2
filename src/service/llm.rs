//! Shared LLM client and interaction utilities
//!
//! Provides a common interface for OpenAI API interactions used by the
//! assessment service.

use rig::providers::openai;

/// Environment variable for the OpenAI API key
pub const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Result<Self, String> {
        let client = openai::Client::new(api_key);

        Ok(Self { client })
    }

    /// Build a client from `OPENAI_API_KEY`, if the variable is set
    ///
    /// Absence of the key is not fatal here; callers fail at request time
    /// instead so the service can start without credentials.
    pub fn from_env() -> Option<Self> {
        let key = std::env::var(ENV_OPENAI_API_KEY).ok()?;
        match Self::new(&key) {
            Ok(client) => Some(client),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create OpenAI client");
                None
            }
        }
    }

    /// Get a reference to the underlying OpenAI client
    /// Use this to create extractors with custom configuration
    pub fn openai_client(&self) -> &openai::Client {
        &self.client
    }
}
