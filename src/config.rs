//! Configuration for the remote recognition client

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default chat-completions endpoint base
pub const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";

/// Default recognition model
pub const DEFAULT_MODEL: &str = "anthropic/claude-3-haiku";

/// Configuration for the recognition service.
///
/// Credentials and endpoint are always supplied explicitly (or read once
/// from the environment); the client never falls back to built-in secrets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecognitionConfig {
    /// API base URL, e.g. "https://openrouter.ai/api/v1"
    pub base_url: String,

    /// Bearer token for the recognition API
    pub api_key: String,

    /// Model used for text extraction
    pub model: String,

    /// Total attempts per request, transient failures included (default: 3)
    pub max_attempts: u32,

    /// Per-attempt request timeout (default: 60 s)
    pub request_timeout: Duration,
}

impl RecognitionConfig {
    /// Create a configuration with default endpoint, model, and retry policy
    #[must_use]
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            max_attempts: 3,
            request_timeout: Duration::from_secs(60),
        }
    }

    /// Create configuration from environment variables
    ///
    /// Environment variables:
    /// - `OCR_API_KEY`: bearer token (required)
    /// - `OCR_BASE_URL`: API base URL (default: openrouter.ai)
    /// - `OCR_MODEL`: model name (default: "anthropic/claude-3-haiku")
    ///
    /// # Errors
    /// Returns an error if `OCR_API_KEY` is not set.
    pub fn from_env() -> anyhow::Result<Self> {
        use anyhow::Context;

        let api_key = env::var("OCR_API_KEY").context("OCR_API_KEY environment variable not set")?;
        let mut config = Self::new(api_key);

        if let Ok(base_url) = env::var("OCR_BASE_URL") {
            config.base_url = base_url;
        }
        if let Ok(model) = env::var("OCR_MODEL") {
            config.model = model;
        }

        Ok(config)
    }

    /// Backoff before retry number `attempt` (1-based): 2, 4, ... seconds
    #[must_use]
    pub fn backoff_delay(&self, attempt: u32) -> Duration {
        Duration::from_secs(u64::from(attempt) * 2)
    }
}
