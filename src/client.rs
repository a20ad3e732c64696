//! Remote text-recognition client
//!
//! Posts the handwriting image to a chat-completions endpoint and returns the
//! extracted text. Transport failures are retried with exponential backoff;
//! well-formed error responses from the service are terminal.

use crate::config::RecognitionConfig;
use crate::error::{Result, ScreeningError};
use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::future::Future;
use tracing::{debug, warn};

/// Extracts text from a handwriting image.
///
/// The pipeline depends on this seam rather than the concrete HTTP client so
/// recognition can be stubbed in tests or swapped for a local engine.
#[async_trait]
pub trait TextRecognizer: Send + Sync {
    /// Recognize the text in `image`, named `filename` for the service
    async fn extract_text(&self, image: &[u8], filename: &str) -> Result<String>;
}

/// Chat-completions request payload
#[derive(Debug, Clone, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
}

/// Chat message, optionally carrying file attachments
#[derive(Debug, Clone, Serialize)]
struct Message {
    role: String,
    content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    files: Option<Vec<FileAttachment>>,
}

/// Image attachment with one-character-per-byte encoded data
#[derive(Debug, Clone, Serialize)]
struct FileAttachment {
    name: String,
    #[serde(rename = "type")]
    mime_type: String,
    data: String,
}

/// Chat-completions response
#[derive(Debug, Clone, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Error body returned by the service on non-success status
#[derive(Debug, Clone, Deserialize)]
struct ErrorResponse {
    error: Option<serde_json::Value>,
}

/// HTTP client for the remote recognition service
#[derive(Debug, Clone)]
pub struct RecognitionClient {
    config: RecognitionConfig,
    http_client: reqwest::Client,
}

impl RecognitionClient {
    /// Create a client for the given configuration
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: RecognitionConfig) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            config,
            http_client,
        })
    }

    /// Create a client configured from environment variables
    ///
    /// # Errors
    /// Returns an error if `OCR_API_KEY` is not set or client creation fails.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(RecognitionConfig::from_env()?)
    }

    /// Extract text from a handwriting image, retrying transient failures.
    ///
    /// Up to `max_attempts` tries with `2 * attempt` seconds backoff between
    /// them. Error responses from the service are not retried.
    ///
    /// # Errors
    /// Returns `RecognitionFailed` on an error response or once retries are
    /// exhausted.
    pub async fn extract_text(&self, image: &[u8], filename: &str) -> Result<String> {
        retry_transient(
            self.config.max_attempts,
            |attempt| self.config.backoff_delay(attempt),
            || self.request_text(image, filename),
        )
        .await
    }

    /// Single recognition attempt, no retry
    async fn request_text(&self, image: &[u8], filename: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: "You are an OCR processing assistant.".to_string(),
                    files: None,
                },
                Message {
                    role: "user".to_string(),
                    content: "Please extract text from this image.".to_string(),
                    files: Some(vec![FileAttachment {
                        name: filename.to_string(),
                        mime_type: "image/jpeg".to_string(),
                        data: encode_image_bytes(image),
                    }]),
                },
            ],
        };

        debug!(
            filename,
            image_bytes = image.len(),
            model = %self.config.model,
            "sending recognition request"
        );

        let response = self
            .http_client
            .post(format!("{}/chat/completions", self.config.base_url))
            .header("Authorization", format!("Bearer {}", self.config.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| ScreeningError::TransientNetwork(e.to_string()))?;

        let status = response.status();
        let response_text = response
            .text()
            .await
            .map_err(|e| ScreeningError::TransientNetwork(e.to_string()))?;

        if !status.is_success() {
            // Well-formed error responses are terminal, not retried
            let detail = serde_json::from_str::<ErrorResponse>(&response_text)
                .ok()
                .and_then(|body| body.error)
                .map_or(response_text, |e| e.to_string());
            return Err(ScreeningError::RecognitionFailed(format!(
                "recognition API returned {status}: {detail}"
            )));
        }

        let chat_response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            ScreeningError::RecognitionFailed(format!("malformed recognition response: {e}"))
        })?;

        chat_response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .ok_or_else(|| {
                ScreeningError::RecognitionFailed(
                    "recognition response carried no text content".to_string(),
                )
            })
    }
}

#[async_trait]
impl<T: TextRecognizer + ?Sized> TextRecognizer for std::sync::Arc<T> {
    async fn extract_text(&self, image: &[u8], filename: &str) -> Result<String> {
        (**self).extract_text(image, filename).await
    }
}

#[async_trait]
impl TextRecognizer for RecognitionClient {
    async fn extract_text(&self, image: &[u8], filename: &str) -> Result<String> {
        RecognitionClient::extract_text(self, image, filename).await
    }
}

/// Encode image bytes as a one-character-per-byte string, the attachment
/// format the recognition endpoint expects (each byte maps to U+0000..U+00FF).
fn encode_image_bytes(image: &[u8]) -> String {
    image.iter().map(|&b| char::from(b)).collect()
}

/// Run `op` up to `max_attempts` times, sleeping `backoff(attempt)` between
/// transient failures. Terminal errors pass through untouched; transient
/// exhaustion escalates to `RecognitionFailed`.
async fn retry_transient<T, F, Fut, B>(max_attempts: u32, backoff: B, mut op: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
    B: Fn(u32) -> std::time::Duration,
{
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(ScreeningError::TransientNetwork(source)) => {
                if attempt >= max_attempts {
                    return Err(ScreeningError::RecognitionFailed(format!(
                        "recognition failed after {max_attempts} attempts: {source}"
                    )));
                }
                warn!(attempt, "transient recognition failure, backing off: {source}");
                tokio::time::sleep(backoff(attempt)).await;
                attempt += 1;
            }
            Err(other) => return Err(other),
        }
    }
}
