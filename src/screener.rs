//! Handwriting screening pipeline
//!
//! Image → text recognition → feature extraction → decision tree → verdict.
//! Recognition is the only suspending stage; everything downstream is pure
//! and stateless, so a screener can serve concurrent callers freely.

use crate::classifier::{DecisionTree, Verdict};
use crate::client::{RecognitionClient, TextRecognizer};
use crate::config::RecognitionConfig;
use crate::error::{Result, ScreeningError};
use crate::features::FeatureExtractor;
use std::path::Path;
use tracing::{debug, info};

/// End-to-end dyslexia screening over handwriting images
pub struct HandwritingScreener<R: TextRecognizer> {
    recognizer: R,
    extractor: FeatureExtractor,
    tree: DecisionTree,
}

impl HandwritingScreener<RecognitionClient> {
    /// Create a screener backed by the remote recognition service
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(config: RecognitionConfig) -> anyhow::Result<Self> {
        Ok(Self::with_recognizer(RecognitionClient::new(config)?))
    }

    /// Create a screener configured from environment variables
    ///
    /// # Errors
    /// Returns an error if `OCR_API_KEY` is not set or client creation fails.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self::with_recognizer(RecognitionClient::from_env()?))
    }
}

impl<R: TextRecognizer> HandwritingScreener<R> {
    /// Create a screener over an arbitrary recognizer (stubs, local engines)
    #[must_use]
    pub fn with_recognizer(recognizer: R) -> Self {
        Self {
            recognizer,
            extractor: FeatureExtractor::default(),
            tree: DecisionTree::pretrained(),
        }
    }

    /// Screen a handwriting sample stored on disk
    ///
    /// # Errors
    /// Returns `RecognitionFailed` if recognition fails terminally,
    /// `InvalidInput` if the recognized text is degenerate, and `Io` if the
    /// image cannot be read. No verdict is produced on any failure.
    pub async fn predict(&self, image_path: &Path) -> Result<Verdict> {
        let image = tokio::fs::read(image_path).await?;
        let filename = image_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("sample.jpg");
        self.predict_bytes(&image, filename).await
    }

    /// Screen a handwriting sample held in memory
    ///
    /// # Errors
    /// Same contract as [`predict`](Self::predict), minus the IO stage.
    pub async fn predict_bytes(&self, image: &[u8], filename: &str) -> Result<Verdict> {
        let text = self.recognizer.extract_text(image, filename).await?;
        debug!(text_chars = text.chars().count(), "recognition complete");

        if text.split_whitespace().count() == 0 {
            return Err(ScreeningError::InvalidInput(
                "recognition produced no words to score".to_string(),
            ));
        }

        let features = self.extractor.extract(&text)?;
        debug!(?features, "features extracted");

        let verdict = self.tree.classify(&features)?;
        info!(%verdict, "screening complete");
        Ok(verdict)
    }
}
