//! Dyslexia likelihood screening from handwriting samples
//!
//! This crate sends a handwriting image to a remote text-recognition
//! service, derives a small vector of text-quality metrics from the
//! recognized text, and classifies the sample as low or high dyslexia
//! likelihood with a fixed pre-trained decision tree.
//!
//! # Pipeline
//!
//! 1. **Recognition**: image bytes posted to a chat-completions endpoint,
//!    with bounded retry on transient network failures
//! 2. **Feature extraction**: spelling accuracy, grammatical accuracy,
//!    percentage of corrections, phonetic accuracy
//! 3. **Classification**: fixed decision tree over the feature vector
//!
//! # Example
//!
//! ```no_run
//! use dyslexia_screening::{HandwritingScreener, RecognitionConfig};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let screener = HandwritingScreener::new(RecognitionConfig::new("api-key"))?;
//!     let verdict = screener.predict(Path::new("sample.jpg")).await?;
//!     println!("Verdict: {verdict}");
//!     Ok(())
//! }
//! ```

pub mod classifier;
pub mod client;
pub mod config;
pub mod corrector;
pub mod distance;
pub mod error;
pub mod features;
pub mod screener;

pub use classifier::{DecisionNode, DecisionTree, Verdict};
pub use client::{RecognitionClient, TextRecognizer};
pub use config::RecognitionConfig;
pub use corrector::{ReverseCorrector, TextCorrector};
pub use error::{Result, ScreeningError};
pub use features::{FeatureExtractor, FeatureVector, FEATURE_COUNT};
pub use screener::HandwritingScreener;
