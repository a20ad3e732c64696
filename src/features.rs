//! Feature extraction from recognized handwriting text
//!
//! Derives the 4-element feature vector consumed by the decision tree. All
//! metrics are pure functions of the input text and fully deterministic.

use crate::corrector::{ReverseCorrector, TextCorrector};
use crate::distance::levenshtein;
use crate::error::{Result, ScreeningError};
use serde::{Deserialize, Serialize};

/// Number of features the classifier consumes
pub const FEATURE_COUNT: usize = 4;

/// Ordered feature vector: [spelling accuracy, grammatical accuracy,
/// percentage of corrections, phonetic accuracy]. Produced once per text
/// sample and immutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    /// Build a feature vector from a slice, rejecting malformed lengths
    ///
    /// # Errors
    /// Returns `InvalidInput` if the slice does not hold exactly 4 values.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        let array: [f64; FEATURE_COUNT] = values.try_into().map_err(|_| {
            ScreeningError::InvalidInput(format!(
                "feature vector must hold exactly {FEATURE_COUNT} values, got {}",
                values.len()
            ))
        })?;
        Ok(Self(array))
    }

    /// Value at `index` (0-3), the order the tree's branch nodes use
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).copied()
    }

    #[inline]
    #[must_use]
    pub fn spelling_accuracy(&self) -> f64 {
        self.0[0]
    }

    #[inline]
    #[must_use]
    pub fn grammatical_accuracy(&self) -> f64 {
        self.0[1]
    }

    #[inline]
    #[must_use]
    pub fn percent_corrections(&self) -> f64 {
        self.0[2]
    }

    #[inline]
    #[must_use]
    pub fn phonetic_accuracy(&self) -> f64 {
        self.0[3]
    }

    #[inline]
    #[must_use]
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        self.0
    }
}

/// Derives text-quality metrics from a recognized text sample.
///
/// Holds the corrector used to produce the reference text; defaults to the
/// placeholder [`ReverseCorrector`] the decision tree was trained against.
pub struct FeatureExtractor {
    corrector: Box<dyn TextCorrector>,
}

impl Default for FeatureExtractor {
    fn default() -> Self {
        Self::new(Box::new(ReverseCorrector))
    }
}

impl FeatureExtractor {
    /// Create an extractor scoring against the given corrector
    #[must_use]
    pub fn new(corrector: Box<dyn TextCorrector>) -> Self {
        Self { corrector }
    }

    /// Extract the full feature vector from a text sample
    ///
    /// # Errors
    /// Returns `InvalidInput` if the text contains no words (empty or
    /// whitespace-only); the corrections percentage is undefined there.
    pub fn extract(&self, text: &str) -> Result<FeatureVector> {
        let corrected = self.corrector.correct(text);
        Ok(FeatureVector([
            Self::spelling_accuracy(text, &corrected),
            Self::grammatical_accuracy(text, &corrected),
            Self::percent_corrections(text)?,
            Self::phonetic_accuracy(text),
        ]))
    }

    /// ((len(text) - distance) / (len(text) + 1)) * 100
    fn spelling_accuracy(text: &str, corrected: &str) -> f64 {
        let len = char_len(text);
        let d = levenshtein(text, corrected) as f64;
        ((len - d) / (len + 1.0)) * 100.0
    }

    /// Same distance as spelling accuracy, but based on the corrected
    /// reference's length. With the reversal corrector both lengths agree;
    /// they diverge once a real corrector is plugged in.
    fn grammatical_accuracy(text: &str, corrected: &str) -> f64 {
        let len = char_len(corrected);
        let d = levenshtein(text, corrected) as f64;
        ((len - d) / (len + 1.0)) * 100.0
    }

    /// (floor(words / 2) / words) * 100, words split on whitespace
    fn percent_corrections(text: &str) -> Result<f64> {
        let words = text.split_whitespace().count();
        if words == 0 {
            return Err(ScreeningError::InvalidInput(
                "recognized text contains no words".to_string(),
            ));
        }
        let corrections = words / 2;
        Ok((corrections as f64 / words as f64) * 100.0)
    }

    /// len(text) mod 100, a deterministic placeholder score in [0, 100)
    fn phonetic_accuracy(text: &str) -> f64 {
        (text.chars().count() % 100) as f64
    }
}

fn char_len(text: &str) -> f64 {
    text.chars().count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_word_sample() {
        let extractor = FeatureExtractor::default();
        let features = extractor.extract("a b").expect("two words must extract");

        // floor(2/2) = 1 correction across 2 words
        assert_eq!(features.percent_corrections(), 50.0);
        // "a b" vs "b a": two substitutions, len 3
        assert_eq!(features.spelling_accuracy(), (3.0 - 2.0) / 4.0 * 100.0);
        assert_eq!(features.grammatical_accuracy(), features.spelling_accuracy());
        assert_eq!(features.phonetic_accuracy(), 3.0);
    }

    #[test]
    fn test_empty_text_is_invalid_input() {
        let extractor = FeatureExtractor::default();
        assert!(matches!(
            extractor.extract(""),
            Err(ScreeningError::InvalidInput(_))
        ));
        assert!(matches!(
            extractor.extract("   \t\n"),
            Err(ScreeningError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_extraction_is_deterministic() {
        let extractor = FeatureExtractor::default();
        let a = extractor.extract("hello world").unwrap();
        let b = extractor.extract("hello world").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_palindrome_scores_perfect_distance() {
        // Reversal of a palindrome is itself, so the distance term vanishes
        let extractor = FeatureExtractor::default();
        let features = extractor.extract("aba aba").unwrap();
        assert_eq!(features.spelling_accuracy(), 7.0 / 8.0 * 100.0);
    }

    #[test]
    fn test_phonetic_accuracy_wraps_at_100() {
        let extractor = FeatureExtractor::default();
        let long_word = "x".repeat(103);
        let features = extractor.extract(&long_word).unwrap();
        assert_eq!(features.phonetic_accuracy(), 3.0);
    }

    #[test]
    fn test_from_slice_length_check() {
        assert!(FeatureVector::from_slice(&[1.0, 2.0, 3.0, 4.0]).is_ok());
        assert!(matches!(
            FeatureVector::from_slice(&[1.0, 2.0, 3.0]),
            Err(ScreeningError::InvalidInput(_))
        ));
        assert!(matches!(
            FeatureVector::from_slice(&[0.0; 5]),
            Err(ScreeningError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_feature_order() {
        let features = FeatureVector::from_slice(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(features.get(0), Some(1.0));
        assert_eq!(features.spelling_accuracy(), 1.0);
        assert_eq!(features.grammatical_accuracy(), 2.0);
        assert_eq!(features.percent_corrections(), 3.0);
        assert_eq!(features.phonetic_accuracy(), 4.0);
        assert_eq!(features.get(4), None);
    }
}
