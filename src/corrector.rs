//! Text correction seam for feature extraction
//!
//! The metrics compare recognized text against a "corrected" reference. The
//! production corrector is a placeholder (character reversal, kept for output
//! parity with the trained decision tree); a real spelling/grammar corrector
//! can be substituted without touching the metric formulas.

/// Produces the corrected reference text a sample is scored against
pub trait TextCorrector: Send + Sync {
    /// Return the corrected form of `text`
    fn correct(&self, text: &str) -> String;
}

/// Placeholder corrector: reverses the character sequence.
///
/// The pre-trained decision tree thresholds were fit against metrics computed
/// with this corrector, so replacing it requires retraining the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseCorrector;

impl TextCorrector for ReverseCorrector {
    fn correct(&self, text: &str) -> String {
        text.chars().rev().collect()
    }
}
