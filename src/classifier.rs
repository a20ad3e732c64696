//! Decision-tree classification of handwriting feature vectors
//!
//! The tree is a pre-trained artifact: an ordered node list with compiled-in
//! thresholds, evaluated with IEEE-754 `<=` semantics (ties take the
//! less-or-equal branch). Swapping in a retrained model means replacing the
//! node list, not rewriting control flow.

use crate::error::Result;
use crate::features::FeatureVector;
use serde::{Deserialize, Serialize};

/// Terminal screening verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Slim likelihood of dyslexia
    LowRisk,
    /// High likelihood of dyslexia
    HighRisk,
}

impl std::fmt::Display for Verdict {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LowRisk => write!(f, "low_risk"),
            Self::HighRisk => write!(f, "high_risk"),
        }
    }
}

/// Node of the decision tree; branch children are indices into the node list
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DecisionNode {
    /// Terminal node carrying the verdict
    Leaf(Verdict),
    /// Internal split: `le` is taken when `features[feature] <= threshold`
    Branch {
        feature: usize,
        threshold: f64,
        le: usize,
        gt: usize,
    },
}

/// Fixed binary decision tree over a [`FeatureVector`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<DecisionNode>,
}

impl DecisionTree {
    /// The pre-trained screening tree.
    ///
    /// Thresholds are exact values exported from the trained model; they are
    /// meaningful only for features produced by the default extractor.
    #[must_use]
    pub fn pretrained() -> Self {
        use DecisionNode::{Branch, Leaf};
        Self {
            nodes: vec![
                // 0: root split on spelling accuracy
                Branch {
                    feature: 0,
                    threshold: 96.403_507_232_666_02,
                    le: 1,
                    gt: 2,
                },
                // 1: poor spelling accuracy
                Leaf(Verdict::HighRisk),
                // 2: split on grammatical accuracy
                Branch {
                    feature: 1,
                    threshold: 99.104_602_813_720_7,
                    le: 3,
                    gt: 4,
                },
                // 3: poor grammatical accuracy
                Leaf(Verdict::HighRisk),
                // 4: split on percentage of corrections
                Branch {
                    feature: 2,
                    threshold: 2.408_450_722_694_397,
                    le: 5,
                    gt: 6,
                },
                // 5: refine the low-corrections band
                Branch {
                    feature: 2,
                    threshold: 1.793_650_805_950_164_8,
                    le: 7,
                    gt: 8,
                },
                // 6: many corrections
                Leaf(Verdict::LowRisk),
                // 7: very few corrections
                Leaf(Verdict::LowRisk),
                // 8: mid-band corrections
                Leaf(Verdict::HighRisk),
            ],
        }
    }

    /// Evaluate the tree over a feature vector
    ///
    /// # Errors
    /// Returns `InvalidInput` if a branch references a feature index the
    /// vector does not carry (impossible for the pretrained tree over the
    /// typed 4-element vector, checked for externally loaded trees).
    pub fn classify(&self, features: &FeatureVector) -> Result<Verdict> {
        let mut index = 0;
        loop {
            match self.nodes[index] {
                DecisionNode::Leaf(verdict) => return Ok(verdict),
                DecisionNode::Branch {
                    feature,
                    threshold,
                    le,
                    gt,
                } => {
                    let value = features.get(feature).ok_or_else(|| {
                        crate::error::ScreeningError::InvalidInput(format!(
                            "decision tree references feature index {feature} beyond vector length"
                        ))
                    })?;
                    index = if value <= threshold { le } else { gt };
                }
            }
        }
    }
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::pretrained()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn features(values: [f64; 4]) -> FeatureVector {
        FeatureVector::from_slice(&values).unwrap()
    }

    #[test]
    fn test_low_spelling_accuracy_is_high_risk() {
        let tree = DecisionTree::pretrained();
        let verdict = tree.classify(&features([90.0, 90.0, 0.0, 0.0])).unwrap();
        assert_eq!(verdict, Verdict::HighRisk);
    }

    #[test]
    fn test_low_risk_leaf() {
        let tree = DecisionTree::pretrained();
        let verdict = tree.classify(&features([97.0, 100.0, 1.0, 0.0])).unwrap();
        assert_eq!(verdict, Verdict::LowRisk);
    }

    #[test]
    fn test_low_grammatical_accuracy_is_high_risk() {
        let tree = DecisionTree::pretrained();
        let verdict = tree.classify(&features([97.0, 99.0, 1.0, 0.0])).unwrap();
        assert_eq!(verdict, Verdict::HighRisk);
    }

    #[test]
    fn test_mid_band_corrections_is_high_risk() {
        let tree = DecisionTree::pretrained();
        // Between the two corrections thresholds
        let verdict = tree.classify(&features([97.0, 100.0, 2.0, 0.0])).unwrap();
        assert_eq!(verdict, Verdict::HighRisk);
    }

    #[test]
    fn test_many_corrections_is_low_risk() {
        let tree = DecisionTree::pretrained();
        let verdict = tree.classify(&features([97.0, 100.0, 50.0, 0.0])).unwrap();
        assert_eq!(verdict, Verdict::LowRisk);
    }

    #[test]
    fn test_threshold_tie_takes_le_branch() {
        let tree = DecisionTree::pretrained();
        // Exactly on the root threshold: <= is true, so HighRisk
        let verdict = tree
            .classify(&features([96.40350723266602, 100.0, 1.0, 0.0]))
            .unwrap();
        assert_eq!(verdict, Verdict::HighRisk);
    }

    #[test]
    fn test_verdict_display() {
        assert_eq!(Verdict::LowRisk.to_string(), "low_risk");
        assert_eq!(Verdict::HighRisk.to_string(), "high_risk");
    }

    #[test]
    fn test_malformed_tree_feature_index() {
        let tree = DecisionTree {
            nodes: vec![DecisionNode::Branch {
                feature: 9,
                threshold: 0.0,
                le: 1,
                gt: 1,
            }],
        };
        assert!(tree.classify(&features([0.0; 4])).is_err());
    }
}
