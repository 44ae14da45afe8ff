// Classifier and vocabulary traits — the swap-ready abstractions.
//
// The pre-trained model and its vocabulary are external artifacts. Keeping
// them behind narrow traits means the pipeline and the chat layer can be
// tested with stubs, with no model files on disk.

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// The three categories the model was trained on, in class-index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    HateSpeech,
    OffensiveLanguage,
    Neither,
}

impl Label {
    /// Map a class index from the model's output vector to its label.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Label::HateSpeech),
            1 => Some(Label::OffensiveLanguage),
            2 => Some(Label::Neither),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Label::HateSpeech => "Hate Speech",
            Label::OffensiveLanguage => "Offensive Language",
            Label::Neither => "Neither",
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of classifying a single submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: Label,
    /// The model's output probability for the selected label, 0.0 to 1.0.
    pub confidence: f64,
}

/// Token-to-id mapping built when the model was trained. Read-only.
pub trait Vocabulary: Send + Sync {
    /// Look up a token's integer id. `None` means the token was not in the
    /// training vocabulary; this pipeline drops such tokens (the convention
    /// the vocabulary was built with — no out-of-vocabulary id exists).
    fn encode(&self, token: &str) -> Option<i64>;

    /// Number of known tokens, for status display.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The pre-trained sequence model. One inference call per submission, no
/// retries, no caching.
pub trait Classifier: Send + Sync {
    /// Run inference on a fixed-length id sequence and return the
    /// probability vector over the three classes.
    fn infer(&self, sequence: &[i64]) -> Result<Vec<f32>>;
}

/// Select the highest-probability class from the model's output vector.
///
/// Fails if the vector doesn't hold exactly three probabilities — that is a
/// broken model contract, surfaced as a recoverable error rather than a
/// panic.
pub fn select_class(probabilities: &[f32]) -> Result<ClassificationResult> {
    if probabilities.len() != 3 {
        anyhow::bail!(
            "Model returned {} probabilities, expected 3 — the model file does not match this tool",
            probabilities.len()
        );
    }

    // First index wins on ties, matching argmax in the training pipeline
    let mut index = 0;
    let mut probability = probabilities[0];
    for (i, &p) in probabilities.iter().enumerate().skip(1) {
        if p > probability {
            index = i;
            probability = p;
        }
    }

    let label = Label::from_index(index)
        .ok_or_else(|| anyhow::anyhow!("Class index {index} out of range"))?;

    Ok(ClassificationResult {
        label,
        confidence: (probability as f64).clamp(0.0, 1.0),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_table() {
        assert_eq!(Label::from_index(0), Some(Label::HateSpeech));
        assert_eq!(Label::from_index(1), Some(Label::OffensiveLanguage));
        assert_eq!(Label::from_index(2), Some(Label::Neither));
        assert_eq!(Label::from_index(3), None);
    }

    #[test]
    fn test_select_class_picks_max() {
        let result = select_class(&[0.1, 0.7, 0.2]).unwrap();
        assert_eq!(result.label, Label::OffensiveLanguage);
        assert!((result.confidence - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_select_class_rejects_wrong_length() {
        assert!(select_class(&[0.5, 0.5]).is_err());
        assert!(select_class(&[]).is_err());
        assert!(select_class(&[0.2, 0.2, 0.2, 0.4]).is_err());
    }

    #[test]
    fn test_select_class_first_index_wins_ties() {
        let result = select_class(&[0.5, 0.5, 0.0]).unwrap();
        assert_eq!(result.label, Label::HateSpeech);
    }

    #[test]
    fn test_select_class_clamps_confidence() {
        // A slightly out-of-range probability (float noise) is clamped
        let result = select_class(&[1.0000002, 0.0, 0.0]).unwrap();
        assert!(result.confidence <= 1.0);
    }
}
