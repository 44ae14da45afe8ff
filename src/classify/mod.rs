// Classification — normalized text in, labeled result out.
//
// The Pipeline owns immutable handles to the two external artifacts (the
// vocabulary and the model) plus the max_length constant fixed at training
// time. It is built once at startup and shared read-only afterwards — the
// explicit-handle version of "load artifacts once".

pub mod encode;
pub mod onnx;
pub mod traits;
pub mod vocab;

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::preprocess::normalize;
use traits::{select_class, ClassificationResult, Classifier, Vocabulary};

/// Everything needed to turn raw text into a ClassificationResult.
pub struct Pipeline {
    vocab: Arc<dyn Vocabulary>,
    classifier: Arc<dyn Classifier>,
    max_length: usize,
}

impl Pipeline {
    pub fn new(
        vocab: Arc<dyn Vocabulary>,
        classifier: Arc<dyn Classifier>,
        max_length: usize,
    ) -> Result<Self> {
        if max_length == 0 {
            anyhow::bail!("max_length must be positive");
        }
        Ok(Self {
            vocab,
            classifier,
            max_length,
        })
    }

    /// Classify one raw submission: normalize, encode, infer, pick the top
    /// class. One inference attempt, no retries, no caching.
    pub fn classify(&self, raw: &str) -> Result<ClassificationResult> {
        let normalized = normalize(raw);
        let sequence = encode::encode_checked(&normalized, self.vocab.as_ref(), self.max_length)?;
        let probabilities = self.classifier.infer(&sequence)?;
        let result = select_class(&probabilities)?;

        debug!(
            label = %result.label,
            confidence = result.confidence,
            normalized = %crate::output::truncate_chars(&normalized, 60),
            "Classified submission"
        );

        Ok(result)
    }

    /// Sequence length the model expects, fixed at training time.
    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of tokens in the vocabulary, for status display.
    pub fn vocab_size(&self) -> usize {
        self.vocab.len()
    }
}

/// Read the `max_length` constant exported by the training pipeline.
pub fn load_max_length(path: &Path) -> Result<usize> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let max_length: usize = raw
        .trim()
        .parse()
        .with_context(|| format!("{} does not contain a valid integer", path.display()))?;
    if max_length == 0 {
        anyhow::bail!("{} holds 0; max_length must be positive", path.display());
    }
    Ok(max_length)
}

/// Load all artifacts from the model directory and assemble the pipeline.
///
/// Expects `classifier.onnx`, `word_index.json` and `max_length.txt` to
/// exist in `model_dir`; `Config::require_model` checks this up front with
/// friendlier messages.
pub fn load_pipeline(model_dir: &Path) -> Result<Pipeline> {
    let vocab = vocab::WordIndex::load(&model_dir.join("word_index.json"))?;
    let classifier = onnx::OnnxClassifier::load(&model_dir.join("classifier.onnx"))?;
    let max_length = load_max_length(&model_dir.join("max_length.txt"))?;

    info!(
        vocab_size = vocab.len(),
        max_length,
        dir = %model_dir.display(),
        "Loaded classification artifacts"
    );

    Pipeline::new(Arc::new(vocab), Arc::new(classifier), max_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::vocab::WordIndex;

    struct FixedClassifier(Vec<f32>);

    impl Classifier for FixedClassifier {
        fn infer(&self, _sequence: &[i64]) -> Result<Vec<f32>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_pipeline_rejects_zero_max_length() {
        let vocab = Arc::new(WordIndex::from_pairs([]));
        let classifier = Arc::new(FixedClassifier(vec![0.1, 0.1, 0.8]));
        assert!(Pipeline::new(vocab, classifier, 0).is_err());
    }

    #[test]
    fn test_pipeline_classifies_with_stub() {
        let vocab = Arc::new(WordIndex::from_pairs([("hate".to_string(), 1)]));
        let classifier = Arc::new(FixedClassifier(vec![0.9, 0.05, 0.05]));
        let pipeline = Pipeline::new(vocab, classifier, 10).unwrap();

        let result = pipeline.classify("hate").unwrap();
        assert_eq!(result.label, traits::Label::HateSpeech);
        assert!((result.confidence - 0.9).abs() < 1e-6);
    }
}
