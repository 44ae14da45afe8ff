// Local ONNX classifier — the trained sequence model, exported to ONNX.
//
// Runs entirely on the local CPU: no API calls, no network dependency. The
// model takes one int64 tensor of shape [1, max_length] (the padded id
// sequence) and returns softmax probabilities over the three classes.

use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use ort::session::Session;
use ort::value::Tensor;
use tracing::debug;

use super::traits::Classifier;

/// ONNX-backed classifier. The session sits behind a Mutex because
/// `Session::run` takes `&mut self`; the session itself is loaded once and
/// never replaced. Submissions are sequential, so contention is nil.
pub struct OnnxClassifier {
    session: Mutex<Session>,
}

impl OnnxClassifier {
    /// Load the ONNX model from the given file.
    pub fn load(model_path: &Path) -> Result<Self> {
        if !model_path.exists() {
            anyhow::bail!(
                "Model file not found: {}\nPlace the exported classifier.onnx in the model directory.",
                model_path.display()
            );
        }

        let session = Session::builder()
            .context("Failed to create ONNX session builder")?
            .commit_from_file(model_path)
            .with_context(|| format!("Failed to load ONNX model from {}", model_path.display()))?;

        debug!(path = %model_path.display(), "Loaded ONNX classifier");

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl Classifier for OnnxClassifier {
    fn infer(&self, sequence: &[i64]) -> Result<Vec<f32>> {
        let shape = [1i64, sequence.len() as i64];
        let input = Tensor::from_array((shape, sequence.to_vec()))
            .context("Failed to create input tensor")?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| anyhow::anyhow!("Session lock poisoned: {e}"))?;

        // The model has a single input, so it is passed positionally
        let outputs = session
            .run(ort::inputs![input])
            .context("ONNX inference failed")?;

        // Output shape: [1, 3] — softmax probabilities
        let (_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .context("Failed to extract output tensor")?;

        Ok(data.to_vec())
    }
}
