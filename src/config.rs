use std::env;
use std::path::PathBuf;

use anyhow::Result;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. The only
/// knob is where the model artifacts live — everything else (max_length,
/// the vocabulary, the label table) is fixed by the trained artifacts.
pub struct Config {
    /// Directory containing classifier.onnx, word_index.json and
    /// max_length.txt
    pub model_dir: PathBuf,
}

/// Default location for the model artifacts: the platform data dir,
/// falling back to ./model for checkouts without one.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("cinder").join("model"))
        .unwrap_or_else(|| PathBuf::from("./model"))
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        let model_dir = env::var("CINDER_MODEL_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_model_dir());

        Ok(Self { model_dir })
    }

    /// Check that all three model artifacts are present.
    /// Call this before any operation that needs the classifier.
    pub fn require_model(&self) -> Result<()> {
        for file in ["classifier.onnx", "word_index.json", "max_length.txt"] {
            let path = self.model_dir.join(file);
            if !path.exists() {
                anyhow::bail!(
                    "Model artifact not found: {}\n\
                     Copy the exported model files into the model directory,\n\
                     or point CINDER_MODEL_DIR at the directory that holds them.",
                    path.display()
                );
            }
        }
        Ok(())
    }
}
