use std::path::PathBuf;

use crate::embedding::error::EmbeddingError;

/// Default encoder token budget.
pub const EMBEDDER_MAX_SEQ_LEN: usize = crate::constants::DEFAULT_MAX_SEQ_LEN;

/// Dimension of stub embeddings.
pub const EMBEDDER_STUB_DIM: usize = crate::constants::DEFAULT_EMBEDDING_DIM;

/// Files a sentence-encoder directory must contain.
pub const REQUIRED_MODEL_FILES: [&str; 3] = ["config.json", "model.safetensors", "tokenizer.json"];

#[derive(Debug, Clone)]
/// Configuration for [`SentenceEmbedder`](super::SentenceEmbedder).
pub struct EmbedderConfig {
    /// Model directory (see [`REQUIRED_MODEL_FILES`]).
    pub model_dir: PathBuf,
    /// Max tokens fed to the encoder; longer inputs are truncated.
    pub max_seq_len: usize,
    /// Output dimension in stub mode.
    pub stub_dim: usize,
    /// If true, run in deterministic stub mode (no model files required).
    pub testing_stub: bool,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::new(),
            max_seq_len: EMBEDDER_MAX_SEQ_LEN,
            stub_dim: EMBEDDER_STUB_DIM,
            testing_stub: false,
        }
    }
}

impl EmbedderConfig {
    /// Creates a config for a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: model_dir.into(),
            ..Default::default()
        }
    }

    /// Creates a stub config (no model files; produces deterministic embeddings).
    pub fn stub() -> Self {
        Self {
            testing_stub: true,
            ..Default::default()
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Validates required fields for the selected mode.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.testing_stub {
            if self.stub_dim == 0 {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "stub_dim must be greater than zero".to_string(),
                });
            }
            return Ok(());
        }

        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than zero".to_string(),
            });
        }

        if self.model_dir.as_os_str().is_empty() {
            return Err(EmbeddingError::InvalidConfig {
                reason: "model_dir is required (stubbing is disabled)".to_string(),
            });
        }

        if !self.model_dir.is_dir() {
            return Err(EmbeddingError::ModelNotFound {
                path: self.model_dir.clone(),
            });
        }

        if let Some(missing) = self.missing_files().first() {
            return Err(EmbeddingError::ModelLoadFailed {
                reason: format!("Missing {} in {}", missing, self.model_dir.display()),
            });
        }

        Ok(())
    }

    /// Required model files absent from `model_dir`.
    pub fn missing_files(&self) -> Vec<&'static str> {
        REQUIRED_MODEL_FILES
            .into_iter()
            .filter(|name| !self.model_dir.join(name).is_file())
            .collect()
    }
}
