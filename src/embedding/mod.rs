//! Sentence embeddings.
//!
//! [`SentenceEmbedder`] is loaded once at startup and shared read-only
//! (behind an `Arc`) by every request. It has three backends:
//!
//! - **Model**: BERT encoder + mean pooling via candle (see [`bert`]).
//! - **Stub**: deterministic feature-hashed bag-of-words vectors, for tests
//!   and for running without model files. Use [`EmbedderConfig::stub`].
//! - **Unavailable**: a configured model failed to load; every call errors,
//!   which the scorer turns into a degraded (zero) sub-score.

/// BERT encoder with mean pooling.
pub mod bert;
/// Embedder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Tokenizer loading helpers.
pub mod utils;


pub use config::{EMBEDDER_MAX_SEQ_LEN, EMBEDDER_STUB_DIM, EmbedderConfig, REQUIRED_MODEL_FILES};
pub use error::EmbeddingError;

use candle_core::{Device, Tensor};
use tokenizers::Tokenizer;
use tracing::{debug, info, warn};

use bert::SentenceBert;
use device::{device_label, select_device};
use utils::load_tokenizer;

enum EmbedderBackend {
    Model {
        model: SentenceBert,
        tokenizer: Tokenizer,
        device: Device,
    },
    Stub,
    Unavailable {
        reason: String,
    },
}

/// Which backend an embedder runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedderMode {
    Model,
    Stub,
    Unavailable,
}

impl EmbedderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmbedderMode::Model => "model",
            EmbedderMode::Stub => "stub",
            EmbedderMode::Unavailable => "unavailable",
        }
    }
}

impl std::fmt::Display for EmbedderMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sentence-embedding generator (supports stub mode).
pub struct SentenceEmbedder {
    backend: EmbedderBackend,
    config: EmbedderConfig,
}

impl std::fmt::Debug for SentenceEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let backend = match &self.backend {
            EmbedderBackend::Model { device, .. } => format!("Model({})", device_label(device)),
            EmbedderBackend::Stub => "Stub".to_string(),
            EmbedderBackend::Unavailable { reason } => format!("Unavailable({reason})"),
        };
        f.debug_struct("SentenceEmbedder")
            .field("backend", &backend)
            .field("max_seq_len", &self.config.max_seq_len)
            .finish()
    }
}

impl SentenceEmbedder {
    /// Loads the embedder from a config (stub mode is supported).
    pub fn load(config: EmbedderConfig) -> Result<Self, EmbeddingError> {
        config.validate()?;

        if config.testing_stub {
            warn!("Sentence embedder running in STUB mode (testing only)");
            return Ok(Self {
                backend: EmbedderBackend::Stub,
                config,
            });
        }

        let device = select_device();
        debug!(device = device_label(&device), "Selected compute device");

        let model = SentenceBert::load(&config.model_dir, &device).map_err(|e| {
            EmbeddingError::ModelLoadFailed {
                reason: format!("Failed to load BERT encoder: {}", e),
            }
        })?;

        let tokenizer = load_tokenizer(&config.model_dir, config.max_seq_len).map_err(|e| {
            EmbeddingError::TokenizationFailed {
                reason: format!("Failed to load tokenizer: {}", e),
            }
        })?;

        info!(
            model_dir = %config.model_dir.display(),
            hidden_size = model.hidden_size(),
            max_seq_len = config.max_seq_len,
            device = device_label(&device),
            "Sentence embedding model loaded"
        );

        Ok(Self {
            backend: EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            },
            config,
        })
    }

    /// Stub embedder with the default configuration.
    pub fn stub() -> Self {
        Self {
            backend: EmbedderBackend::Stub,
            config: EmbedderConfig::stub(),
        }
    }

    /// Embedder whose every call fails with [`EmbeddingError::ModelUnavailable`].
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            backend: EmbedderBackend::Unavailable {
                reason: reason.into(),
            },
            config: EmbedderConfig::default(),
        }
    }

    /// Generates an embedding for a single string.
    pub fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        match &self.backend {
            EmbedderBackend::Model {
                model,
                tokenizer,
                device,
            } => Self::embed_with_model(text, model, tokenizer, device),
            EmbedderBackend::Stub => Ok(self.embed_stub(text)),
            EmbedderBackend::Unavailable { reason } => Err(EmbeddingError::ModelUnavailable {
                reason: reason.clone(),
            }),
        }
    }

    fn embed_with_model(
        text: &str,
        model: &SentenceBert,
        tokenizer: &Tokenizer,
        device: &Device,
    ) -> Result<Vec<f32>, EmbeddingError> {
        let encoding =
            tokenizer
                .encode(text, true)
                .map_err(|e| EmbeddingError::TokenizationFailed {
                    reason: e.to_string(),
                })?;

        if encoding.get_ids().is_empty() {
            return Err(EmbeddingError::TokenizationFailed {
                reason: "tokenizer produced no tokens".to_string(),
            });
        }

        debug!(
            text_len = text.len(),
            token_count = encoding.get_ids().len(),
            "Generating sentence embedding"
        );

        let input_ids = Tensor::new(encoding.get_ids(), device)?.unsqueeze(0)?;
        let token_type_ids = Tensor::new(encoding.get_type_ids(), device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(encoding.get_attention_mask(), device)?.unsqueeze(0)?;

        Ok(model.embed(&input_ids, &token_type_ids, &attention_mask)?)
    }

    // Hashes each whitespace token into a bucket so texts that share words
    // share dimensions; cosine between stub vectors is therefore in [0, 1].
    fn embed_stub(&self, text: &str) -> Vec<f32> {
        let dim = self.config.stub_dim;
        let mut embedding = vec![0.0f32; dim];

        for token in text.split_whitespace() {
            let hash = blake3::hash(token.as_bytes());
            let mut bucket = [0u8; 8];
            bucket.copy_from_slice(&hash.as_bytes()[..8]);
            let idx = (u64::from_le_bytes(bucket) % dim as u64) as usize;
            embedding[idx] += 1.0;
        }

        debug!(text_len = text.len(), "Generated stub embedding");
        embedding
    }

    pub fn mode(&self) -> EmbedderMode {
        match self.backend {
            EmbedderBackend::Model { .. } => EmbedderMode::Model,
            EmbedderBackend::Stub => EmbedderMode::Stub,
            EmbedderBackend::Unavailable { .. } => EmbedderMode::Unavailable,
        }
    }

    /// Returns `true` if running in stub mode.
    pub fn is_stub(&self) -> bool {
        self.mode() == EmbedderMode::Stub
    }

    /// Returns `true` if a model is loaded.
    pub fn has_model(&self) -> bool {
        self.mode() == EmbedderMode::Model
    }

    /// Returns the embedder configuration.
    pub fn config(&self) -> &EmbedderConfig {
        &self.config
    }
}
