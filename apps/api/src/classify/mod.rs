//! Category classification: normalize → vectorize → classify.
//!
//! The vectorizer and classifier are capabilities behind traits so `AppState` can carry
//! the artifact-backed implementations in production and fakes in tests. Both are
//! read-only after load and shared across requests via `Arc`.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod model;
pub mod normalizer;
pub mod predictor;
pub mod vectorizer;

pub use model::LinearClassifier;
pub use normalizer::normalize;
pub use predictor::{CategoryPredictor, Prediction};
pub use vectorizer::TfidfVectorizer;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("Failed to load {artifact} artifact from '{}': {reason}", .path.display())]
    ArtifactLoad {
        artifact: &'static str,
        path: PathBuf,
        reason: String,
    },

    #[error("Feature index {index} is out of range for a model with {expected} features")]
    DimensionMismatch { index: usize, expected: usize },

    #[error("Classifier failed: {0}")]
    Backend(String),
}

/// Job category emitted by the classifier. Never checked against a fixed vocabulary;
/// downstream code only substitutes it into documents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredictedLabel(String);

impl PredictedLabel {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PredictedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sparse feature vector: `(index, weight)` pairs sorted by index, no duplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureVector {
    pub dimension: usize,
    pub entries: Vec<(usize, f32)>,
}

impl FeatureVector {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Turns normalized text into a feature vector.
pub trait Vectorizer: Send + Sync {
    fn vectorize(&self, normalized: &str) -> FeatureVector;
}

/// Maps a feature vector to exactly one label.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &FeatureVector) -> Result<PredictedLabel, ClassifyError>;
}

/// Reads and deserializes a JSON model artifact, tagging failures with the artifact name.
pub(crate) fn load_artifact<T: DeserializeOwned>(
    artifact: &'static str,
    path: &Path,
) -> Result<T, ClassifyError> {
    let load_error = |reason: String| ClassifyError::ArtifactLoad {
        artifact,
        path: path.to_path_buf(),
        reason,
    };

    let raw = std::fs::read_to_string(path).map_err(|e| load_error(e.to_string()))?;
    serde_json::from_str(&raw).map_err(|e| load_error(e.to_string()))
}
