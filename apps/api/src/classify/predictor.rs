//! Category predictor: the single entry point the request pipeline uses to classify text.

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::classify::{
    normalize, Classifier, ClassifyError, LinearClassifier, PredictedLabel, TfidfVectorizer,
    Vectorizer,
};

/// Outcome of one classification: the text the model actually saw, and its label.
#[derive(Debug, Clone)]
pub struct Prediction {
    pub normalized: String,
    pub label: PredictedLabel,
}

/// Holds the long-lived, read-only vectorizer and classifier.
#[derive(Clone)]
pub struct CategoryPredictor {
    vectorizer: Arc<dyn Vectorizer>,
    classifier: Arc<dyn Classifier>,
}

impl CategoryPredictor {
    pub fn new(vectorizer: Arc<dyn Vectorizer>, classifier: Arc<dyn Classifier>) -> Self {
        Self {
            vectorizer,
            classifier,
        }
    }

    /// Loads both artifacts and checks that they agree on the feature space.
    /// Any failure here is fatal for startup.
    pub fn load(model_path: &Path, vectorizer_path: &Path) -> Result<Self, ClassifyError> {
        let vectorizer = TfidfVectorizer::load(vectorizer_path)?;
        let classifier = LinearClassifier::load(model_path)?;

        if vectorizer.dimension() != classifier.n_features() {
            return Err(ClassifyError::ArtifactLoad {
                artifact: "model",
                path: model_path.to_path_buf(),
                reason: format!(
                    "model expects {} features but vectorizer produces {}",
                    classifier.n_features(),
                    vectorizer.dimension()
                ),
            });
        }

        info!(
            "Classifier artifacts loaded ({} features)",
            vectorizer.dimension()
        );
        Ok(Self::new(Arc::new(vectorizer), Arc::new(classifier)))
    }

    /// Normalizes, vectorizes and classifies `raw` exactly once.
    ///
    /// Text that normalizes to nothing is still classified; whatever the model returns for
    /// an empty vector is the answer.
    pub fn predict(&self, raw: &str) -> Result<Prediction, ClassifyError> {
        let normalized = normalize(raw);
        let features = self.vectorizer.vectorize(&normalized);
        if features.is_empty() {
            debug!("No vocabulary terms matched; classifying an empty feature vector");
        }

        let label = self.classifier.classify(&features)?;
        Ok(Prediction { normalized, label })
    }
}
