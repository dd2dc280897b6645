//! Linear decision model over TF-IDF features.
//!
//! One coefficient row per class (or a single row for the binary case), scored as
//! `coef · x + intercept`. This covers exported logistic regression, linear SVM and
//! multinomial naive Bayes (log-probabilities as coefficients) alike.

use std::path::Path;

use serde::Deserialize;

use crate::classify::{load_artifact, Classifier, ClassifyError, FeatureVector, PredictedLabel};

#[derive(Debug, Clone, Deserialize)]
pub struct LinearClassifier {
    classes: Vec<String>,
    coef: Vec<Vec<f32>>,
    intercept: Vec<f32>,
}

impl LinearClassifier {
    /// Loads and validates the classifier artifact.
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let model: Self = load_artifact("model", path)?;
        model.validate().map_err(|reason| ClassifyError::ArtifactLoad {
            artifact: "model",
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(model)
    }

    /// Number of input features each coefficient row expects.
    pub fn n_features(&self) -> usize {
        self.coef.first().map(Vec::len).unwrap_or(0)
    }

    fn is_binary(&self) -> bool {
        self.classes.len() == 2 && self.coef.len() == 1
    }

    fn validate(&self) -> Result<(), String> {
        if self.classes.len() < 2 {
            return Err(format!(
                "expected at least 2 classes, found {}",
                self.classes.len()
            ));
        }
        if !self.is_binary() && self.coef.len() != self.classes.len() {
            return Err(format!(
                "{} coefficient rows for {} classes",
                self.coef.len(),
                self.classes.len()
            ));
        }
        if self.intercept.len() != self.coef.len() {
            return Err(format!(
                "{} intercepts for {} coefficient rows",
                self.intercept.len(),
                self.coef.len()
            ));
        }
        let width = self.n_features();
        if self.coef.iter().any(|row| row.len() != width) {
            return Err("coefficient rows have differing lengths".to_string());
        }
        Ok(())
    }

    fn decision_scores(&self, features: &FeatureVector) -> Result<Vec<f32>, ClassifyError> {
        let expected = self.n_features();
        if let Some(&(index, _)) = features.entries.iter().find(|(i, _)| *i >= expected) {
            return Err(ClassifyError::DimensionMismatch { index, expected });
        }

        let scores: Vec<f32> = self
            .coef
            .iter()
            .zip(&self.intercept)
            .map(|(row, bias)| {
                features
                    .entries
                    .iter()
                    .map(|&(i, w)| row[i] * w)
                    .sum::<f32>()
                    + bias
            })
            .collect();

        if scores.iter().any(|s| !s.is_finite()) {
            return Err(ClassifyError::Backend(
                "decision function produced a non-finite score".to_string(),
            ));
        }
        Ok(scores)
    }
}

impl Classifier for LinearClassifier {
    fn classify(&self, features: &FeatureVector) -> Result<PredictedLabel, ClassifyError> {
        let scores = self.decision_scores(features)?;

        let winner = if self.is_binary() {
            usize::from(scores[0] > 0.0)
        } else {
            // First maximum wins ties.
            scores
                .iter()
                .enumerate()
                .fold(0, |best, (i, s)| if *s > scores[best] { i } else { best })
        };

        Ok(PredictedLabel::new(self.classes[winner].clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn model(json: &str) -> LinearClassifier {
        let model: LinearClassifier = serde_json::from_str(json).unwrap();
        model.validate().unwrap();
        model
    }

    fn three_class() -> LinearClassifier {
        model(
            r#"{
                "classes": ["Data Science", "Java Developer", "HR"],
                "coef": [[2.0, 0.0], [0.0, 2.0], [0.5, 0.5]],
                "intercept": [0.0, 0.0, 0.1]
            }"#,
        )
    }

    fn features(entries: Vec<(usize, f32)>) -> FeatureVector {
        FeatureVector {
            dimension: 2,
            entries,
        }
    }

    #[test]
    fn test_classify_picks_highest_score() {
        let m = three_class();
        assert_eq!(
            m.classify(&features(vec![(0, 1.0)])).unwrap().as_str(),
            "Data Science"
        );
        assert_eq!(
            m.classify(&features(vec![(1, 1.0)])).unwrap().as_str(),
            "Java Developer"
        );
    }

    #[test]
    fn test_classify_empty_vector_falls_back_to_intercepts() {
        let label = three_class().classify(&FeatureVector::default()).unwrap();
        assert_eq!(label.as_str(), "HR");
    }

    #[test]
    fn test_classify_ties_pick_first_class() {
        let m = model(r#"{"classes": ["A", "B", "C"], "coef": [[1.0], [1.0], [1.0]], "intercept": [0.0, 0.0, 0.0]}"#);
        assert_eq!(m.classify(&features(vec![(0, 1.0)])).unwrap().as_str(), "A");
    }

    #[test]
    fn test_classify_binary_single_row() {
        let m = model(r#"{"classes": ["neg", "pos"], "coef": [[1.0, -1.0]], "intercept": [0.0]}"#);
        assert_eq!(m.classify(&features(vec![(0, 1.0)])).unwrap().as_str(), "pos");
        assert_eq!(m.classify(&features(vec![(1, 1.0)])).unwrap().as_str(), "neg");
    }

    #[test]
    fn test_classify_out_of_range_feature_is_dimension_mismatch() {
        let err = three_class()
            .classify(&features(vec![(5, 1.0)]))
            .unwrap_err();
        assert!(matches!(
            err,
            ClassifyError::DimensionMismatch {
                index: 5,
                expected: 2
            }
        ));
    }

    #[test]
    fn test_classify_non_finite_score_is_backend_error() {
        let err = three_class()
            .classify(&features(vec![(0, f32::NAN)]))
            .unwrap_err();
        assert!(matches!(err, ClassifyError::Backend(_)));
    }

    #[test]
    fn test_validate_rejects_row_count_mismatch() {
        let m: LinearClassifier = serde_json::from_str(
            r#"{"classes": ["A", "B", "C"], "coef": [[1.0]], "intercept": [0.0]}"#,
        )
        .unwrap();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_load_rejects_single_class_model() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"classes": ["Only"], "coef": [[1.0]], "intercept": [0.0]}"#)
            .unwrap();

        let err = LinearClassifier::load(file.path()).unwrap_err();
        assert!(matches!(err, ClassifyError::ArtifactLoad { artifact: "model", .. }));
    }
}
