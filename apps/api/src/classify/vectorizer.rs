//! TF-IDF vectorizer backed by an exported vocabulary + idf table.
//!
//! Input is already normalized, so tokenization is a whitespace split that keeps words of
//! two or more characters. Term weights are `tf × idf` (or `(1 + ln tf) × idf` when
//! `sublinear_tf` is set), then scaled by the configured norm.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::classify::{load_artifact, ClassifyError, FeatureVector, Vectorizer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f32>,
    #[serde(default = "default_ngram_range")]
    ngram_range: (usize, usize),
    #[serde(default)]
    sublinear_tf: bool,
    #[serde(default = "default_norm")]
    norm: Option<Norm>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

impl TfidfVectorizer {
    /// Loads and validates the vectorizer artifact.
    pub fn load(path: &Path) -> Result<Self, ClassifyError> {
        let vectorizer: Self = load_artifact("vectorizer", path)?;
        vectorizer.validate().map_err(|reason| ClassifyError::ArtifactLoad {
            artifact: "vectorizer",
            path: path.to_path_buf(),
            reason,
        })?;
        Ok(vectorizer)
    }

    /// Number of features this vectorizer emits.
    pub fn dimension(&self) -> usize {
        self.idf.len()
    }

    fn validate(&self) -> Result<(), String> {
        let (min_n, max_n) = self.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(format!("invalid ngram_range ({min_n}, {max_n})"));
        }
        let out_of_range = self
            .vocabulary
            .iter()
            .find(|(_, index)| **index >= self.idf.len());
        if let Some((term, index)) = out_of_range {
            return Err(format!(
                "vocabulary term '{term}' has index {index} but idf has {} entries",
                self.idf.len()
            ));
        }
        Ok(())
    }

    /// Counts vocabulary terms (word n-grams) in the normalized text.
    fn term_counts(&self, normalized: &str) -> BTreeMap<usize, f32> {
        let tokens: Vec<&str> = normalized
            .split_whitespace()
            .filter(|t| t.chars().count() >= 2)
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut counts = BTreeMap::new();

        for n in min_n..=max_n {
            for window in tokens.windows(n) {
                let term = window.join(" ");
                if let Some(&index) = self.vocabulary.get(&term) {
                    *counts.entry(index).or_insert(0.0) += 1.0;
                }
            }
        }

        counts
    }
}

impl Vectorizer for TfidfVectorizer {
    fn vectorize(&self, normalized: &str) -> FeatureVector {
        let mut entries: Vec<(usize, f32)> = self
            .term_counts(normalized)
            .into_iter()
            .map(|(index, tf)| {
                let tf = if self.sublinear_tf { 1.0 + tf.ln() } else { tf };
                (index, tf * self.idf[index])
            })
            .collect();

        let scale = match self.norm {
            Some(Norm::L2) => entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt(),
            Some(Norm::L1) => entries.iter().map(|(_, w)| w.abs()).sum::<f32>(),
            None => 1.0,
        };
        if scale > 0.0 {
            for (_, weight) in &mut entries {
                *weight /= scale;
            }
        }

        FeatureVector {
            dimension: self.dimension(),
            entries,
        }
    }
}
