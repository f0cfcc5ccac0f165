//! TF-IDF vectorization over a fixed, pre-fitted vocabulary
//!
//! The transform mirrors scikit-learn's `TfidfVectorizer` defaults (token
//! pattern `\b\w\w+\b`, lowercasing, raw counts scaled by idf, L2
//! normalization) so that fitted artifacts exported from the training
//! pipeline reproduce the same feature vectors here.

use bullyguard_core::{ArtifactStatus, Error, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap, HashSet};

/// Sparse feature vector produced by a transform.
///
/// Indices are strictly increasing; `dim` is the vocabulary size the
/// vector was produced against.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub indices: Vec<usize>,
    pub values: Vec<f64>,
    pub dim: usize,
}

impl FeatureVector {
    /// True when no in-vocabulary token was seen
    pub fn is_zero(&self) -> bool {
        self.indices.is_empty()
    }
}

/// On-disk shape of a fitted TF-IDF artifact
#[derive(Debug, Clone, Deserialize)]
pub struct FittedArtifact {
    /// token -> column index
    pub vocabulary: HashMap<String, usize>,

    /// Per-column idf weight; length fixes the feature dimension
    pub idf: Vec<f64>,

    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_lowercase() -> bool {
    true
}

/// TF-IDF transformer with a fixed vocabulary
#[derive(Debug)]
pub struct TfidfTransformer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    lowercase: bool,
    stopwords: HashSet<String>,
    token_pattern: Regex,
}

impl TfidfTransformer {
    /// Build a transformer from a fitted artifact, validating that every
    /// vocabulary index falls inside the idf table.
    pub fn from_artifact(artifact: FittedArtifact, stopwords: &[String]) -> Result<Self> {
        let dim = artifact.idf.len();
        if let Some((token, &index)) = artifact
            .vocabulary
            .iter()
            .find(|(_, &index)| index >= dim)
        {
            return Err(Error::artifact(format!(
                "vocabulary entry '{}' has index {} but idf table has {} entries",
                token, index, dim
            )));
        }

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            lowercase: artifact.lowercase,
            stopwords: stopwords.iter().cloned().collect(),
            token_pattern: token_pattern(),
        })
    }

    /// Build a transformer from a bare vocabulary mapping. No idf weights
    /// exist for this path, so every term carries unit weight and the
    /// transform reduces to L2-normalized term counts.
    pub fn from_vocabulary(vocabulary: HashMap<String, usize>, stopwords: &[String]) -> Self {
        let dim = vocabulary.values().map(|&i| i + 1).max().unwrap_or(0);
        Self {
            vocabulary,
            idf: vec![1.0; dim],
            lowercase: true,
            stopwords: stopwords.iter().cloned().collect(),
            token_pattern: token_pattern(),
        }
    }

    /// Feature dimension
    pub fn dim(&self) -> usize {
        self.idf.len()
    }

    /// Transform one text into a sparse TF-IDF vector. Text with no
    /// in-vocabulary token yields the zero vector; that is valid input,
    /// not an error.
    pub fn transform(&self, text: &str) -> FeatureVector {
        let lowered;
        let text = if self.lowercase {
            lowered = text.to_lowercase();
            &lowered
        } else {
            text
        };

        // BTreeMap keeps indices sorted for the sparse representation.
        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in self.token_pattern.find_iter(text) {
            let token = token.as_str();
            if self.stopwords.contains(token) {
                continue;
            }
            if let Some(&index) = self.vocabulary.get(token) {
                *counts.entry(index).or_insert(0.0) += 1.0;
            }
        }

        let mut indices = Vec::with_capacity(counts.len());
        let mut values = Vec::with_capacity(counts.len());
        for (index, count) in counts {
            indices.push(index);
            values.push(count * self.idf[index]);
        }

        // L2 normalization, matching sklearn's norm="l2" default.
        let norm = values.iter().map(|v| v * v).sum::<f64>().sqrt();
        if norm > 0.0 {
            for value in &mut values {
                *value /= norm;
            }
        }

        FeatureVector {
            indices,
            values,
            dim: self.dim(),
        }
    }
}

/// Vectorizer state decided once at artifact-load time.
///
/// A closed set of variants dispatched by explicit match; there is no
/// runtime capability probing.
pub enum Vectorizer {
    /// Fitted transformer artifact used as-is
    Fitted(TfidfTransformer),

    /// Transformer constructed from a bare vocabulary mapping
    VocabOnly(TfidfTransformer),

    /// No usable artifact was found; transforms fail
    Unfit,
}

impl Vectorizer {
    /// Transform text into features. `Unfit` always fails here, never at
    /// load time.
    pub fn transform(&self, text: &str) -> Result<FeatureVector> {
        match self {
            Self::Fitted(transformer) | Self::VocabOnly(transformer) => {
                Ok(transformer.transform(text))
            }
            Self::Unfit => Err(Error::vectorize(
                "TF-IDF vectorizer is not fitted (no vocabulary artifact was loaded)",
            )),
        }
    }

    /// Health-check status: only a vectorizer that can actually transform
    /// counts as loaded.
    pub fn status(&self) -> ArtifactStatus {
        match self {
            Self::Fitted(_) | Self::VocabOnly(_) => ArtifactStatus::Loaded,
            Self::Unfit => ArtifactStatus::Missing,
        }
    }
}

/// sklearn's default token pattern: word characters, length >= 2
fn token_pattern() -> Regex {
    Regex::new(r"\b\w\w+\b").expect("token pattern is valid")
}
