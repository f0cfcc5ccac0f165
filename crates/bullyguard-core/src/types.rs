//! Core types for BullyGuard

use serde::{Deserialize, Serialize};
use std::fmt;

/// Predicted class for a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Label {
    /// Class 1 in the underlying model
    Bullying,

    /// Any other class
    NonBullying,
}

impl Label {
    /// Map a raw model class to a label. Class 1 means bullying; every
    /// other class is treated as non-bullying.
    pub fn from_class(class: i64) -> Self {
        if class == 1 {
            Self::Bullying
        } else {
            Self::NonBullying
        }
    }

    /// Display string for the label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Bullying => "Bullying",
            Self::NonBullying => "Non-bullying",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying a single text
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// Predicted label
    pub label: Label,

    /// Confidence in [0, 1]. Probability of the predicted class when the
    /// model is calibrated, otherwise a bounded margin heuristic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Classification {
    /// Create a new classification outcome
    pub fn new(label: Label, score: Option<f64>) -> Self {
        Self { label, score }
    }
}

/// Whether an artifact made it off disk at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactStatus {
    Loaded,
    Missing,
}

/// Body of the `/health` endpoint
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HealthReport {
    /// Classifier model status
    pub model: ArtifactStatus,

    /// Vectorizer status
    pub vectorizer: ArtifactStatus,
}

impl HealthReport {
    /// Overall readiness: both artifacts loaded
    pub fn ok(&self) -> bool {
        self.model == ArtifactStatus::Loaded && self.vectorizer == ArtifactStatus::Loaded
    }
}
