//! Linear decision-function model and confidence mapping

use crate::vectorizer::FeatureVector;
use bullyguard_core::{Error, Result};
use serde::Deserialize;

/// Platt-scaling parameters. When present the model can emit calibrated
/// class probabilities; without them only the raw margin is available.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PlattScaling {
    pub a: f64,
    pub b: f64,
}

/// Pre-trained linear binary classifier.
///
/// `weights` length fixes the expected feature dimension. Class 1 is the
/// positive (bullying) class.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub weights: Vec<f64>,
    pub intercept: f64,

    #[serde(default)]
    pub platt: Option<PlattScaling>,
}

impl LinearModel {
    /// Signed distance from the decision boundary: `w . x + b`
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64> {
        if features.dim != self.weights.len() {
            return Err(Error::prediction(format!(
                "feature vector has {} dimensions but model expects {}",
                features.dim,
                self.weights.len()
            )));
        }

        let mut margin = self.intercept;
        for (&index, &value) in features.indices.iter().zip(&features.values) {
            margin += self.weights[index] * value;
        }
        Ok(margin)
    }

    /// Predicted class: 1 for a positive margin, 0 otherwise
    pub fn predict(&self, features: &FeatureVector) -> Result<i64> {
        Ok(i64::from(self.decision_function(features)? > 0.0))
    }

    /// Probability of class 1 for a given margin, when the model carries
    /// Platt calibration.
    pub fn predict_proba(&self, margin: f64) -> Option<f64> {
        self.platt
            .map(|platt| 1.0 / (1.0 + (platt.a * margin + platt.b).exp()))
    }

    /// Display confidence for the predicted class. Calibrated probability
    /// when available, otherwise the bounded margin heuristic.
    pub fn confidence(&self, margin: f64, class: i64) -> f64 {
        match self.predict_proba(margin) {
            Some(p_positive) => {
                if class == 1 {
                    p_positive
                } else {
                    1.0 - p_positive
                }
            }
            None => margin_to_confidence(margin),
        }
    }
}

/// Map a raw decision margin to a bounded display value in (0, 1].
///
/// Strictly decreasing in |margin|; reaches 1 only at the boundary. This
/// is a heuristic, not a calibrated probability.
pub fn margin_to_confidence(margin: f64) -> f64 {
    1.0 / (1.0 + margin.abs())
}
