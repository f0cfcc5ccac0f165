//! Classifier trait and the bullying classification engine

use crate::model::LinearModel;
use crate::vectorizer::Vectorizer;
use async_trait::async_trait;
use bullyguard_core::{Classification, Error, Label, Result};

/// Trait for all classifiers
#[async_trait]
pub trait Classifier: Send + Sync {
    /// Classify the given text
    async fn classify(&self, text: &str) -> Result<Classification>;

    /// Get the classifier name
    fn name(&self) -> &str;
}

/// TF-IDF + linear-model bullying classifier.
///
/// Holds the artifacts loaded at startup; never mutated afterwards, so a
/// single instance is shared by every request handler.
pub struct BullyingClassifier {
    name: String,
    vectorizer: Vectorizer,
    model: Option<LinearModel>,
}

impl BullyingClassifier {
    pub fn new(vectorizer: Vectorizer, model: Option<LinearModel>) -> Self {
        Self {
            name: "bullying".to_string(),
            vectorizer,
            model,
        }
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    pub fn model(&self) -> Option<&LinearModel> {
        self.model.as_ref()
    }

    /// The inference pipeline: empty-input check, vectorize, model check,
    /// predict, score. Each failure is terminal for the request.
    fn classify_text(&self, text: &str) -> Result<Classification> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::EmptyInput);
        }

        let features = self.vectorizer.transform(text)?;

        let model = self.model.as_ref().ok_or(Error::ModelUnavailable)?;
        let margin = model.decision_function(&features)?;
        let class = i64::from(margin > 0.0);

        Ok(Classification::new(
            Label::from_class(class),
            Some(model.confidence(margin, class)),
        ))
    }
}

#[async_trait]
impl Classifier for BullyingClassifier {
    async fn classify(&self, text: &str) -> Result<Classification> {
        let result = self.classify_text(text);
        if let Ok(classification) = &result {
            tracing::debug!(
                label = classification.label.as_str(),
                score = classification.score,
                "classified text"
            );
        }
        result
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PlattScaling;
    use crate::vectorizer::TfidfTransformer;
    use std::collections::HashMap;

    fn test_vocabulary() -> HashMap<String, usize> {
        [("you", 0), ("are", 1), ("stupid", 2), ("ugly", 3)]
            .iter()
            .map(|&(token, index)| (token.to_string(), index))
            .collect()
    }

    /// Weights that put insult terms firmly in class 1
    fn test_model() -> LinearModel {
        LinearModel {
            weights: vec![0.0, 0.0, 2.0, 1.5],
            intercept: -0.5,
            platt: None,
        }
    }

    fn engine() -> BullyingClassifier {
        let transformer = TfidfTransformer::from_vocabulary(test_vocabulary(), &[]);
        BullyingClassifier::new(Vectorizer::VocabOnly(transformer), Some(test_model()))
    }

    #[tokio::test]
    async fn test_bullying_phrase() {
        let result = engine().classify("you are stupid and ugly").await.unwrap();
        assert_eq!(result.label, Label::Bullying);
        let score = result.score.unwrap();
        assert!(score > 0.0 && score <= 1.0);
    }

    #[tokio::test]
    async fn test_benign_phrase() {
        let result = engine().classify("you are").await.unwrap();
        assert_eq!(result.label, Label::NonBullying);
    }

    #[tokio::test]
    async fn test_empty_and_whitespace_input() {
        let classifier = engine();
        for text in ["", "   ", "\n\t "] {
            let err = classifier.classify(text).await.unwrap_err();
            assert!(matches!(err, Error::EmptyInput));
            assert_eq!(err.to_string(), "Please enter some text to classify.");
        }
    }

    #[tokio::test]
    async fn test_unfit_vectorizer_stops_before_prediction() {
        // No model either; the vectorization error must win.
        let classifier = BullyingClassifier::new(Vectorizer::Unfit, None);
        let err = classifier.classify("some text").await.unwrap_err();
        assert!(matches!(err, Error::Vectorize(_)));
    }

    #[tokio::test]
    async fn test_missing_model() {
        let transformer = TfidfTransformer::from_vocabulary(test_vocabulary(), &[]);
        let classifier = BullyingClassifier::new(Vectorizer::VocabOnly(transformer), None);

        let err = classifier.classify("you are stupid").await.unwrap_err();
        assert!(matches!(err, Error::ModelUnavailable));
        assert_eq!(err.to_string(), "Model not available on server.");
    }

    #[tokio::test]
    async fn test_out_of_vocabulary_text_classifies_on_intercept() {
        // Zero feature vector leaves only the negative intercept.
        let result = engine().classify("completely unrelated words").await.unwrap();
        assert_eq!(result.label, Label::NonBullying);
        // margin heuristic at |margin| = 0.5
        assert!((result.score.unwrap() - 1.0 / 1.5).abs() < 1e-12);
    }

    #[tokio::test]
    async fn test_calibrated_model_reports_probability() {
        let mut model = test_model();
        model.platt = Some(PlattScaling { a: -1.0, b: 0.0 });
        let transformer = TfidfTransformer::from_vocabulary(test_vocabulary(), &[]);
        let classifier =
            BullyingClassifier::new(Vectorizer::VocabOnly(transformer), Some(model));

        let result = classifier.classify("you are stupid and ugly").await.unwrap();
        assert_eq!(result.label, Label::Bullying);
        let score = result.score.unwrap();
        assert!((0.0..=1.0).contains(&score));
        // calibrated with a = -1, b = 0 a positive margin means p > 0.5
        assert!(score > 0.5);
    }

    #[tokio::test]
    async fn test_dimension_mismatch_is_prediction_error() {
        let transformer = TfidfTransformer::from_vocabulary(test_vocabulary(), &[]);
        let model = LinearModel {
            weights: vec![1.0],
            intercept: 0.0,
            platt: None,
        };
        let classifier = BullyingClassifier::new(Vectorizer::VocabOnly(transformer), Some(model));

        let err = classifier.classify("you are stupid").await.unwrap_err();
        assert!(matches!(err, Error::Prediction(_)));
        assert!(err.to_string().starts_with("Prediction error:"));
    }
}
