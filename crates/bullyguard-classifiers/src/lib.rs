//! BullyGuard Classifiers
//!
//! TF-IDF vectorization, linear-model inference, and artifact loading.
//!
//! Artifacts (vectorizer, model, stopwords) are opaque files produced by an
//! offline training pipeline; this crate only loads and applies them. All
//! loading happens once at process start and every failure degrades
//! capability instead of aborting.

pub mod artifacts;
pub mod classifier;
pub mod model;
pub mod vectorizer;

pub use artifacts::{
    load_model, load_stopwords, load_vectorizer, AttemptOutcome, CandidateAttempt,
    MODEL_FILENAME, STOPWORDS_FILENAME, VECTORIZER_CANDIDATES,
};
pub use classifier::{BullyingClassifier, Classifier};
pub use model::{margin_to_confidence, LinearModel, PlattScaling};
pub use vectorizer::{FeatureVector, FittedArtifact, TfidfTransformer, Vectorizer};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::artifacts::{load_model, load_stopwords, load_vectorizer};
    pub use crate::classifier::{BullyingClassifier, Classifier};
    pub use crate::model::LinearModel;
    pub use crate::vectorizer::{TfidfTransformer, Vectorizer};
}
