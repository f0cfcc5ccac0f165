use bullyguard_classifiers::{BullyingClassifier, CandidateAttempt};
use bullyguard_core::{ArtifactStatus, HealthReport};
use std::sync::Arc;

/// Shared application state.
///
/// Artifacts are loaded once in `main` and never mutated, so handlers share
/// them through `Arc` without locks.
#[derive(Clone)]
pub struct AppState {
    /// The classifier engine (vectorizer + model)
    pub classifier: Arc<BullyingClassifier>,

    /// Per-candidate vectorizer load log, kept for diagnostics
    pub load_attempts: Arc<Vec<CandidateAttempt>>,
}

impl AppState {
    pub fn new(classifier: BullyingClassifier, load_attempts: Vec<CandidateAttempt>) -> Self {
        Self {
            classifier: Arc::new(classifier),
            load_attempts: Arc::new(load_attempts),
        }
    }

    /// Snapshot of artifact readiness for the health endpoint
    pub fn health(&self) -> HealthReport {
        HealthReport {
            model: if self.classifier.model().is_some() {
                ArtifactStatus::Loaded
            } else {
                ArtifactStatus::Missing
            },
            vectorizer: self.classifier.vectorizer().status(),
        }
    }
}
