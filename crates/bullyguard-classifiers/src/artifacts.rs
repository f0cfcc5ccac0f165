//! Artifact discovery and loading
//!
//! All artifacts are read exactly once at process start. Loading failures
//! degrade capability (the health endpoint reports them) instead of
//! preventing startup.

use crate::model::LinearModel;
use crate::vectorizer::{FittedArtifact, TfidfTransformer, Vectorizer};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Vectorizer candidate filenames, tried in order. The third entry keeps
/// the misspelled name an existing deployment shipped under.
pub const VECTORIZER_CANDIDATES: [&str; 3] = [
    "tfidfmodel.json",
    "tfidfvectorizer.json",
    "tfidfvectoizer.json",
];

/// Default model artifact filename
pub const MODEL_FILENAME: &str = "linear_svc.json";

/// Default stopword filename
pub const STOPWORDS_FILENAME: &str = "stopwords.txt";

/// Outcome of probing one vectorizer candidate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome {
    /// Candidate file does not exist
    NotFound,

    /// File exists but could not be read or parsed as JSON
    ParseError(String),

    /// Valid JSON of a shape that is neither a fitted transformer nor a
    /// vocabulary mapping
    UnexpectedShape,

    /// Candidate was selected as the vectorizer
    Selected,
}

/// Record of one candidate attempt, kept for startup logging and tests
#[derive(Debug, Clone)]
pub struct CandidateAttempt {
    pub path: PathBuf,
    pub outcome: AttemptOutcome,
}

/// Load the stopword list. A missing file is expected and returns `None`;
/// an unreadable file is logged and treated the same way.
pub fn load_stopwords(path: impl AsRef<Path>) -> Option<Vec<String>> {
    let path = path.as_ref();
    if !path.exists() {
        return None;
    }
    match std::fs::read(path) {
        Ok(bytes) => Some(
            String::from_utf8_lossy(&bytes)
                .lines()
                .map(str::to_string)
                .collect(),
        ),
        Err(e) => {
            tracing::warn!("Failed to read stopword file {}: {}", path.display(), e);
            None
        }
    }
}

/// Try the vectorizer candidates in order and return the first usable
/// vectorizer, together with the per-candidate attempt log.
///
/// Selection policy per candidate: a fitted-transformer object is used
/// as-is; a bare token->index mapping constructs a new transformer with
/// the stopword list; anything else falls through to the next candidate,
/// as does any read or parse failure.
pub fn load_vectorizer(dir: &Path, stopwords: &[String]) -> (Vectorizer, Vec<CandidateAttempt>) {
    let mut attempts = Vec::with_capacity(VECTORIZER_CANDIDATES.len());

    for name in VECTORIZER_CANDIDATES {
        let path = dir.join(name);
        if !path.exists() {
            attempts.push(CandidateAttempt {
                path,
                outcome: AttemptOutcome::NotFound,
            });
            continue;
        }

        let value: serde_json::Value = match std::fs::read_to_string(&path)
            .map_err(|e| e.to_string())
            .and_then(|raw| serde_json::from_str(&raw).map_err(|e| e.to_string()))
        {
            Ok(value) => value,
            Err(e) => {
                attempts.push(CandidateAttempt {
                    path,
                    outcome: AttemptOutcome::ParseError(e),
                });
                continue;
            }
        };

        // Fitted transformer object first, then a bare vocabulary mapping.
        if let Ok(artifact) = serde_json::from_value::<FittedArtifact>(value.clone()) {
            match TfidfTransformer::from_artifact(artifact, stopwords) {
                Ok(transformer) => {
                    attempts.push(CandidateAttempt {
                        path,
                        outcome: AttemptOutcome::Selected,
                    });
                    return (Vectorizer::Fitted(transformer), attempts);
                }
                Err(e) => {
                    attempts.push(CandidateAttempt {
                        path,
                        outcome: AttemptOutcome::ParseError(e.to_string()),
                    });
                    continue;
                }
            }
        }

        if let Ok(vocabulary) = serde_json::from_value::<HashMap<String, usize>>(value) {
            attempts.push(CandidateAttempt {
                path,
                outcome: AttemptOutcome::Selected,
            });
            let transformer = TfidfTransformer::from_vocabulary(vocabulary, stopwords);
            return (Vectorizer::VocabOnly(transformer), attempts);
        }

        attempts.push(CandidateAttempt {
            path,
            outcome: AttemptOutcome::UnexpectedShape,
        });
    }

    tracing::warn!(
        "No fitted TF-IDF vectorizer found in {}; transform requests will fail",
        dir.display()
    );
    (Vectorizer::Unfit, attempts)
}

/// Load the classifier model from a single fixed path. No fallback chain:
/// one path, one attempt. Failures are logged and return `None`.
pub fn load_model(path: &Path) -> Option<LinearModel> {
    if !path.exists() {
        tracing::info!("Model file {} not found", path.display());
        return None;
    }

    let parsed = std::fs::read_to_string(path)
        .map_err(bullyguard_core::Error::from)
        .and_then(|raw| serde_json::from_str(&raw).map_err(bullyguard_core::Error::from));

    match parsed {
        Ok(model) => Some(model),
        Err(e) => {
            tracing::error!("Error loading model {}: {}", path.display(), e);
            None
        }
    }
}
