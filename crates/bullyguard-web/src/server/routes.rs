use crate::server::page;
use crate::state::AppState;
use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use bullyguard_classifiers::Classifier;
use serde::Deserialize;

// ============================================================================
// Classify page
// ============================================================================

pub async fn index() -> Html<String> {
    page::render(None, None, None)
}

#[derive(Debug, Deserialize)]
pub struct ClassifyForm {
    #[serde(default)]
    pub text: String,
}

/// Classify the submitted text and render the result page. Every failure is
/// shown as an error string on the page; bad input never produces a 5xx.
pub async fn classify(
    State(state): State<AppState>,
    Form(form): Form<ClassifyForm>,
) -> Html<String> {
    match state.classifier.classify(&form.text).await {
        Ok(result) => page::render(Some(result.label), result.score, None),
        Err(err) => page::render(None, None, Some(&err.to_string())),
    }
}

// ============================================================================
// Health endpoint
// ============================================================================

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let report = state.health();
    let status = if report.ok() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}
