//! Router-level tests for the BullyGuard web front-end

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use bullyguard_classifiers::{artifacts, BullyingClassifier, LinearModel, TfidfTransformer, Vectorizer};
use bullyguard_web::server::build_app;
use bullyguard_web::state::AppState;
use std::collections::HashMap;
use tower::ServiceExt;

fn test_vocabulary() -> HashMap<String, usize> {
    [("you", 0), ("are", 1), ("stupid", 2), ("ugly", 3)]
        .iter()
        .map(|&(token, index)| (token.to_string(), index))
        .collect()
}

fn test_model() -> LinearModel {
    LinearModel {
        weights: vec![0.0, 0.0, 2.0, 1.5],
        intercept: -0.5,
        platt: None,
    }
}

fn loaded_state() -> AppState {
    let transformer = TfidfTransformer::from_vocabulary(test_vocabulary(), &[]);
    AppState::new(
        BullyingClassifier::new(Vectorizer::VocabOnly(transformer), Some(test_model())),
        Vec::new(),
    )
}

fn model_less_state() -> AppState {
    let transformer = TfidfTransformer::from_vocabulary(test_vocabulary(), &[]);
    AppState::new(
        BullyingClassifier::new(Vectorizer::VocabOnly(transformer), None),
        Vec::new(),
    )
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn classify_request(text: &str) -> Request<Body> {
    let encoded: String = text
        .chars()
        .map(|c| if c == ' ' { '+' } else { c })
        .collect();
    Request::builder()
        .method("POST")
        .uri("/")
        .header(
            header::CONTENT_TYPE,
            "application/x-www-form-urlencoded",
        )
        .body(Body::from(format!("text={}", encoded)))
        .unwrap()
}

#[tokio::test]
async fn test_index_renders_form() {
    let app = build_app(loaded_state());

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("<form"));
}

#[tokio::test]
async fn test_classify_bullying_phrase() {
    let app = build_app(loaded_state());

    let response = app
        .oneshot(classify_request("you are stupid and ugly"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(">Bullying<"));
    assert!(body.contains("Confidence:"));
    assert!(!body.contains("class=\"error\""));
}

#[tokio::test]
async fn test_classify_benign_phrase() {
    let app = build_app(loaded_state());

    let response = app.oneshot(classify_request("you are")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(">Non-bullying<"));
}

#[tokio::test]
async fn test_classify_empty_text() {
    let app = build_app(loaded_state());

    let response = app.oneshot(classify_request("")).await.unwrap();

    // errors render on the page, never as a server error
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Please enter some text to classify."));
    assert!(!body.contains("class=\"label"));
}

#[tokio::test]
async fn test_classify_without_model() {
    let app = build_app(model_less_state());

    let response = app.oneshot(classify_request("you are stupid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains("Model not available on server."));
}

#[tokio::test]
async fn test_health_when_loaded() {
    let app = build_app(loaded_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(
        body,
        serde_json::json!({ "model": "loaded", "vectorizer": "loaded" })
    );
}

#[tokio::test]
async fn test_health_when_model_missing() {
    let app = build_app(model_less_state());

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(body["model"], "missing");
}

#[tokio::test]
async fn test_end_to_end_from_artifact_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("tfidfmodel.json"),
        r#"{
            "vocabulary": {"you": 0, "are": 1, "stupid": 2, "ugly": 3},
            "idf": [1.0, 1.0, 2.0, 2.0],
            "lowercase": true
        }"#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join(artifacts::MODEL_FILENAME),
        r#"{"weights": [0.0, 0.0, 2.0, 1.5], "intercept": -0.5}"#,
    )
    .unwrap();

    let (vectorizer, attempts) = artifacts::load_vectorizer(dir.path(), &[]);
    let model = artifacts::load_model(&dir.path().join(artifacts::MODEL_FILENAME));
    let state = AppState::new(BullyingClassifier::new(vectorizer, model), attempts);
    let app = build_app(state);

    let response = app
        .oneshot(classify_request("You are STUPID and ugly"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_string(response).await;
    assert!(body.contains(">Bullying<"));
}
