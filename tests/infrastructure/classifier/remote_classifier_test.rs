use std::time::Duration;

use axum::Json;
use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use sentiscope::application::ports::{ClassifierError, SentimentClassifier};
use sentiscope::domain::{LabelSource, Sentiment};
use sentiscope::infrastructure::classifier::{DEFAULT_MAX_INPUT_CHARS, RemoteClassifier};

async fn spawn_inference_server() -> String {
    let router = Router::new()
        .route(
            "/nested",
            post(|| async {
                Json(json!([[
                    {"label": "LABEL_0", "score": 0.05},
                    {"label": "LABEL_1", "score": 0.15},
                    {"label": "LABEL_2", "score": 0.80}
                ]]))
            }),
        )
        .route(
            "/flat",
            post(|| async {
                Json(json!([
                    {"label": "negative", "score": 0.91},
                    {"label": "positive", "score": 0.09}
                ]))
            }),
        )
        .route(
            "/echo-length",
            post(|Json(body): Json<Value>| async move {
                let chars = body["inputs"].as_str().unwrap_or_default().chars().count();
                let label = if chars == 3 { "positive" } else { "negative" };
                Json(json!([{"label": label, "score": 0.7}]))
            }),
        )
        .route(
            "/auth",
            post(|headers: HeaderMap| async move {
                let authorized = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    == Some("Bearer secret-token");
                if authorized {
                    (StatusCode::OK, Json(json!([{"label": "neutral", "score": 0.6}])))
                } else {
                    (StatusCode::UNAUTHORIZED, Json(json!({"error": "unauthorized"})))
                }
            }),
        )
        .route(
            "/error",
            post(|| async { (StatusCode::SERVICE_UNAVAILABLE, "model loading") }),
        )
        .route(
            "/garbage",
            post(|| async { Json(json!({"unexpected": true})) }),
        )
        .route("/empty", post(|| async { Json(json!([])) }))
        .route(
            "/out-of-range",
            post(|| async { Json(json!([{"label": "LABEL_2", "score": 3.5}])) }),
        )
        .route(
            "/slow",
            post(|| async {
                tokio::time::sleep(Duration::from_secs(2)).await;
                Json(json!([{"label": "positive", "score": 0.9}]))
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}", addr)
}

fn classifier(base_url: &str, path: &str) -> RemoteClassifier {
    RemoteClassifier::new(
        &format!("{}{}", base_url, path),
        None,
        Duration::from_secs(5),
        DEFAULT_MAX_INPUT_CHARS,
    )
    .unwrap()
}

#[tokio::test]
async fn given_nested_distribution_when_classifying_then_picks_top_label() {
    let base_url = spawn_inference_server().await;

    let result = classifier(&base_url, "/nested")
        .classify("I love it")
        .await
        .unwrap();

    assert_eq!(result.sentiment, Sentiment::Positive);
    assert!((result.confidence - 0.80).abs() < 1e-9);
}

#[tokio::test]
async fn given_flat_distribution_with_named_labels_when_classifying_then_maps_label() {
    let base_url = spawn_inference_server().await;

    let result = classifier(&base_url, "/flat")
        .classify("Awful")
        .await
        .unwrap();

    assert_eq!(result.sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn given_long_input_when_classifying_then_sends_truncated_text() {
    let base_url = spawn_inference_server().await;
    let classifier = RemoteClassifier::new(
        &format!("{}/echo-length", base_url),
        None,
        Duration::from_secs(5),
        3,
    )
    .unwrap();

    let result = classifier.classify("ünïcode input").await.unwrap();

    assert_eq!(result.sentiment, Sentiment::Positive);
}

#[tokio::test]
async fn given_api_token_when_classifying_then_sends_bearer_header() {
    let base_url = spawn_inference_server().await;
    let classifier = RemoteClassifier::new(
        &format!("{}/auth", base_url),
        Some("secret-token".to_string()),
        Duration::from_secs(5),
        DEFAULT_MAX_INPUT_CHARS,
    )
    .unwrap();

    let result = classifier.classify("fine").await.unwrap();

    assert_eq!(result.sentiment, Sentiment::Neutral);
    assert_eq!(classifier.label_source(), LabelSource::Remote);
}

#[tokio::test]
async fn given_missing_token_when_endpoint_requires_auth_then_returns_unavailable() {
    let base_url = spawn_inference_server().await;

    let result = classifier(&base_url, "/auth").classify("fine").await;

    assert!(matches!(result, Err(ClassifierError::RemoteUnavailable(_))));
}

#[tokio::test]
async fn given_server_error_when_classifying_then_returns_unavailable() {
    let base_url = spawn_inference_server().await;

    let result = classifier(&base_url, "/error").classify("text").await;

    assert!(matches!(
        result,
        Err(ClassifierError::RemoteUnavailable(msg)) if msg.contains("503")
    ));
}

#[tokio::test]
async fn given_unexpected_json_when_classifying_then_returns_malformed() {
    let base_url = spawn_inference_server().await;

    let result = classifier(&base_url, "/garbage").classify("text").await;

    assert!(matches!(
        result,
        Err(ClassifierError::MalformedRemoteResponse(_))
    ));
}

#[tokio::test]
async fn given_empty_distribution_when_classifying_then_returns_malformed() {
    let base_url = spawn_inference_server().await;

    let result = classifier(&base_url, "/empty").classify("text").await;

    assert!(matches!(
        result,
        Err(ClassifierError::MalformedRemoteResponse(_))
    ));
}

#[tokio::test]
async fn given_slow_server_when_client_timeout_elapses_then_returns_unavailable() {
    let base_url = spawn_inference_server().await;
    let classifier = RemoteClassifier::new(
        &format!("{}/slow", base_url),
        None,
        Duration::from_millis(100),
        DEFAULT_MAX_INPUT_CHARS,
    )
    .unwrap();

    let result = classifier.classify("text").await;

    assert!(matches!(result, Err(ClassifierError::RemoteUnavailable(_))));
}

#[tokio::test]
async fn given_unreachable_endpoint_when_classifying_then_returns_unavailable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let result = classifier(&format!("http://{}", addr), "/nested")
        .classify("text")
        .await;

    assert!(matches!(result, Err(ClassifierError::RemoteUnavailable(_))));
}

#[tokio::test]
async fn given_score_above_one_when_classifying_then_returns_malformed() {
    let base_url = spawn_inference_server().await;

    let result = classifier(&base_url, "/out-of-range").classify("text").await;

    assert!(matches!(
        result,
        Err(ClassifierError::MalformedRemoteResponse(_))
    ));
}
