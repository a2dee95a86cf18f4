use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{ClassifierError, SentimentClassifier};
use crate::domain::{Classification, LabelSource, Sentiment};

pub const DEFAULT_MAX_INPUT_CHARS: usize = 500;

/// Client for a hosted text-classification inference endpoint.
pub struct RemoteClassifier {
    client: Client,
    endpoint: String,
    api_token: Option<String>,
    max_input_chars: usize,
}

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Hosted inference returns the distribution wrapped in an outer list; plain lists are
/// accepted as well.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Nested(Vec<Vec<LabelScore>>),
    Flat(Vec<LabelScore>),
}

impl InferenceResponse {
    fn into_distribution(self) -> Vec<LabelScore> {
        match self {
            InferenceResponse::Nested(outer) => outer.into_iter().next().unwrap_or_default(),
            InferenceResponse::Flat(scores) => scores,
        }
    }
}

impl RemoteClassifier {
    pub fn new(
        endpoint: &str,
        api_token: Option<String>,
        timeout: Duration,
        max_input_chars: usize,
    ) -> Result<Self, ClassifierError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClassifierError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint: endpoint.to_string(),
            api_token: api_token.filter(|t| !t.is_empty()),
            max_input_chars,
        })
    }

    fn truncate<'a>(&self, text: &'a str) -> &'a str {
        match text.char_indices().nth(self.max_input_chars) {
            Some((byte_index, _)) => &text[..byte_index],
            None => text,
        }
    }
}

fn select_top(distribution: Vec<LabelScore>) -> Result<Classification, ClassifierError> {
    let top = distribution
        .into_iter()
        .max_by(|a, b| a.score.total_cmp(&b.score))
        .ok_or_else(|| {
            ClassifierError::MalformedRemoteResponse("empty label distribution".to_string())
        })?;

    if !(0.0..=1.0).contains(&top.score) {
        return Err(ClassifierError::MalformedRemoteResponse(format!(
            "score out of range: {}",
            top.score
        )));
    }

    Ok(Classification::new(
        Sentiment::from_remote_label(&top.label),
        top.score,
    ))
}

#[async_trait]
impl SentimentClassifier for RemoteClassifier {
    fn label_source(&self) -> LabelSource {
        LabelSource::Remote
    }

    #[tracing::instrument(skip(self, text), fields(endpoint = %self.endpoint))]
    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let request_body = InferenceRequest {
            inputs: self.truncate(text),
        };

        let mut request = self.client.post(&self.endpoint).json(&request_body);
        if let Some(token) = &self.api_token {
            request = request.header("Authorization", format!("Bearer {}", token));
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClassifierError::RemoteUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::RemoteUnavailable(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let inference: InferenceResponse = response
            .json()
            .await
            .map_err(|e| ClassifierError::MalformedRemoteResponse(e.to_string()))?;

        let classification = select_top(inference.into_distribution())?;
        tracing::debug!(
            sentiment = %classification.sentiment,
            confidence = classification.confidence,
            "Remote classification complete"
        );
        Ok(classification)
    }
}
