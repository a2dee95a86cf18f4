use async_trait::async_trait;

use crate::domain::{Classification, LabelSource};

/// One strategy in the per-entry classification chain.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Provenance recorded on results this strategy produces.
    fn label_source(&self) -> LabelSource;

    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError>;
}

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("remote classifier unavailable: {0}")]
    RemoteUnavailable(String),
    #[error("malformed remote response: {0}")]
    MalformedRemoteResponse(String),
    #[error("classification failed: {0}")]
    Internal(String),
}
