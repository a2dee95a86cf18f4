use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{ClassifierError, SentimentClassifier};
use crate::infrastructure::sentiment::ScoringEngine;
use crate::presentation::config::ClassifierSettings;

use super::RemoteClassifier;

#[derive(Debug, thiserror::Error)]
pub enum ClassifierChainFactoryError {
    #[error("classifier.endpoint is required when the remote classifier is enabled")]
    MissingEndpoint,
    #[error("classifier initialization failed: {0}")]
    InitializationFailed(#[from] ClassifierError),
}

pub struct ClassifierChainFactory;

impl ClassifierChainFactory {
    /// Remote classifier first (when enabled), then the local scoring engine.
    pub fn create(
        settings: &ClassifierSettings,
    ) -> Result<Vec<Arc<dyn SentimentClassifier>>, ClassifierChainFactoryError> {
        let mut chain: Vec<Arc<dyn SentimentClassifier>> = Vec::with_capacity(2);

        if settings.enabled {
            let endpoint = settings
                .endpoint
                .as_deref()
                .filter(|e| !e.is_empty())
                .ok_or(ClassifierChainFactoryError::MissingEndpoint)?;
            tracing::info!(endpoint, "Remote sentiment classifier enabled");
            chain.push(Arc::new(RemoteClassifier::new(
                endpoint,
                settings.api_token.clone(),
                Duration::from_millis(settings.timeout_ms),
                settings.max_input_chars,
            )?));
        } else {
            tracing::info!("Remote sentiment classifier disabled, using local scoring only");
        }

        chain.push(Arc::new(ScoringEngine::standard()));
        Ok(chain)
    }
}
