use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

use crate::application::ports::{ClassifierError, KeywordSource, SentimentClassifier};
use crate::domain::{AnalysisResult, Classification, LabelSource, Sentiment, TextEntry};

use super::text_preview::preview_text;

pub const DEFAULT_MAX_CONCURRENCY: usize = 8;
pub const DEFAULT_CLASSIFIER_TIMEOUT: Duration = Duration::from_secs(5);

const SAFE_DEFAULT: Classification = Classification {
    sentiment: Sentiment::Neutral,
    confidence: 0.6,
};

/// Labels batches of entries through an ordered strategy chain, one isolated task per entry.
pub struct AnalysisService {
    chain: Arc<StrategyChain>,
    max_concurrency: usize,
}

struct StrategyChain {
    strategies: Vec<Arc<dyn SentimentClassifier>>,
    keyword_source: Arc<dyn KeywordSource>,
    classifier_timeout: Duration,
}

impl AnalysisService {
    pub fn new(
        strategies: Vec<Arc<dyn SentimentClassifier>>,
        keyword_source: Arc<dyn KeywordSource>,
        classifier_timeout: Duration,
        max_concurrency: usize,
    ) -> Self {
        Self {
            chain: Arc::new(StrategyChain {
                strategies,
                keyword_source,
                classifier_timeout,
            }),
            max_concurrency: max_concurrency.max(1),
        }
    }

    /// Analyses one entry in the calling task.
    pub async fn analyze_entry(&self, entry: TextEntry) -> AnalysisResult {
        self.chain.analyze(entry).await
    }

    /// Returns exactly one result per entry, in input order.
    ///
    /// If `cancel` fires first, running entries are aborted, pending ones are skipped,
    /// and the results that had already finished come back in
    /// [`AnalysisError::Cancelled`].
    #[tracing::instrument(skip(self, entries, cancel), fields(entry_count = entries.len()))]
    pub async fn analyze_batch(
        &self,
        entries: Vec<TextEntry>,
        cancel: CancellationToken,
    ) -> Result<Vec<AnalysisResult>, AnalysisError> {
        if entries.is_empty() {
            return Err(AnalysisError::EmptyBatch);
        }

        let total = entries.len();
        let semaphore = Arc::new(Semaphore::new(self.max_concurrency));
        let mut slots: Vec<Option<AnalysisResult>> = vec![None; total];
        let mut tasks = JoinSet::new();

        for (slot, entry) in entries.into_iter().enumerate() {
            let permit = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tasks.abort_all();
                    return Err(self.cancelled(slots, &mut tasks).await);
                }
                permit = semaphore.clone().acquire_owned() => match permit {
                    Ok(permit) => permit,
                    Err(e) => return Err(AnalysisError::Internal(e.to_string())),
                },
            };

            // Finished tasks are collected while dispatching so their slots fill early.
            while let Some(joined) = tasks.try_join_next() {
                store(&mut slots, joined);
            }

            let chain = Arc::clone(&self.chain);
            tasks.spawn(async move {
                let _permit = permit;
                (slot, chain.analyze_isolated(entry).await)
            });
        }

        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tasks.abort_all();
                    return Err(self.cancelled(slots, &mut tasks).await);
                }
                joined = tasks.join_next() => match joined {
                    Some(joined) => store(&mut slots, joined),
                    None => break,
                },
            }
        }

        let results: Vec<AnalysisResult> = slots.into_iter().flatten().collect();
        if results.len() != total {
            return Err(AnalysisError::Internal(format!(
                "{} of {} entries produced no result",
                total - results.len(),
                total
            )));
        }

        tracing::info!(result_count = results.len(), "Batch analysed");
        Ok(results)
    }

    async fn cancelled(
        &self,
        mut slots: Vec<Option<AnalysisResult>>,
        tasks: &mut JoinSet<(usize, AnalysisResult)>,
    ) -> AnalysisError {
        // Tasks that completed before the abort still report their result.
        while let Some(joined) = tasks.join_next().await {
            store(&mut slots, joined);
        }
        let completed: Vec<AnalysisResult> = slots.into_iter().flatten().collect();
        tracing::warn!(completed = completed.len(), "Batch analysis cancelled");
        AnalysisError::Cancelled { completed }
    }
}

fn store(
    slots: &mut [Option<AnalysisResult>],
    joined: Result<(usize, AnalysisResult), tokio::task::JoinError>,
) {
    match joined {
        Ok((slot, result)) => slots[slot] = Some(result),
        Err(e) if e.is_cancelled() => {}
        Err(e) => tracing::error!(error = %e, "Entry task failed outside the strategy chain"),
    }
}

impl StrategyChain {
    async fn analyze_isolated(&self, entry: TextEntry) -> AnalysisResult {
        let fallback_entry = entry.clone();
        match AssertUnwindSafe(self.analyze(entry)).catch_unwind().await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    entry_index = fallback_entry.entry_index,
                    "Entry analysis panicked, using safe default"
                );
                self.safe_default(fallback_entry)
            }
        }
    }

    async fn analyze(&self, entry: TextEntry) -> AnalysisResult {
        match self.classify(&entry.text).await {
            Some((classification, label_source)) => {
                let keywords = self
                    .keyword_source
                    .keywords(&entry.text, classification.sentiment);
                AnalysisResult::new(entry, classification, label_source, keywords)
            }
            None => self.safe_default(entry),
        }
    }

    /// First strategy to return an in-range classification wins.
    async fn classify(&self, text: &str) -> Option<(Classification, LabelSource)> {
        for strategy in &self.strategies {
            let label_source = strategy.label_source();
            let outcome = tokio::time::timeout(self.classifier_timeout, strategy.classify(text))
                .await
                .unwrap_or_else(|_| {
                    Err(ClassifierError::RemoteUnavailable(format!(
                        "timed out after {} ms",
                        self.classifier_timeout.as_millis()
                    )))
                });

            match outcome {
                Ok(classification) if classification.has_valid_confidence() => {
                    return Some((classification, label_source));
                }
                Ok(classification) => {
                    tracing::warn!(
                        strategy = %label_source,
                        confidence = classification.confidence,
                        "Strategy returned out-of-range confidence, trying next"
                    );
                }
                Err(e) => {
                    tracing::debug!(
                        strategy = %label_source,
                        error = %e,
                        text = %preview_text(text),
                        "Strategy failed, trying next"
                    );
                }
            }
        }
        None
    }

    fn safe_default(&self, entry: TextEntry) -> AnalysisResult {
        let keywords = self
            .keyword_source
            .keywords(&entry.text, SAFE_DEFAULT.sentiment);
        AnalysisResult::new(entry, SAFE_DEFAULT, LabelSource::ErrorFallback, keywords)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    #[error("no text entries to analyse")]
    EmptyBatch,
    #[error("analysis cancelled after {} entries completed", .completed.len())]
    Cancelled { completed: Vec<AnalysisResult> },
    #[error("analysis failed: {0}")]
    Internal(String),
}
