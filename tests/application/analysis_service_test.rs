use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use sentiscope::application::ports::{ClassifierError, KeywordSource, SentimentClassifier};
use sentiscope::application::services::{AnalysisError, AnalysisService};
use sentiscope::domain::{Classification, LabelSource, Sentiment, TextEntry};
use sentiscope::infrastructure::sentiment::{KeywordExtractor, ScoringEngine};

const TEST_TIMEOUT: Duration = Duration::from_secs(5);
const TEST_CONCURRENCY: usize = 4;

struct UnavailableRemote;

#[async_trait::async_trait]
impl SentimentClassifier for UnavailableRemote {
    fn label_source(&self) -> LabelSource {
        LabelSource::Remote
    }

    async fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
        Err(ClassifierError::RemoteUnavailable("connection refused".to_string()))
    }
}

struct BrokenLocal;

#[async_trait::async_trait]
impl SentimentClassifier for BrokenLocal {
    fn label_source(&self) -> LabelSource {
        LabelSource::LocalFallback
    }

    async fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
        Err(ClassifierError::Internal("lexicon unavailable".to_string()))
    }
}

struct PanickingRemote;

#[async_trait::async_trait]
impl SentimentClassifier for PanickingRemote {
    fn label_source(&self) -> LabelSource {
        LabelSource::Remote
    }

    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        if text.contains("boom") {
            panic!("unexpected payload");
        }
        Ok(Classification::new(Sentiment::Positive, 0.9))
    }
}

struct OutOfRangeRemote;

#[async_trait::async_trait]
impl SentimentClassifier for OutOfRangeRemote {
    fn label_source(&self) -> LabelSource {
        LabelSource::Remote
    }

    async fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
        Ok(Classification::new(Sentiment::Positive, 1.5))
    }
}

struct HangingRemote;

#[async_trait::async_trait]
impl SentimentClassifier for HangingRemote {
    fn label_source(&self) -> LabelSource {
        LabelSource::Remote
    }

    async fn classify(&self, _text: &str) -> Result<Classification, ClassifierError> {
        std::future::pending::<()>().await;
        unreachable!()
    }
}

/// Finishes later for earlier entries so completion order is the reverse of input order.
struct StaggeredRemote;

#[async_trait::async_trait]
impl SentimentClassifier for StaggeredRemote {
    fn label_source(&self) -> LabelSource {
        LabelSource::Remote
    }

    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let position: u64 = text.trim_start_matches("entry ").parse().unwrap_or(0);
        tokio::time::sleep(Duration::from_millis(20 * (10 - position.min(10)))).await;
        Ok(Classification::new(Sentiment::Negative, 0.75))
    }
}

/// Answers immediately unless the text asks it to block.
struct SelectiveRemote;

#[async_trait::async_trait]
impl SentimentClassifier for SelectiveRemote {
    fn label_source(&self) -> LabelSource {
        LabelSource::Remote
    }

    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        if text.contains("block") {
            std::future::pending::<()>().await;
        }
        Ok(Classification::new(Sentiment::Positive, 0.88))
    }
}

struct FixedKeywords;

impl KeywordSource for FixedKeywords {
    fn keywords(&self, _text: &str, sentiment: Sentiment) -> Vec<String> {
        vec![sentiment.to_string()]
    }
}

fn service(strategies: Vec<Arc<dyn SentimentClassifier>>) -> AnalysisService {
    AnalysisService::new(
        strategies,
        Arc::new(KeywordExtractor::standard()),
        TEST_TIMEOUT,
        TEST_CONCURRENCY,
    )
}

fn manual_entries(texts: &[&str]) -> Vec<TextEntry> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| TextEntry::manual(text.to_string(), i + 1))
        .collect()
}

#[tokio::test]
async fn given_failing_remote_when_analyzing_batch_then_every_entry_falls_back_in_order() {
    let service = service(vec![
        Arc::new(UnavailableRemote),
        Arc::new(ScoringEngine::standard()),
    ]);
    let texts: Vec<String> = (1..=20).map(|i| format!("review number {} is great", i)).collect();
    let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();
    let entries = manual_entries(&text_refs);

    let results = service
        .analyze_batch(entries, CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(results.len(), 20);
    for (i, result) in results.iter().enumerate() {
        assert_eq!(result.entry.entry_index, i + 1);
        assert_eq!(result.entry.text, texts[i]);
        assert!(matches!(
            result.label_source,
            LabelSource::LocalFallback | LabelSource::ErrorFallback
        ));
        assert!((0.0..=1.0).contains(&result.confidence));
        assert!(result.keywords.len() <= 5);
    }
}

#[tokio::test]
async fn given_working_remote_when_analyzing_then_labels_are_remote() {
    let service = service(vec![
        Arc::new(SelectiveRemote),
        Arc::new(ScoringEngine::standard()),
    ]);

    let results = service
        .analyze_batch(manual_entries(&["ordinary text"]), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(results[0].label_source, LabelSource::Remote);
    assert_eq!(results[0].sentiment, Sentiment::Positive);
}

#[tokio::test]
async fn given_every_strategy_failing_when_analyzing_then_uses_safe_default() {
    let service = service(vec![Arc::new(UnavailableRemote), Arc::new(BrokenLocal)]);

    let results = service
        .analyze_batch(manual_entries(&["anything at all"]), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(results[0].label_source, LabelSource::ErrorFallback);
    assert_eq!(results[0].sentiment, Sentiment::Neutral);
    assert!((results[0].confidence - 0.6).abs() < 1e-9);
}

#[tokio::test]
async fn given_panicking_strategy_when_analyzing_then_only_that_entry_uses_safe_default() {
    let service = service(vec![
        Arc::new(PanickingRemote),
        Arc::new(ScoringEngine::standard()),
    ]);

    let results = service
        .analyze_batch(
            manual_entries(&["fine entry", "boom entry", "another fine entry"]),
            CancellationToken::new(),
        )
        .await
        .unwrap();

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].label_source, LabelSource::Remote);
    assert_eq!(results[1].label_source, LabelSource::ErrorFallback);
    assert!((results[1].confidence - 0.6).abs() < 1e-9);
    assert_eq!(results[2].label_source, LabelSource::Remote);
}

#[tokio::test]
async fn given_out_of_range_confidence_when_analyzing_then_next_strategy_is_used() {
    let service = service(vec![
        Arc::new(OutOfRangeRemote),
        Arc::new(ScoringEngine::standard()),
    ]);

    let results = service
        .analyze_batch(manual_entries(&["terrible support"]), CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(results[0].label_source, LabelSource::LocalFallback);
    assert_eq!(results[0].sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn given_hanging_remote_when_timeout_elapses_then_falls_back_to_local() {
    let service = AnalysisService::new(
        vec![Arc::new(HangingRemote), Arc::new(ScoringEngine::standard())],
        Arc::new(KeywordExtractor::standard()),
        Duration::from_millis(50),
        TEST_CONCURRENCY,
    );

    let results = tokio::time::timeout(
        Duration::from_secs(5),
        service.analyze_batch(
            manual_entries(&["I love it", "I hate it"]),
            CancellationToken::new(),
        ),
    )
    .await
    .expect("batch must not block on a hanging remote")
    .unwrap();

    assert!(results
        .iter()
        .all(|r| r.label_source == LabelSource::LocalFallback));
    assert_eq!(results[0].sentiment, Sentiment::Positive);
    assert_eq!(results[1].sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn given_reverse_completion_order_when_analyzing_then_output_keeps_input_order() {
    let service = AnalysisService::new(
        vec![Arc::new(StaggeredRemote)],
        Arc::new(KeywordExtractor::standard()),
        TEST_TIMEOUT,
        10,
    );
    let texts: Vec<String> = (1..=10).map(|i| format!("entry {}", i)).collect();
    let text_refs: Vec<&str> = texts.iter().map(String::as_str).collect();

    let results = service
        .analyze_batch(manual_entries(&text_refs), CancellationToken::new())
        .await
        .unwrap();

    let indices: Vec<usize> = results.iter().map(|r| r.entry.entry_index).collect();
    assert_eq!(indices, (1..=10).collect::<Vec<_>>());
}

#[tokio::test]
async fn given_empty_batch_when_analyzing_then_returns_empty_batch_error() {
    let service = service(vec![Arc::new(ScoringEngine::standard())]);

    let result = service
        .analyze_batch(Vec::new(), CancellationToken::new())
        .await;

    assert!(matches!(result, Err(AnalysisError::EmptyBatch)));
}

#[tokio::test]
async fn given_cancelled_token_when_analyzing_then_returns_no_results() {
    let service = service(vec![Arc::new(ScoringEngine::standard())]);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = service
        .analyze_batch(manual_entries(&["one", "two"]), cancel)
        .await;

    match result {
        Err(AnalysisError::Cancelled { completed }) => assert!(completed.is_empty()),
        other => panic!("expected cancellation, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn given_cancellation_mid_batch_when_analyzing_then_returns_completed_entries() {
    let service = AnalysisService::new(
        vec![Arc::new(SelectiveRemote)],
        Arc::new(KeywordExtractor::standard()),
        Duration::from_secs(60),
        1,
    );
    let cancel = CancellationToken::new();
    let trigger = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(200)).await;
        trigger.cancel();
    });

    let result = service
        .analyze_batch(
            manual_entries(&["quick answer", "block here", "never started"]),
            cancel,
        )
        .await;

    match result {
        Err(AnalysisError::Cancelled { completed }) => {
            assert_eq!(completed.len(), 1);
            assert_eq!(completed[0].entry.text, "quick answer");
            assert_eq!(completed[0].label_source, LabelSource::Remote);
        }
        other => panic!("expected cancellation, got {:?}", other.map(|r| r.len())),
    }
}

#[tokio::test]
async fn given_single_entry_when_analyzing_directly_then_attaches_keywords() {
    let service = service(vec![Arc::new(ScoringEngine::standard())]);

    let result = service
        .analyze_entry(TextEntry::manual(
            "Absolutely love the clean modern design".to_string(),
            1,
        ))
        .await;

    assert_eq!(result.sentiment, Sentiment::Positive);
    assert_eq!(result.keywords.first().map(String::as_str), Some("absolutely"));
}

#[tokio::test]
async fn given_custom_keyword_source_when_analysing_then_keywords_come_from_it() {
    let service = AnalysisService::new(
        vec![Arc::new(UnavailableRemote), Arc::new(BrokenLocal)],
        Arc::new(FixedKeywords),
        TEST_TIMEOUT,
        TEST_CONCURRENCY,
    );

    let result = service
        .analyze_entry(TextEntry::manual("whatever happens".to_string(), 1))
        .await;

    assert_eq!(result.label_source, LabelSource::ErrorFallback);
    assert_eq!(result.keywords, vec![Sentiment::Neutral.to_string()]);
}
