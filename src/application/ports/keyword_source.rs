use crate::domain::Sentiment;

/// Supplies the salient terms recorded on a result. Infallible: implementations fall back to
/// a fixed list rather than fail.
pub trait KeywordSource: Send + Sync {
    fn keywords(&self, text: &str, sentiment: Sentiment) -> Vec<String>;
}
