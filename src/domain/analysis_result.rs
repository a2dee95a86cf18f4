use std::fmt;

use super::sentiment::Sentiment;
use super::text_entry::TextEntry;

/// Label and confidence produced by a single classification strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    pub sentiment: Sentiment,
    pub confidence: f64,
}

impl Classification {
    pub fn new(sentiment: Sentiment, confidence: f64) -> Self {
        Self {
            sentiment,
            confidence,
        }
    }

    pub fn has_valid_confidence(&self) -> bool {
        (0.0..=1.0).contains(&self.confidence)
    }
}

/// Which link of the fallback chain produced the label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelSource {
    Remote,
    LocalFallback,
    ErrorFallback,
}

impl LabelSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            LabelSource::Remote => "remote",
            LabelSource::LocalFallback => "local_fallback",
            LabelSource::ErrorFallback => "error_fallback",
        }
    }
}

impl fmt::Display for LabelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisResult {
    pub entry: TextEntry,
    pub sentiment: Sentiment,
    pub confidence: f64,
    pub label_source: LabelSource,
    pub keywords: Vec<String>,
}

impl AnalysisResult {
    pub fn new(
        entry: TextEntry,
        classification: Classification,
        label_source: LabelSource,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            entry,
            sentiment: classification.sentiment,
            confidence: classification.confidence,
            label_source,
            keywords,
        }
    }
}
