use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{ClassifierError, SentimentClassifier};
use crate::domain::{Classification, LabelSource, Sentiment};

use super::lexicon::LexiconStore;
use super::patterns::PatternSet;
use super::tokenizer::tokenize;

const WORD_WEIGHT: u32 = 1;

/// Per-category totals accumulated from word hits and pattern matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreBreakdown {
    pub positive: u32,
    pub negative: u32,
    pub neutral: u32,
}

impl ScoreBreakdown {
    fn add(&mut self, category: Sentiment, weight: u32) {
        match category {
            Sentiment::Positive => self.positive += weight,
            Sentiment::Negative => self.negative += weight,
            Sentiment::Neutral => self.neutral += weight,
        }
    }

    /// Turns the totals into a label. Rules are checked in order and the first one that
    /// holds decides.
    pub fn decide(&self) -> Classification {
        let (pos, neg, neu) = (self.positive, self.negative, self.neutral);

        if pos > neg && pos > neu {
            Classification::new(Sentiment::Positive, (0.75 + f64::from(pos) * 0.05).min(0.95))
        } else if neg > pos && neg > neu {
            Classification::new(Sentiment::Negative, (0.75 + f64::from(neg) * 0.05).min(0.95))
        } else if neu > 0 || (pos == 0 && neg == 0) {
            Classification::new(Sentiment::Neutral, (0.65 + f64::from(neu) * 0.03).min(0.85))
        } else if pos.abs_diff(neg) <= 1 {
            Classification::new(Sentiment::Neutral, 0.70)
        } else {
            // Not reachable through the branches above; kept as the exhaustive default.
            Classification::new(Sentiment::Neutral, 0.65)
        }
    }
}

/// Rule-based local classifier. Pure and total: every input yields a label.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    lexicon: Arc<LexiconStore>,
    patterns: Arc<PatternSet>,
}

impl ScoringEngine {
    pub fn new(lexicon: Arc<LexiconStore>, patterns: Arc<PatternSet>) -> Self {
        Self { lexicon, patterns }
    }

    pub fn standard() -> Self {
        Self::new(LexiconStore::standard(), PatternSet::standard())
    }

    pub fn score(&self, text: &str) -> ScoreBreakdown {
        let mut breakdown = ScoreBreakdown::default();

        for token in tokenize(text) {
            if let Some(category) = self.lexicon.category_of(&token) {
                breakdown.add(category, WORD_WEIGHT);
            }
        }

        for rule in self.patterns.matching(text) {
            breakdown.add(rule.category, rule.weight);
        }

        breakdown
    }

    pub fn evaluate(&self, text: &str) -> Classification {
        self.score(text).decide()
    }
}

#[async_trait]
impl SentimentClassifier for ScoringEngine {
    fn label_source(&self) -> LabelSource {
        LabelSource::LocalFallback
    }

    async fn classify(&self, text: &str) -> Result<Classification, ClassifierError> {
        let breakdown = self.score(text);
        let classification = breakdown.decide();
        tracing::trace!(
            positive = breakdown.positive,
            negative = breakdown.negative,
            neutral = breakdown.neutral,
            sentiment = %classification.sentiment,
            "Local scoring complete"
        );
        Ok(classification)
    }
}
