use super::analysis_result::AnalysisResult;
use super::sentiment::Sentiment;

const LOW_CONFIDENCE_CEILING: f64 = 0.6;
const MEDIUM_CONFIDENCE_CEILING: f64 = 0.8;

/// Aggregate view over one analysed batch.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BatchSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub low_confidence: usize,
    pub medium_confidence: usize,
    pub high_confidence: usize,
    pub mean_confidence: f64,
}

impl BatchSummary {
    pub fn from_results(results: &[AnalysisResult]) -> Self {
        let mut summary = Self {
            total: results.len(),
            ..Self::default()
        };

        let mut confidence_sum = 0.0;
        for result in results {
            match result.sentiment {
                Sentiment::Positive => summary.positive += 1,
                Sentiment::Negative => summary.negative += 1,
                Sentiment::Neutral => summary.neutral += 1,
            }

            if result.confidence < LOW_CONFIDENCE_CEILING {
                summary.low_confidence += 1;
            } else if result.confidence < MEDIUM_CONFIDENCE_CEILING {
                summary.medium_confidence += 1;
            } else {
                summary.high_confidence += 1;
            }

            confidence_sum += result.confidence;
        }

        if !results.is_empty() {
            summary.mean_confidence = confidence_sum / results.len() as f64;
        }

        summary
    }

    pub fn count_for(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}
