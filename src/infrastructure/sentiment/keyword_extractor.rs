use std::collections::HashMap;
use std::sync::Arc;

use crate::application::ports::KeywordSource;
use crate::domain::Sentiment;

use super::lexicon::LexiconStore;
use super::tokenizer::tokenize;

const MAX_KEYWORDS: usize = 5;
const BOOST: usize = 3;
const FALLBACK_KEYWORDS: [&str; 2] = ["text", "analysis"];

#[derive(Debug, thiserror::Error)]
pub enum KeywordExtractionError {
    #[error("no boost vocabulary for sentiment {0}")]
    MissingBoostTerms(Sentiment),
}

/// Picks the most salient terms of an entry, favouring words that support its label.
#[derive(Debug, Clone)]
pub struct KeywordExtractor {
    lexicon: Arc<LexiconStore>,
}

impl KeywordExtractor {
    pub fn new(lexicon: Arc<LexiconStore>) -> Self {
        Self { lexicon }
    }

    pub fn standard() -> Self {
        Self::new(LexiconStore::standard())
    }

    /// Never fails: any extraction error yields the fixed `["text", "analysis"]` pair.
    pub fn extract(&self, text: &str, sentiment: Sentiment) -> Vec<String> {
        match self.try_extract(text, sentiment) {
            Ok(keywords) => keywords,
            Err(e) => {
                tracing::warn!(error = %e, "Keyword extraction failed, using fallback keywords");
                FALLBACK_KEYWORDS.iter().map(|k| (*k).to_string()).collect()
            }
        }
    }

    pub fn try_extract(
        &self,
        text: &str,
        sentiment: Sentiment,
    ) -> Result<Vec<String>, KeywordExtractionError> {
        let boost_terms = self
            .lexicon
            .boost_terms(sentiment)
            .ok_or(KeywordExtractionError::MissingBoostTerms(sentiment))?;

        // Insertion order doubles as first-occurrence order for tie breaking.
        let mut counted: Vec<(String, usize)> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();

        for token in tokenize(text) {
            if self.lexicon.is_stopword(&token) {
                continue;
            }
            match positions.get(&token) {
                Some(&at) => counted[at].1 += 1,
                None => {
                    positions.insert(token.clone(), counted.len());
                    counted.push((token, 1));
                }
            }
        }

        let mut scored: Vec<(String, usize)> = counted
            .into_iter()
            .map(|(token, frequency)| {
                let score = if boost_terms.contains(&token) {
                    frequency + BOOST
                } else {
                    frequency
                };
                (token, score)
            })
            .collect();

        // Stable sort keeps first-occurrence order among equal scores.
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        Ok(scored
            .into_iter()
            .take(MAX_KEYWORDS)
            .map(|(token, _)| token)
            .collect())
    }
}

impl KeywordSource for KeywordExtractor {
    fn keywords(&self, text: &str, sentiment: Sentiment) -> Vec<String> {
        self.extract(text, sentiment)
    }
}
