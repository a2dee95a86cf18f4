mod keyword_extractor;
mod lexicon;
mod patterns;
mod scoring_engine;
mod tokenizer;

pub use keyword_extractor::{KeywordExtractionError, KeywordExtractor};
pub use lexicon::LexiconStore;
pub use patterns::{PATTERN_WEIGHT, PatternRule, PatternSet};
pub use scoring_engine::{ScoreBreakdown, ScoringEngine};
pub use tokenizer::tokenize;
