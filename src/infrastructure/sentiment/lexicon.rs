use std::collections::{HashMap, HashSet};
use std::sync::{Arc, LazyLock};

use crate::domain::{CATEGORY_PRECEDENCE, Sentiment};

const POSITIVE_TERMS: &[&str] = &[
    "love", "loves", "loved", "absolutely", "amazing", "fantastic", "excellent", "outstanding",
    "brilliant", "wonderful", "awesome", "perfect", "incredible", "superb", "magnificent",
    "impressive", "remarkable", "great", "good", "best", "better", "satisfied", "pleased",
    "happy", "delighted", "thrilled", "recommend", "recommended", "worth", "valuable", "helpful",
    "useful", "effective", "efficient", "intuitive", "easy", "simple", "clean", "modern",
    "smooth", "fast", "reliable", "works", "working", "solved", "saves", "saved", "impressed",
    "definitely", "super",
];

const NEGATIVE_TERMS: &[&str] = &[
    "hate", "hates", "hated", "terrible", "awful", "horrible", "worst", "bad", "poor",
    "pathetic", "useless", "worthless", "disgusting", "disappointing", "disappointed",
    "frustrated", "frustrating", "crashes", "buggy", "slow", "broken", "fails", "failed",
    "problem", "problems", "issue", "issues", "waste", "regret", "never", "unreliable",
    "annoying", "irritating", "confusing", "complicated", "constantly",
];

const NEUTRAL_TERMS: &[&str] = &[
    "okay", "average", "decent", "fine", "acceptable", "standard", "normal", "typical",
    "nothing", "some", "few", "maybe", "might", "could", "should", "compared", "similar",
];

const POSITIVE_BOOST: &[&str] = &[
    "love", "loves", "loved", "absolutely", "amazing", "fantastic", "excellent", "great",
    "wonderful", "awesome", "perfect", "brilliant", "outstanding", "superb", "impressed",
    "recommend", "satisfied", "intuitive", "easy", "helpful", "useful", "effective", "works",
    "solved", "saves", "worth", "clean", "modern", "reliable", "smooth", "fast", "definitely",
    "super", "value",
];

const NEGATIVE_BOOST: &[&str] = &[
    "hate", "hates", "terrible", "awful", "horrible", "worst", "bad", "poor", "useless",
    "disappointing", "disappointed", "frustrated", "regret", "waste", "crashes", "broken",
    "slow", "buggy", "unreliable", "failed", "problem", "problems", "issue", "issues", "never",
    "constantly", "annoying", "confusing", "complicated", "doesnt", "work",
];

const NEUTRAL_BOOST: &[&str] = &[
    "okay", "average", "decent", "fine", "standard", "normal", "typical", "compared", "similar",
    "some", "few", "nothing", "does", "says", "might", "could", "should",
];

const STOPWORDS: &[&str] = &[
    "the", "is", "at", "which", "on", "and", "a", "to", "are", "as", "was", "were", "been",
    "be", "have", "has", "had", "do", "does", "did", "will", "would", "should", "could", "can",
    "may", "might", "must", "shall", "this", "that", "these", "those", "i", "you", "he", "she",
    "it", "we", "they", "me", "him", "her", "us", "them", "my", "your", "his", "its", "our",
    "their", "in", "by", "for", "with", "without", "through", "during", "before", "after",
    "above", "below", "up", "down", "out", "off", "over", "under", "again", "further", "then",
    "once",
];

static STANDARD_LEXICON: LazyLock<Arc<LexiconStore>> = LazyLock::new(|| {
    Arc::new(LexiconStore::new(
        HashMap::from([
            (Sentiment::Positive, to_set(POSITIVE_TERMS)),
            (Sentiment::Negative, to_set(NEGATIVE_TERMS)),
            (Sentiment::Neutral, to_set(NEUTRAL_TERMS)),
        ]),
        HashMap::from([
            (Sentiment::Positive, to_set(POSITIVE_BOOST)),
            (Sentiment::Negative, to_set(NEGATIVE_BOOST)),
            (Sentiment::Neutral, to_set(NEUTRAL_BOOST)),
        ]),
        to_set(STOPWORDS),
    ))
});

/// Category vocabularies, keyword boost lists and stopwords. Read-only once built.
#[derive(Debug, Clone)]
pub struct LexiconStore {
    vocabularies: HashMap<Sentiment, HashSet<String>>,
    boost_terms: HashMap<Sentiment, HashSet<String>>,
    stopwords: HashSet<String>,
}

impl LexiconStore {
    pub fn new(
        vocabularies: HashMap<Sentiment, HashSet<String>>,
        boost_terms: HashMap<Sentiment, HashSet<String>>,
        stopwords: HashSet<String>,
    ) -> Self {
        Self {
            vocabularies,
            boost_terms,
            stopwords,
        }
    }

    /// The built-in English review lexicon, shared process-wide.
    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD_LEXICON)
    }

    /// First category, in [`CATEGORY_PRECEDENCE`] order, whose vocabulary holds `token`.
    pub fn category_of(&self, token: &str) -> Option<Sentiment> {
        CATEGORY_PRECEDENCE.into_iter().find(|category| {
            self.vocabularies
                .get(category)
                .is_some_and(|terms| terms.contains(token))
        })
    }

    pub fn boost_terms(&self, sentiment: Sentiment) -> Option<&HashSet<String>> {
        self.boost_terms.get(&sentiment)
    }

    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }
}

fn to_set(terms: &[&str]) -> HashSet<String> {
    terms.iter().map(|t| (*t).to_string()).collect()
}
