use std::sync::{Arc, LazyLock};

use regex::Regex;

use crate::domain::Sentiment;

pub const PATTERN_WEIGHT: u32 = 3;

const POSITIVE_PATTERNS: &[&str] = &[
    r"absolutely\s+love",
    r"love\s+this",
    r"i\s+love",
    r"really\s+love",
    r"great\s+customer\s+support",
    r"excellent\s+value",
    r"worth\s+it",
    r"definitely\s+recommend",
    r"super\s+intuitive",
    r"makes.*easier",
    r"saved\s+me",
    r"solved.*in",
    r"i'm\s+impressed",
    r"clean.*modern",
    r"user.friendly",
    r"works\s+perfectly",
    r"definitely\s+worth",
];

const NEGATIVE_PATTERNS: &[&str] = &[
    r"crashes\s+constantly",
    r"terrible\s+experience",
    r"complete\s+waste",
    r"regret\s+paying",
    r"never\s+responds",
    r"doesn't\s+work",
    r"not\s+worth",
    r"slow.*buggy",
    r"waste\s+of\s+money",
    r"features\s+don't\s+work",
    r"can't\s+get\s+anything\s+done",
];

const NEUTRAL_PATTERNS: &[&str] = &[
    r"okay.*not\s+great",
    r"not\s+terrible\s+either",
    r"can't\s+really\s+judge",
    r"does\s+what\s+it\s+says",
    r"nothing\s+more",
    r"average\s+compared",
    r"some.*work.*others\s+need",
    r"few\s+times",
];

static STANDARD_PATTERNS: LazyLock<Arc<PatternSet>> = LazyLock::new(|| {
    let rules = [
        (Sentiment::Positive, POSITIVE_PATTERNS),
        (Sentiment::Negative, NEGATIVE_PATTERNS),
        (Sentiment::Neutral, NEUTRAL_PATTERNS),
    ]
    .into_iter()
    .flat_map(|(category, patterns)| {
        patterns.iter().map(move |pattern| {
            PatternRule::new(pattern, category, PATTERN_WEIGHT)
                .expect("built-in sentiment patterns are valid regexes")
        })
    })
    .collect();

    Arc::new(PatternSet::new(rules))
});

/// A case-insensitive phrase rule that adds `weight` to `category` when it matches.
#[derive(Debug, Clone)]
pub struct PatternRule {
    matcher: Regex,
    pub category: Sentiment,
    pub weight: u32,
}

impl PatternRule {
    pub fn new(pattern: &str, category: Sentiment, weight: u32) -> Result<Self, regex::Error> {
        Ok(Self {
            matcher: Regex::new(&format!("(?i){pattern}"))?,
            category,
            weight,
        })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }
}

/// Rules in evaluation order: positive, negative, then neutral, each in declaration order.
#[derive(Debug, Clone)]
pub struct PatternSet {
    rules: Vec<PatternRule>,
}

impl PatternSet {
    pub fn new(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    pub fn standard() -> Arc<Self> {
        Arc::clone(&STANDARD_PATTERNS)
    }

    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    /// Matching rules, in evaluation order.
    pub fn matching<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a PatternRule> + 'a {
        self.rules.iter().filter(move |rule| rule.matches(text))
    }
}
