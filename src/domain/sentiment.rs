use std::fmt;
use std::str::FromStr;

/// One of the three canonical sentiment categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Order in which category vocabularies are consulted when a term belongs to more than one.
/// A token counts toward the first category in this list whose vocabulary contains it.
pub const CATEGORY_PRECEDENCE: [Sentiment; 3] =
    [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral];

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    /// Maps a remote classifier label onto a canonical category. Unknown labels are neutral.
    pub fn from_remote_label(label: &str) -> Self {
        match label {
            "LABEL_0" | "negative" => Sentiment::Negative,
            "LABEL_1" | "neutral" => Sentiment::Neutral,
            "LABEL_2" | "positive" => Sentiment::Positive,
            _ => Sentiment::Neutral,
        }
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            _ => Err(format!("Invalid sentiment: {}", s)),
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
