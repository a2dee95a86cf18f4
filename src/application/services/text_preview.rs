use std::sync::LazyLock;

use regex::Regex;

const MAX_VISIBLE_CHARS: usize = 100;

static CREDENTIAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?P<key>bearer\s+|api_key=|password=|secret=|token=)[^\s&"']+"#).unwrap()
});

/// Shortens entry text for log lines and masks anything that looks like a credential.
pub fn preview_text(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let char_count = trimmed.chars().count();
    let visible = if char_count > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{head}... ({char_count} chars total)")
    } else {
        trimmed.to_string()
    };

    CREDENTIAL
        .replace_all(&visible, "${key}[REDACTED]")
        .into_owned()
}
