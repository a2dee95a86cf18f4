use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

static SPACE_BEFORE_TERMINAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s(?P<mark>[.,!?])").unwrap());

/// Normalizes decoded prose while keeping its line and paragraph structure intact. Words
/// broken across lines are left as they are.
pub fn sanitize_extracted_text(raw: &str) -> String {
    let normalized: String = raw.nfkc().collect();

    let mut result = String::with_capacity(normalized.len());
    let mut prev_was_blank = false;
    let mut first_content = true;

    for line in normalized.lines() {
        let trimmed = line.trim();

        if trimmed.is_empty() {
            prev_was_blank = true;
        } else {
            if !first_content && prev_was_blank {
                result.push_str("\n\n");
            } else if !first_content {
                result.push('\n');
            }
            collapse_internal_whitespace(trimmed, &mut result);
            prev_was_blank = false;
            first_content = false;
        }
    }

    result.trim().to_string()
}

/// NFKC only; line breaks are significant for row-oriented input.
pub fn normalize_unicode(raw: &str) -> String {
    raw.nfkc().collect()
}

pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_RUN.replace_all(text, " ").into_owned()
}

/// Replaces every character rejected by `allowed` with a single space.
pub fn replace_disallowed(text: &str, allowed: impl Fn(char) -> bool) -> String {
    text.chars()
        .map(|c| if allowed(c) { c } else { ' ' })
        .collect()
}

pub fn remove_space_before_terminal(text: &str) -> String {
    SPACE_BEFORE_TERMINAL
        .replace_all(text, "$mark")
        .into_owned()
}

fn collapse_internal_whitespace(line: &str, out: &mut String) {
    let mut prev_was_space = false;

    for ch in line.chars() {
        if ch.is_whitespace() {
            if !prev_was_space {
                out.push(' ');
                prev_was_space = true;
            }
        } else {
            out.push(ch);
            prev_was_space = false;
        }
    }
}
