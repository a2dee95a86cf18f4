use std::sync::LazyLock;

use regex::Regex;

use crate::application::ports::TextSegmenter;
use crate::domain::{DeclaredType, Segment, SegmentType};

const MIN_SENTENCE_CHARS: usize = 11;
const MIN_SEGMENT_CHARS: usize = 6;

static PARAGRAPH_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());
static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.!?]+").unwrap());
static LOOSE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s{2,}|\n\s*\n").unwrap());

/// Punctuation and blank-line driven segmentation, see [`segment_text`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSegmenter;

impl TextSegmenter for RuleSegmenter {
    fn segment(&self, text: &str, declared_type: DeclaredType) -> Vec<Segment> {
        segment_text(text, declared_type)
    }
}

/// Cuts decoded text into segments according to how the input was declared.
///
/// Prose and recovered-document segments of five characters or fewer are dropped. Rows are
/// kept whenever they are non-empty once their enclosing quotes are gone, so short cells
/// such as `a,b` still become entries.
pub fn segment_text(text: &str, declared_type: DeclaredType) -> Vec<Segment> {
    match declared_type {
        DeclaredType::Tabular => split_rows(text),
        DeclaredType::PlainText => drop_fragments(split_prose(text)),
        DeclaredType::BinaryDocument => drop_fragments(split_recovered_document(text)),
    }
}

fn drop_fragments(segments: Vec<Segment>) -> Vec<Segment> {
    segments
        .into_iter()
        .filter(|segment| char_len(&segment.text) >= MIN_SEGMENT_CHARS)
        .collect()
}

fn split_rows(text: &str) -> Vec<Segment> {
    text.lines()
        .map(|line| strip_enclosing_quotes(line.trim()).trim())
        .filter(|line| !line.is_empty())
        .map(|line| Segment::new(line, SegmentType::Row))
        .collect()
}

fn strip_enclosing_quotes(line: &str) -> &str {
    line.strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(line)
}

fn split_prose(text: &str) -> Vec<Segment> {
    PARAGRAPH_BREAK
        .split(text)
        .filter(|paragraph| !paragraph.trim().is_empty())
        .flat_map(|paragraph| {
            let sentences = sentence_candidates(paragraph);
            if sentences.len() > 1 {
                sentences
                    .into_iter()
                    .map(|s| Segment::new(s, SegmentType::Sentence))
                    .collect()
            } else {
                vec![Segment::new(paragraph, SegmentType::Paragraph)]
            }
        })
        .collect()
}

fn split_recovered_document(text: &str) -> Vec<Segment> {
    let sentences = sentence_candidates(text);
    if sentences.len() > 1 {
        return sentences
            .into_iter()
            .map(|s| Segment::new(s, SegmentType::Sentence))
            .collect();
    }

    let blocks: Vec<&str> = LOOSE_BREAK
        .split(text)
        .filter(|block| char_len(block) >= MIN_SENTENCE_CHARS)
        .collect();

    if blocks.is_empty() {
        vec![Segment::new(text, SegmentType::Sentence)]
    } else {
        blocks
            .into_iter()
            .map(|b| Segment::new(b, SegmentType::Sentence))
            .collect()
    }
}

fn sentence_candidates(text: &str) -> Vec<&str> {
    SENTENCE_END
        .split(text)
        .filter(|sentence| char_len(sentence) >= MIN_SENTENCE_CHARS)
        .collect()
}

fn char_len(text: &str) -> usize {
    text.trim().chars().count()
}
