use super::text_entry::SegmentType;

/// One contiguous slice of a document, already trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub segment_type: SegmentType,
}

impl Segment {
    pub fn new(text: &str, segment_type: SegmentType) -> Self {
        Self {
            text: text.trim().to_string(),
            segment_type,
        }
    }
}
