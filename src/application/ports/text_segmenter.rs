use crate::domain::{DeclaredType, Segment};

/// Cuts decoded document text into ordered segments.
pub trait TextSegmenter: Send + Sync {
    fn segment(&self, text: &str, declared_type: DeclaredType) -> Vec<Segment>;
}
