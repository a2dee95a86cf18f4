use std::fmt;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::document::DeclaredType;

/// One unit of text to classify, with its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct TextEntry {
    pub id: EntryId,
    pub text: String,
    pub source: EntrySource,
    pub entry_index: usize,
    pub timestamp: DateTime<Utc>,
    pub file_metadata: Option<FileMetadata>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryId(Uuid);

impl EntryId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileMetadata {
    pub original_file: String,
    pub declared_type: DeclaredType,
    pub segment_type: SegmentType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentType {
    Row,
    Sentence,
    Paragraph,
}

impl SegmentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentType::Row => "row",
            SegmentType::Sentence => "sentence",
            SegmentType::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for SegmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntrySource {
    Row,
    Sentence,
    Paragraph,
    Manual,
}

impl EntrySource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrySource::Row => "row",
            EntrySource::Sentence => "sentence",
            EntrySource::Paragraph => "paragraph",
            EntrySource::Manual => "manual",
        }
    }
}

impl From<SegmentType> for EntrySource {
    fn from(segment_type: SegmentType) -> Self {
        match segment_type {
            SegmentType::Row => EntrySource::Row,
            SegmentType::Sentence => EntrySource::Sentence,
            SegmentType::Paragraph => EntrySource::Paragraph,
        }
    }
}

impl fmt::Display for EntrySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TextEntry {
    /// Creates an entry typed in by the user rather than cut from a file.
    pub fn manual(text: String, entry_index: usize) -> Self {
        Self {
            id: EntryId::new(),
            text,
            source: EntrySource::Manual,
            entry_index,
            timestamp: Utc::now(),
            file_metadata: None,
        }
    }

    pub fn from_segment(
        text: String,
        entry_index: usize,
        segment_type: SegmentType,
        original_file: String,
        declared_type: DeclaredType,
    ) -> Self {
        Self {
            id: EntryId::new(),
            text,
            source: segment_type.into(),
            entry_index,
            timestamp: Utc::now(),
            file_metadata: Some(FileMetadata {
                original_file,
                declared_type,
                segment_type,
            }),
        }
    }
}
