mod analysis_result;
mod batch_summary;
mod document;
mod segment;
mod sentiment;
mod text_entry;

pub use analysis_result::{AnalysisResult, Classification, LabelSource};
pub use batch_summary::BatchSummary;
pub use document::{DeclaredType, Document, DocumentId};
pub use segment::Segment;
pub use sentiment::{CATEGORY_PRECEDENCE, Sentiment};
pub use text_entry::{EntryId, EntrySource, FileMetadata, SegmentType, TextEntry};
