mod analysis_service;
mod segment_extractor;
mod text_preview;

pub use analysis_service::{
    AnalysisError, AnalysisService, DEFAULT_CLASSIFIER_TIMEOUT, DEFAULT_MAX_CONCURRENCY,
};
pub use segment_extractor::{
    ExtractionError, SegmentExtractor, entries_from_manual_input, resolve_document,
};
pub use text_preview::preview_text;
