use std::sync::Arc;

use crate::application::ports::FileLoader;
use crate::application::services::{AnalysisService, SegmentExtractor};

pub struct AppState<F>
where
    F: FileLoader,
{
    pub segment_extractor: Arc<SegmentExtractor<F>>,
    pub analysis_service: Arc<AnalysisService>,
}

impl<F> Clone for AppState<F>
where
    F: FileLoader,
{
    fn clone(&self) -> Self {
        Self {
            segment_extractor: Arc::clone(&self.segment_extractor),
            analysis_service: Arc::clone(&self.analysis_service),
        }
    }
}
