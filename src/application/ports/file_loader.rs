use async_trait::async_trait;

use crate::domain::Document;

/// Turns the raw bytes of an uploaded document into plain text.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("unsupported content type: {0}")]
    UnsupportedContentType(String),
    #[error("no readable text in {0}")]
    ContentUnreadable(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
}
