use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, TextSegmenter};
use crate::domain::{DeclaredType, Document, TextEntry};

/// Turns uploaded documents and pasted text into indexed entries ready for analysis.
pub struct SegmentExtractor<F>
where
    F: FileLoader,
{
    file_loader: Arc<F>,
    segmenter: Arc<dyn TextSegmenter>,
}

impl<F> SegmentExtractor<F>
where
    F: FileLoader,
{
    pub fn new(file_loader: Arc<F>, segmenter: Arc<dyn TextSegmenter>) -> Self {
        Self {
            file_loader,
            segmenter,
        }
    }

    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            declared_type = document.declared_type.as_mime(),
        )
    )]
    pub async fn extract(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<Vec<TextEntry>, ExtractionError> {
        let text = self.file_loader.extract_text(data, document).await?;

        let entries: Vec<TextEntry> = self
            .segmenter
            .segment(&text, document.declared_type)
            .into_iter()
            .enumerate()
            .map(|(position, segment)| {
                TextEntry::from_segment(
                    segment.text,
                    position + 1,
                    segment.segment_type,
                    document.filename.clone(),
                    document.declared_type,
                )
            })
            .collect();

        if entries.is_empty() {
            tracing::warn!("No segments survived filtering");
            return Err(ExtractionError::EmptyBatch);
        }

        tracing::info!(entry_count = entries.len(), "Document segmented");
        Ok(entries)
    }
}

/// Builds a [`Document`] from upload metadata. See [`DeclaredType::resolve`] for precedence.
pub fn resolve_document(
    filename: &str,
    mime: Option<&str>,
    size_bytes: u64,
) -> Result<Document, ExtractionError> {
    let declared_type = DeclaredType::resolve(mime, filename).ok_or_else(|| {
        ExtractionError::InvalidFileFormat(mime.unwrap_or(filename).to_string())
    })?;
    Ok(Document::new(filename.to_string(), declared_type, size_bytes))
}

/// Splits pasted input into one entry per non-empty line.
pub fn entries_from_manual_input(text: &str) -> Result<Vec<TextEntry>, ExtractionError> {
    let entries: Vec<TextEntry> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .enumerate()
        .map(|(position, line)| TextEntry::manual(line.to_string(), position + 1))
        .collect();

    if entries.is_empty() {
        return Err(ExtractionError::EmptyBatch);
    }

    Ok(entries)
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractionError {
    #[error("invalid file format: {0}")]
    InvalidFileFormat(String),
    #[error("content unreadable: {0}")]
    ContentUnreadable(String),
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("no text entries to analyse")]
    EmptyBatch,
}

impl From<FileLoaderError> for ExtractionError {
    fn from(error: FileLoaderError) -> Self {
        match error {
            FileLoaderError::UnsupportedContentType(t) => ExtractionError::InvalidFileFormat(t),
            FileLoaderError::ContentUnreadable(f) => ExtractionError::ContentUnreadable(f),
            FileLoaderError::ExtractionFailed(m) => ExtractionError::ExtractionFailed(m),
        }
    }
}
