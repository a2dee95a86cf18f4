use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DeclaredType, Document};

use super::text_sanitizer::{normalize_unicode, sanitize_extracted_text};

/// Decodes row-oriented and prose uploads. Invalid UTF-8 is replaced rather than rejected.
pub struct PlainTextAdapter;

#[async_trait]
impl FileLoader for PlainTextAdapter {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let decoded = String::from_utf8_lossy(data);

        match document.declared_type {
            DeclaredType::Tabular => Ok(normalize_unicode(&decoded)),
            DeclaredType::PlainText => Ok(sanitize_extracted_text(&decoded)),
            DeclaredType::BinaryDocument => Err(FileLoaderError::UnsupportedContentType(
                document.declared_type.as_mime().to_string(),
            )),
        }
    }
}
