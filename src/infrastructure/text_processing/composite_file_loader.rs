use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DeclaredType, Document};

use super::{PdfAdapter, PlainTextAdapter};

/// Routes each document to the loader registered for its declared type.
pub struct CompositeFileLoader {
    adapters: HashMap<DeclaredType, Arc<dyn FileLoader>>,
}

impl CompositeFileLoader {
    pub fn new(adapters: Vec<(DeclaredType, Arc<dyn FileLoader>)>) -> Self {
        Self {
            adapters: adapters.into_iter().collect(),
        }
    }

    /// Plain-text decoding for rows and prose, byte-stream recovery for PDFs.
    pub fn standard() -> Self {
        let text_adapter: Arc<dyn FileLoader> = Arc::new(PlainTextAdapter);
        let pdf_adapter: Arc<dyn FileLoader> = Arc::new(PdfAdapter::new());
        Self::new(vec![
            (DeclaredType::Tabular, Arc::clone(&text_adapter)),
            (DeclaredType::PlainText, text_adapter),
            (DeclaredType::BinaryDocument, pdf_adapter),
        ])
    }
}

#[async_trait]
impl FileLoader for CompositeFileLoader {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        let adapter = self.adapters.get(&document.declared_type).ok_or_else(|| {
            FileLoaderError::UnsupportedContentType(document.declared_type.as_mime().to_string())
        })?;

        adapter.extract_text(data, document).await
    }
}
