use std::time::Duration;

use async_trait::async_trait;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::{DeclaredType, Document};

use super::text_sanitizer::{collapse_whitespace, remove_space_before_terminal, replace_disallowed};

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);

const MIN_TEXT_OBJECT_CHARS: usize = 20;
const MIN_RECOVERED_CHARS: usize = 10;

/// Recovers readable text from PDF bytes without a structural parser: text-show regions
/// between `BT` and `ET` operators are gathered word by word, with a raw printable-ASCII
/// sweep as the fallback.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }
}

/// Fails with [`FileLoaderError::ContentUnreadable`] when fewer than ten characters survive.
pub fn recover_pdf_text(data: &[u8], filename: &str) -> Result<String, FileLoaderError> {
    let mut text = clean_text_objects(&scan_text_objects(data));

    if text.chars().count() < MIN_TEXT_OBJECT_CHARS {
        tracing::debug!(
            recovered_chars = text.chars().count(),
            "Text-object scan too sparse, falling back to printable sweep"
        );
        text = clean_printable_sweep(&sweep_printable(data));
    }

    if text.chars().count() < MIN_RECOVERED_CHARS {
        return Err(FileLoaderError::ContentUnreadable(filename.to_string()));
    }

    Ok(text)
}

fn scan_text_objects(data: &[u8]) -> String {
    let mut text = String::new();
    let mut word = String::new();
    let mut in_text_object = false;
    let mut i = 0;

    while i < data.len() {
        let byte = data[i];
        match (byte, data.get(i + 1)) {
            (b'B', Some(b'T')) => {
                in_text_object = true;
                i += 2;
                continue;
            }
            (b'E', Some(b'T')) => {
                in_text_object = false;
                flush_word(&mut word, &mut text);
                i += 2;
                continue;
            }
            _ => {}
        }

        if byte == b'\n' || byte == b'\r' {
            flush_word(&mut word, &mut text);
            text.push(' ');
        } else if is_text_object_char(byte) {
            if in_text_object {
                word.push(char::from(byte));
            } else {
                text.push(char::from(byte));
            }
        }
        i += 1;
    }

    flush_word(&mut word, &mut text);
    text
}

fn flush_word(word: &mut String, text: &mut String) {
    if !word.trim().is_empty() {
        text.push_str(word);
        text.push(' ');
    }
    word.clear();
}

fn is_text_object_char(byte: u8) -> bool {
    byte.is_ascii_alphanumeric()
        || byte.is_ascii_whitespace()
        || matches!(
            byte,
            b'.' | b',' | b'!' | b'?' | b'-' | b'(' | b')' | b'[' | b']' | b'\'' | b'"'
        )
}

fn clean_text_objects(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    let stripped = replace_disallowed(&collapsed, |c| {
        is_word_char(c)
            || c.is_whitespace()
            || matches!(c, '.' | ',' | '!' | '?' | '-' | '(' | ')' | '[' | ']' | '\'' | '"')
    });
    remove_space_before_terminal(&stripped).trim().to_string()
}

fn sweep_printable(data: &[u8]) -> String {
    data.iter()
        .filter_map(|&byte| match byte {
            32..=126 => Some(char::from(byte)),
            b'\n' | b'\r' => Some(' '),
            _ => None,
        })
        .collect()
}

fn clean_printable_sweep(raw: &str) -> String {
    let collapsed = collapse_whitespace(raw);
    replace_disallowed(&collapsed, |c| {
        is_word_char(c)
            || c.is_whitespace()
            || matches!(c, '.' | ',' | '!' | '?' | '-' | '(' | ')')
    })
    .trim()
    .to_string()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if document.declared_type != DeclaredType::BinaryDocument {
            return Err(FileLoaderError::UnsupportedContentType(
                document.declared_type.as_mime().to_string(),
            ));
        }

        let bytes = data.to_vec();
        let filename = document.filename.clone();

        let text = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || recover_pdf_text(&bytes, &filename)),
        )
        .await
        .map_err(|_| FileLoaderError::ExtractionFailed("PDF text recovery timed out".to_string()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(recovered_chars = text.chars().count(), "PDF text recovery complete");

        Ok(text)
    }
}
