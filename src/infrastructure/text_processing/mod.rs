mod composite_file_loader;
mod pdf_adapter;
mod plain_text_adapter;
mod segmenter;
mod text_sanitizer;

pub use composite_file_loader::CompositeFileLoader;
pub use pdf_adapter::{PdfAdapter, recover_pdf_text};
pub use plain_text_adapter::PlainTextAdapter;
pub use segmenter::{RuleSegmenter, segment_text};
pub use text_sanitizer::sanitize_extracted_text;
