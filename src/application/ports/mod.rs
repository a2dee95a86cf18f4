mod file_loader;
mod keyword_source;
mod sentiment_classifier;
mod text_segmenter;

pub use file_loader::{FileLoader, FileLoaderError};
pub use keyword_source::KeywordSource;
pub use sentiment_classifier::{ClassifierError, SentimentClassifier};
pub use text_segmenter::TextSegmenter;
