pub mod classifier;
pub mod observability;
pub mod sentiment;
pub mod text_processing;
