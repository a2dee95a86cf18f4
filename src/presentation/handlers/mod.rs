mod analyze;
mod analyze_file;
mod health;
pub mod models;

pub use analyze::analyze_handler;
pub use analyze_file::analyze_file_handler;
pub use health::health_handler;
