mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AnalysisSettings, ClassifierSettings, LoggingSettings, ServerSettings, Settings,
};
