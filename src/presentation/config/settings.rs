use serde::Deserialize;

use super::Environment;
use crate::application::services::{DEFAULT_CLASSIFIER_TIMEOUT, DEFAULT_MAX_CONCURRENCY};
use crate::infrastructure::classifier::DEFAULT_MAX_INPUT_CHARS;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub classifier: ClassifierSettings,
    pub analysis: AnalysisSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub api_token: Option<String>,
    pub timeout_ms: u64,
    pub max_input_chars: usize,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            endpoint: None,
            api_token: None,
            timeout_ms: DEFAULT_CLASSIFIER_TIMEOUT.as_millis() as u64,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisSettings {
    pub max_concurrency: usize,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub json_format: bool,
}

impl Settings {
    /// Layers `appsettings.{environment}.toml` (optional) under `APP_`-prefixed
    /// environment variables, e.g. `APP_CLASSIFIER__ENDPOINT`.
    pub fn load(environment: Environment) -> Result<Self, config::ConfigError> {
        let file_name = format!("appsettings.{}", environment.as_str().to_lowercase());

        config::Config::builder()
            .add_source(config::File::with_name(&file_name).required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}
