use super::traits::ConfigSection;
use crate::error::GeorgeError;
use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default env_logger filter; `RUST_LOG` takes precedence when set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<LevelFilter, GeorgeError> {
        self.level.parse::<LevelFilter>().map_err(|_| {
            GeorgeError::Configuration(format!("Unknown log level: {}", self.level))
        })
    }
}

impl ConfigSection for LoggingConfig {
    fn section_name() -> &'static str {
        "logging"
    }

    fn validate(&self) -> Result<(), GeorgeError> {
        self.level_filter().map(|_| ())
    }
}
