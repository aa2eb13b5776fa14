use super::{
    evolution::EvolutionConfig,
    logging::LoggingConfig,
    traits::ConfigSection,
};
use crate::error::GeorgeError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Prefix for environment overrides, e.g. `GEORGE_EVOLUTION__TARGET`.
pub const ENV_PREFIX: &str = "GEORGE";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub evolution: EvolutionConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), GeorgeError> {
        validate_section(&self.evolution)?;
        validate_section(&self.logging)?;
        Ok(())
    }
}

/// Tag configuration errors with the section they came from.
fn validate_section<S: ConfigSection>(section: &S) -> Result<(), GeorgeError> {
    section.validate().map_err(|e| match e {
        GeorgeError::Configuration(msg) => {
            GeorgeError::Configuration(format!("[{}] {}", S::section_name(), msg))
        }
        other => other,
    })
}

pub struct ConfigManager {
    config: Arc<RwLock<AppConfig>>,
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: Arc::new(RwLock::new(AppConfig::default())),
        }
    }

    /// Load a TOML file, with `GEORGE_*` environment variables layered on top.
    pub fn load_from_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GeorgeError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(GeorgeError::Configuration(format!(
                "Config file not found: {}",
                path.display()
            )));
        }

        let builder = config::Config::builder()
            .add_source(config::File::from(path).format(config::FileFormat::Toml));
        self.install(Self::with_env(builder).build()?.try_deserialize()?)
    }

    /// Defaults plus `GEORGE_*` environment variables, no file.
    pub fn load_from_env(&self) -> Result<(), GeorgeError> {
        let builder = config::Config::builder();
        self.install(Self::with_env(builder).build()?.try_deserialize()?)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GeorgeError> {
        let toml_str = toml::to_string_pretty(&*self.read())?;
        std::fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get(&self) -> AppConfig {
        self.read().clone()
    }

    /// Apply `f` and re-validate; the previous config is restored if validation fails.
    pub fn update<F>(&self, f: F) -> Result<(), GeorgeError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.write();
        let mut candidate = config.clone();
        f(&mut candidate);
        candidate.validate()?;
        *config = candidate;
        Ok(())
    }

    fn with_env(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        )
    }

    fn install(&self, config: AppConfig) -> Result<(), GeorgeError> {
        config.validate()?;
        log::debug!("Installing config: {:?}", config);
        *self.write() = config;
        Ok(())
    }

    fn read(&self) -> RwLockReadGuard<'_, AppConfig> {
        self.config.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, AppConfig> {
        self.config.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
