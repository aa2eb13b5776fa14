use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeorgeError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid candidate: expected length {expected}, got {actual}")]
    InvalidCandidate { expected: usize, actual: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

pub type Result<T> = std::result::Result<T, GeorgeError>;
