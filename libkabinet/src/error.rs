//! Error types for Kabinet

use thiserror::Error;

pub type Result<T> = std::result::Result<T, KabinetError>;

#[derive(Error, Debug)]
pub enum KabinetError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Backend error: {0}")]
    Backend(#[from] BackendError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl KabinetError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            KabinetError::InvalidInput(_) => 3,
            KabinetError::Backend(_) => 1,
            KabinetError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures reported by the external backend.
///
/// `Rejected` is a definitive refusal; `Network` means the request may
/// never have reached the backend at all. Either way the caller must not
/// commit optimistic local state.
#[derive(Error, Debug, Clone)]
pub enum BackendError {
    #[error("Request rejected: {0}")]
    Rejected(String),

    #[error("Network error: {0}")]
    Network(String),
}
