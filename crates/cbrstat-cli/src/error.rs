use cbrstat_core::CoreError;
use thiserror::Error;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Validation(#[from] cbrstat_core::ValidationError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Validation(_) => 2,
            Self::Core(CoreError::Fetch(_)) => 3,
            Self::Core(CoreError::Normalize(_)) => 4,
            Self::Core(CoreError::Aggregate(_)) => 5,
            Self::Serialization(_) => 10,
            Self::Io(_) => 10,
        }
    }
}
