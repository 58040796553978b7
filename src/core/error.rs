use thiserror::Error;

#[derive(Error, Debug)]
pub enum RaidguardError {
    #[error("Invalid version string: {0}")]
    InvalidVersion(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RaidguardError>;
