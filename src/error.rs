use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtelierError {
    #[error("Not an atelier workspace. Run 'atelier init' first.")]
    NotInitialized,

    #[error("Already initialized. Remove .atelier/ to reinitialize.")]
    AlreadyInitialized,

    #[error("Work not found: {0}")]
    WorkNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AtelierError>;
