use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serde(String),
    #[error("Invalid month key: {0}")]
    InvalidMonthKey(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
