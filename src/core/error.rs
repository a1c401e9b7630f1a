#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Import is not valid project JSON: {0}")]
    ImportParse(#[source] serde_json::Error),

    #[error("Import must be a JSON array of projects")]
    ImportNotArray,

    #[error("Project id out of range: {0}")]
    IdOutOfRange(u64),

    #[error("Duplicate project id: {0}")]
    DuplicateId(u64),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid page size: {0:?}")]
    InvalidPageSize(String),

    #[error("Browser error: {0}")]
    Browser(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
