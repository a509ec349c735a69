use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("repository not configured: {0}")]
    MissingRepository(String),

    #[error("invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("pull request dump is not a JSON array: {0}")]
    InvalidDump(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
