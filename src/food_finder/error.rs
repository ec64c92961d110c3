use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Line {line}: {reason}")]
    Parse { line: usize, reason: String },

    #[error("Not a number: {0:?}")]
    InvalidAmount(String),

    #[error("Restaurant file not usable: {0}")]
    Unusable(String),
}

pub type Result<T> = std::result::Result<T, FinderError>;
