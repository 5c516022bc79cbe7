use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExoscopeError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("CSV decode error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Dataset {url} is missing column {column}")]
    MissingColumn { url: String, column: String },

    #[error("Dataset {0} is empty")]
    EmptyDataset(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ExoscopeError>;
