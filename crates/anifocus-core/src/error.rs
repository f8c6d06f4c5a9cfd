use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnifocusError {
    #[error("storage error: {0}")]
    Storage(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),

    #[error("catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
