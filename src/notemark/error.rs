use thiserror::Error;

#[derive(Error, Debug)]
pub enum NoteMarkError {
    #[error("Topic not found: {0}")]
    TopicNotFound(String),

    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    #[error("Catalog integrity error: {0}")]
    Integrity(String),

    #[error("Gateway error: {0}")]
    Gateway(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, NoteMarkError>;
