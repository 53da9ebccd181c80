use crate::model::PersonId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RollcallError {
    /// Rejected input, e.g. a roster with a duplicate id. Nothing was changed.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Person not found: {0}")]
    NotFound(PersonId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, RollcallError>;
