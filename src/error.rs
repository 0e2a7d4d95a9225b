use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Malformed catalog data: {0}")]
    CatalogData(#[from] serde_json::Error),

    #[error("Score prediction failed: {0}")]
    Prediction(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
