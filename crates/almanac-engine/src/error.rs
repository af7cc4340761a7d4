use thiserror::Error;

/// Engine layer errors
#[derive(Error, Debug)]
pub enum EngineError {
    #[error(transparent)]
    StoreError(#[from] almanac_store::error::StoreError),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Tag syntax error: {0}")]
    TagSyntaxError(String),
}

pub type EngineResult<T> = std::result::Result<T, EngineError>;
