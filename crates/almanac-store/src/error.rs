use thiserror::Error;

/// Storage layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Calendar not found: {0}")]
    CalendarNotFound(String),

    #[error(transparent)]
    CoreError(#[from] almanac_core::error::CoreError),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
