use thiserror::Error;

/// Store layer errors
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Conflict: an account named {0} already exists")]
    Conflict(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
