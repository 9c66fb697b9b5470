use salvo::http::StatusCode;
use thiserror::Error;

use porter_service::error::ServiceError;
use porter_store::error::StoreError;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ServiceError(#[from] ServiceError),

    #[error(transparent)]
    StoreError(#[from] StoreError),

    #[error(transparent)]
    CoreError(#[from] porter_core::error::CoreError),
}

impl AppError {
    /// Store outages are temporary; everything else is a server fault.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::ServiceError(ServiceError::AccountLookupFailed { .. })
            | Self::StoreError(StoreError::Unavailable(_)) => StatusCode::SERVICE_UNAVAILABLE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::ServiceError(err) => err.public_message(),
            Self::StoreError(StoreError::Unavailable(_)) => {
                "The account service is unavailable. Please try again later."
            }
            Self::StoreError(_) | Self::CoreError(_) => "Internal Server Error",
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
