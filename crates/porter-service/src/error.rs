use thiserror::Error;

use porter_store::error::StoreError;

/// Service layer errors
///
/// Policy denials are not errors; they are reported as `Outcome::LogoutAndDeny`.
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Account lookup failed for {username}: {source}")]
    AccountLookupFailed {
        username: String,
        #[source]
        source: StoreError,
    },

    #[error("Account creation failed for {username}: {source}")]
    AccountCreationFailed {
        username: String,
        #[source]
        source: StoreError,
    },

    #[error("Configuration unavailable: {0}")]
    ConfigUnavailable(String),

    #[error("Credential error: {0}")]
    CredentialError(String),

    #[error(transparent)]
    CoreError(#[from] porter_core::error::CoreError),
}

impl ServiceError {
    /// ## Summary
    /// Message that may be shown to the visitor. Internal details stay in the logs.
    #[must_use]
    pub const fn public_message(&self) -> &'static str {
        match self {
            Self::AccountLookupFailed { .. } => {
                "The account service is unavailable. Please try again later."
            }
            Self::AccountCreationFailed { .. } => {
                "Your account could not be created. Please contact the site administrator."
            }
            Self::ConfigUnavailable(_) | Self::CredentialError(_) | Self::CoreError(_) => {
                "Internal Server Error"
            }
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
