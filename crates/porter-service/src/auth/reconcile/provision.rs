use porter_core::{
    account::{Account, AccountStatus, NewAccount},
    config::GatewayConfig,
    identity::is_friend_account,
};
use porter_store::store::AccountStore;

use crate::auth::credential::{generate_initial_credential, hash_credential};
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Email address for a provisioned account.
///
/// Friend accounts already are addresses and are used verbatim; everyone
/// else gets the configured domain appended.
#[must_use]
pub fn provisioned_email(username: &str, friend_realm: bool, cfg: &GatewayConfig) -> String {
    if is_friend_account(username, friend_realm) {
        username.to_string()
    } else {
        format!("{username}@{}", cfg.autocreate_email_domain)
    }
}

/// ## Summary
/// Creates an active account for an asserted username.
///
/// ## Side Effects
/// - Inserts an account into the account store
///
/// ## Errors
/// Returns `AccountCreationFailed` if the store rejects the account (for
/// example on a name collision). The failure is not retried.
#[tracing::instrument(skip(cfg, accounts))]
pub async fn provision_account(
    username: &str,
    friend_realm: bool,
    cfg: &GatewayConfig,
    accounts: &dyn AccountStore,
) -> ServiceResult<Account> {
    let new_account = NewAccount {
        name: username.to_string(),
        email: provisioned_email(username, friend_realm, cfg),
        password_hash: hash_credential(&generate_initial_credential())?,
        status: AccountStatus::Active,
    };

    tracing::debug!(email = %new_account.email, "Creating account for asserted identity");

    let account = accounts
        .create(new_account)
        .await
        .map_err(|source| ServiceError::AccountCreationFailed {
            username: username.to_string(),
            source,
        })?;

    tracing::info!(account_id = %account.id, email = %account.email, "Account created");

    Ok(account)
}
