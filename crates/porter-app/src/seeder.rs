//! Loads configured accounts into the account store at startup.

use porter_core::{
    account::{AccountStatus, NewAccount},
    config::SeedAccount,
};
use porter_service::auth::credential::{generate_initial_credential, hash_credential};
use porter_store::store::AccountStore;

use crate::error::AppResult;

/// ## Summary
/// Inserts every seed account with a random credential.
///
/// ## Errors
/// Returns an error if hashing fails or the store rejects an account (for
/// example a duplicate name in the configuration).
#[tracing::instrument(skip_all, fields(count = seeds.len()))]
pub async fn seed_accounts(accounts: &dyn AccountStore, seeds: &[SeedAccount]) -> AppResult<usize> {
    for seed in seeds {
        let status = if seed.blocked {
            AccountStatus::Blocked
        } else {
            AccountStatus::Active
        };

        let account = accounts
            .create(NewAccount {
                name: seed.name.clone(),
                email: seed.email.clone(),
                password_hash: hash_credential(&generate_initial_credential())?,
                status,
            })
            .await?;

        tracing::debug!(account_id = %account.id, name = %account.name, %status, "Seeded account");
    }

    Ok(seeds.len())
}
